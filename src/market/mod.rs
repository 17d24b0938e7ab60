// src/market/mod.rs

pub mod data;
pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::market_routes;
