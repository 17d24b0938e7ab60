//! # Personality Module
//!
//! Personality questionnaire, additive trait scoring and the derived
//! profile (archetype, top traits, strengths, development areas).

pub mod handlers;
pub mod models;
pub mod questions;
pub mod routes;
pub mod scoring;


pub use routes::personality_routes;
