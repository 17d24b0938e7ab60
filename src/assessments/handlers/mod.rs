// src/assessments/handlers/mod.rs

pub mod career;
pub mod custom;

pub use career::*;
pub use custom::*;
