// src/services/mod.rs
//
// Shared services used across the domain modules

pub mod gemini;
pub mod insights;

pub use gemini::{GeminiError, GeminiService, TextGenerator};
pub use insights::{generate, AiOutcome, AiStatus, Degradation, InsightSchema};
