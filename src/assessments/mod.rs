//! # Assessments Module
//!
//! - The career questionnaire and its course recommendations, generated by
//!   the model or by the rule engine in [`engine`]
//! - Custom graded assessments with per-question scoring in [`grading`]

pub mod engine;
pub mod grading;
pub mod handlers;
pub mod models;
pub mod questions;
pub mod routes;
pub mod validators;


pub use routes::assessments_routes;
