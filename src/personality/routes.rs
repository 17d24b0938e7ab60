// src/personality/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// - `GET /api/personality/questions` - The questionnaire
/// - `POST /api/personality/submit` - Score answers and store the result
pub fn personality_routes() -> Router {
    Router::new()
        .route(
            "/api/personality/questions",
            get(handlers::get_questions_handler),
        )
        .route(
            "/api/personality/submit",
            post(handlers::submit_personality_handler),
        )
}
