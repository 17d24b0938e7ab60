// src/assessments/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the assessments router
pub fn assessments_routes() -> Router {
    Router::new()
        // Career questionnaire
        .route(
            "/api/assessments/questions",
            get(handlers::get_career_questions_handler),
        )
        .route(
            "/api/assessments/submit-answers",
            post(handlers::submit_answers_handler),
        )
        .route(
            "/api/assessments/recommendations",
            get(handlers::get_recommendations_handler),
        )
        // Custom graded assessments
        .route(
            "/api/assessments",
            get(handlers::list_assessments_handler).post(handlers::create_assessment_handler),
        )
        .route(
            "/api/assessments/:id",
            get(handlers::get_assessment_handler),
        )
        .route(
            "/api/assessments/:id/start",
            post(handlers::start_assessment_handler),
        )
        .route(
            "/api/assessments/:id/responses",
            post(handlers::submit_response_handler),
        )
        .route(
            "/api/assessments/:id/complete",
            post(handlers::complete_assessment_handler),
        )
}
