// src/market/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// - `GET /api/market/trends` - Industry trends with AI analysis
/// - `GET /api/market/skills` - Skill demand
/// - `GET /api/market/salary` - Salary reference for a job title
pub fn market_routes() -> Router {
    Router::new()
        .route("/api/market/trends", get(handlers::get_trends_handler))
        .route("/api/market/skills", get(handlers::get_skills_handler))
        .route("/api/market/salary", get(handlers::get_salary_handler))
}
