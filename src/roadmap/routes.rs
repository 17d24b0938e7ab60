// src/roadmap/routes.rs

use axum::{routing::post, Router};

use super::handlers;

pub fn roadmap_routes() -> Router {
    Router::new().route(
        "/api/roadmap/generate",
        post(handlers::generate_roadmap_handler),
    )
}
