// src/profile/routes.rs

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers;

pub fn profile_routes() -> Router {
    Router::new()
        .route(
            "/api/profile/:user_id",
            get(handlers::get_profile_handler).put(handlers::update_profile_handler),
        )
        .route(
            "/api/profile/:user_id/update",
            put(handlers::update_profile_handler),
        )
}
