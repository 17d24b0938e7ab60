//! Authentication routes

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/auth/register` - Create an account
/// - `POST /api/auth/login` - Exchange credentials for a token
/// - `POST /api/auth/logout` - Logout (client-side token removal)
/// - `GET /api/auth/profile` - Current user
/// - `PUT /api/auth/change-password` - Change password
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::register_handler))
        .route("/api/auth/login", post(handlers::login_handler))
        .route("/api/auth/logout", post(handlers::logout_handler))
        .route("/api/auth/profile", get(handlers::profile_handler))
        .route(
            "/api/auth/change-password",
            put(handlers::change_password_handler),
        )
}
