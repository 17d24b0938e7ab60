// src/app.rs
//! Router composition shared by the binary and the handler tests

use axum::{
    extract::Extension,
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::common::AppState;
use crate::{assessments, auth, logging_middleware, market, personality, profile, roadmap};

/// GET /
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "CareerBridge API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "features": [
            "Career Assessment",
            "Personality Assessment",
            "Market Trends",
            "Career Roadmap",
            "AI Recommendations"
        ]
    }))
}

/// GET /health
async fn health_handler(Extension(state_lock): Extension<Arc<RwLock<AppState>>>) -> Json<Value> {
    let state = state_lock.read().await;
    Json(json!({
        "success": true,
        "message": "CareerBridge API is running",
        "status": "healthy",
        "ai_available": state.ai_available(),
    }))
}

fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
        ])
        .allow_credentials(true)
}

pub fn build_app(shared: Arc<RwLock<AppState>>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        // ====================================================================
        // AUTHENTICATION ROUTES
        // ====================================================================
        .merge(auth::auth_routes())
        // ====================================================================
        // CAREER ASSESSMENT ROUTES (Questionnaire, Recommendations, Graded)
        // ====================================================================
        .merge(assessments::assessments_routes())
        // ====================================================================
        // PROFILE AND PERSONALITY ROUTES
        // ====================================================================
        .merge(profile::profile_routes())
        .merge(personality::personality_routes())
        // ====================================================================
        // MARKET AND ROADMAP ROUTES
        // ====================================================================
        .merge(market::market_routes())
        .merge(roadmap::roadmap_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}
