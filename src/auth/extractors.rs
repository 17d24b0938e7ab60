//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::models::{Claims, User};
use crate::common::{safe_email_log, ApiError, AppState};
use crate::storage::{Collection, DocumentStoreExt};

/// Authenticated user extractor
///
/// Validates the bearer JWT and loads the user from the store. Deleted or
/// deactivated accounts are rejected even while their token is unexpired.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.trim().to_string());

        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("Authentication required".into()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let bare_token = token.strip_prefix("Bearer ").unwrap_or(&token).trim();

        let decoded = match decode::<Claims>(
            bare_token,
            &DecodingKey::from_secret(app_state.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(d) => d,
            Err(e) => {
                warn!(error = %e, "JWT token validation failed");
                return Err(ApiError::Unauthorized("Invalid or expired token".into()));
            }
        };

        let user_id = decoded.claims.sub;

        let user = app_state
            .store
            .get_as::<User>(Collection::Users, &user_id)
            .await?;

        match user {
            Some(u) if u.is_active => {
                debug!(
                    user_id = %u.id,
                    email = %safe_email_log(&u.email),
                    "User authentication successful via extractor"
                );
                Ok(AuthedUser {
                    id: u.id,
                    email: u.email,
                })
            }
            Some(u) => {
                warn!(user_id = %u.id, "Authentication failed: account is deactivated");
                Err(ApiError::Unauthorized("Account is deactivated".into()))
            }
            None => {
                warn!(user_id = %user_id, "Authentication failed: user not found in store");
                Err(ApiError::Unauthorized("User not found".into()))
            }
        }
    }
}
