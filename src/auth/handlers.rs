//! Authentication handlers

use axum::extract::{Extension, Json};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::extractors::AuthedUser;
use super::models::{
    split_name, ChangePasswordRequest, Claims, LoginRequest, RegisterRequest, User, UserView,
};
use super::password::{hash_password_async, verify_password_async};
use super::validators::AuthValidator;
use crate::common::helpers::normalize_email;
use crate::common::{
    generate_user_id, safe_email_log, ApiError, ApiResponse, AppState, Validator,
};
use crate::profile::models::UserProfile;
use crate::storage::{Collection, DocumentStore, DocumentStoreExt, StoreError};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Issue an HS256 access token for a user
pub fn create_token(
    secret: &str,
    ttl_hours: i64,
    user_id: &str,
    email: &str,
) -> Result<String, ApiError> {
    let exp = (Utc::now() + Duration::hours(ttl_hours)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        error!(error = %e, user_id = %user_id, "JWT encoding error");
        ApiError::InternalServer("jwt error".to_string())
    })
}

pub(crate) async fn find_user_by_email(
    store: &dyn DocumentStore,
    email: &str,
) -> Result<Option<User>, ApiError> {
    let users: Vec<User> = store
        .query_as(Collection::Users, "email", &json!(email))
        .await?;
    Ok(users.into_iter().next())
}

pub(crate) async fn load_user(store: &dyn DocumentStore, user_id: &str) -> Result<User, ApiError> {
    store
        .get_as::<User>(Collection::Users, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

/// POST /api/auth/register
///
/// # Request Body
/// ```json
/// { "name": "Asha Rao", "email": "asha@example.com", "password": "secret1", "phone": "9876543210" }
/// ```
///
/// 400 on missing or invalid fields, 409 when the email is taken.
pub async fn register_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    AuthValidator.validate(&payload).into_result()?;

    // validated above
    let name = payload.name.as_deref().unwrap_or_default().trim().to_string();
    let email = normalize_email(payload.email.as_deref().unwrap_or_default());
    let password = payload.password.as_deref().unwrap_or_default();

    if find_user_by_email(state.store.as_ref(), &email).await?.is_some() {
        warn!(email = %safe_email_log(&email), "Registration rejected: email already exists");
        return Err(ApiError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let (first_name, last_name) = split_name(&name);
    let now = Utc::now();
    let user = User {
        id: generate_user_id(),
        name,
        first_name,
        last_name,
        email,
        password_hash: hash_password_async(password).await?,
        phone: payload
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        is_active: true,
        created_at: now,
        updated_at: now,
        last_login_at: None,
        profile: UserProfile::default(),
    };

    // the lookup above is a fast path; the store's unique email is authoritative
    match state.store.create_as(Collection::Users, &user.id, &user).await {
        Ok(()) => {}
        Err(StoreError::Conflict(_)) => {
            warn!(
                email = %safe_email_log(&user.email),
                "Registration rejected: email taken concurrently"
            );
            return Err(ApiError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    }

    let token = create_token(&state.jwt_secret, state.jwt_ttl_hours, &user.id, &user.email)?;

    info!(
        user_id = %user.id,
        email = %safe_email_log(&user.email),
        "New user registered"
    );

    Ok(ApiResponse::ok_with_message(
        "User registered successfully",
        json!({ "user": UserView::from(&user), "token": token }),
    ))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password produce the same 401.
pub async fn login_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    AuthValidator.validate(&payload).into_result()?;

    let email = normalize_email(payload.email.as_deref().unwrap_or_default());
    let password = payload.password.as_deref().unwrap_or_default();

    let found = find_user_by_email(state.store.as_ref(), &email).await?;
    let verified =
        verify_password_async(password, found.as_ref().map(|u| u.password_hash.as_str())).await?;

    let Some(user) = found else {
        warn!(email = %safe_email_log(&email), "Login failed: unknown email");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    if !verified {
        warn!(user_id = %user.id, "Login failed: wrong password");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    if !user.is_active {
        warn!(user_id = %user.id, "Login rejected: account is deactivated");
        return Err(ApiError::Unauthorized("Account is deactivated".to_string()));
    }

    let now = Utc::now();
    let user = state
        .store
        .update_as(Collection::Users, &user.id, move |user: &mut User| {
            user.last_login_at = Some(now);
            user.updated_at = now;
        })
        .await?
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let token = create_token(&state.jwt_secret, state.jwt_ttl_hours, &user.id, &user.email)?;

    info!(user_id = %user.id, email = %safe_email_log(&user.email), "User logged in");

    Ok(ApiResponse::ok_with_message(
        "Login successful",
        json!({ "user": UserView::from(&user), "token": token }),
    ))
}

/// GET /api/auth/profile
pub async fn profile_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let user = load_user(state.store.as_ref(), &authed.id).await?;

    Ok(ApiResponse::ok(json!({ "user": UserView::from(&user) })))
}

/// PUT /api/auth/change-password
pub async fn change_password_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    AuthValidator.validate(&payload).into_result()?;

    let user = load_user(state.store.as_ref(), &authed.id).await?;

    if !verify_password_async(&payload.current_password, Some(&user.password_hash)).await? {
        warn!(user_id = %user.id, "Password change rejected: wrong current password");
        return Err(ApiError::Unauthorized(
            "Current password is incorrect".to_string(),
        ));
    }

    let password_hash = hash_password_async(&payload.new_password).await?;
    state
        .store
        .update_as(Collection::Users, &user.id, move |user: &mut User| {
            user.password_hash = password_hash;
            user.updated_at = Utc::now();
        })
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    info!(user_id = %authed.id, "Password changed");

    Ok(ApiResponse::message("Password changed successfully"))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout_handler() -> Json<ApiResponse> {
    info!("User logout requested");
    ApiResponse::message("Logged out successfully")
}
