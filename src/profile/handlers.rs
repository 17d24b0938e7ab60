// src/profile/handlers.rs

use axum::extract::{Extension, Json, Path};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::completion::refresh_completion;
use super::models::UpdateProfileRequest;
use super::validators::ProfileValidator;
use crate::auth::handlers::load_user;
use crate::auth::models::UserView;
use crate::auth::{AuthedUser, User};
use crate::common::{ApiError, ApiResponse, AppState, Validator};
use crate::storage::{Collection, DocumentStore, DocumentStoreExt};

/// Load the user at `user_id` and make sure the caller owns it.
/// Unknown ids are 404 before ownership is considered.
async fn load_owned_user(
    store: &dyn DocumentStore,
    user_id: &str,
    authed: &AuthedUser,
) -> Result<User, ApiError> {
    let user = load_user(store, user_id).await?;
    if user.id != authed.id {
        warn!(
            user_id = %user_id,
            caller = %authed.id,
            "Profile access denied: caller is not the owner"
        );
        return Err(ApiError::Forbidden(
            "You can only access your own profile".to_string(),
        ));
    }
    Ok(user)
}

/// GET /api/profile/:user_id - Profile with assessment history
pub async fn get_profile_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let store = state.store.as_ref();

    let user = load_owned_user(store, &user_id, &authed).await?;
    let owner = json!(user.id);

    let assessments: Vec<Value> = store
        .query(Collection::AssessmentResponses, "user_id", &owner)
        .await?;
    let recommendations: Vec<Value> = store
        .query(Collection::Recommendations, "user_id", &owner)
        .await?;
    let personality_tests: Vec<Value> = store
        .query(Collection::PsychometricTests, "user_id", &owner)
        .await?;

    Ok(ApiResponse::ok(json!({
        "user": UserView::from(&user),
        "assessments": assessments,
        "recommendations": recommendations,
        "personality_tests": personality_tests,
        "profile_completion": user.profile.completion_percentage,
    })))
}

/// PUT /api/profile/:user_id (and /api/profile/:user_id/update)
pub async fn update_profile_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = load_owned_user(state.store.as_ref(), &user_id, &authed).await?;

    ProfileValidator.validate(&request).into_result()?;

    info!(user_id = %user.id, "Profile update request received");

    // applied to the latest stored copy so concurrent submissions are kept
    let user = state
        .store
        .update_as(Collection::Users, &user.id, move |user: &mut User| {
            apply_update(user, request);
            refresh_completion(&mut user.profile);
            user.updated_at = Utc::now();
        })
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    let completion = user.profile.completion_percentage;

    info!(user_id = %user.id, completion = completion, "Profile updated");

    Ok(ApiResponse::ok_with_message(
        "Profile updated successfully",
        json!({
            "user": UserView::from(&user),
            "completion_percentage": completion,
        }),
    ))
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn apply_update(user: &mut User, request: UpdateProfileRequest) {
    if let Some(name) = request.name {
        let (first_name, last_name) = crate::auth::models::split_name(&name);
        user.name = name.trim().to_string();
        user.first_name = first_name;
        user.last_name = last_name;
    }
    if let Some(phone) = request.phone {
        let phone = phone.trim().to_string();
        user.phone = if phone.is_empty() { None } else { Some(phone) };
    }

    let profile = &mut user.profile;
    if let Some(goals) = request.career_goals {
        profile.career_goals = clean_list(goals);
    }
    if let Some(skills) = request.skills {
        profile.skills = clean_list(skills);
    }
    if let Some(industries) = request.preferred_industries {
        profile.preferred_industries = clean_list(industries);
    }
    if let Some(level) = request.experience_level {
        profile.experience_level = level;
    }
    if request.education_level.is_some() {
        profile.education_level = request.education_level;
    }
    if request.location.is_some() {
        profile.location = request.location;
    }
    if request.bio.is_some() {
        profile.bio = request.bio;
    }
}
