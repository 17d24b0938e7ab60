// src/roadmap/handlers.rs

use axum::extract::{Extension, Json};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{Roadmap, RoadmapRequest};
use crate::auth::handlers::load_user;
use crate::auth::AuthedUser;
use crate::common::{ApiError, ApiResponse, AppState};
use crate::personality::models::PersonalityProfile;
use crate::services::generate;

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None given".to_string()
    } else {
        items.join(", ")
    }
}

fn roadmap_prompt(request: &RoadmapRequest, personality: Option<&PersonalityProfile>) -> String {
    let personality = match personality {
        Some(profile) => format!(
            "{} (top traits: {})",
            profile.personality_type,
            profile
                .top_traits
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        None => "Not assessed".to_string(),
    };

    format!(
        "Create a career roadmap based on:\n\
         Career Goals: {}\n\
         Current Skills: {}\n\
         Experience Level: {}\n\
         Personality Profile: {}\n\n\
         Respond with a single JSON object and nothing else, shaped as:\n\
         {{\"short_term\": PHASE, \"medium_term\": PHASE, \"long_term\": PHASE, \
         \"learning_resources\": [{{\"name\": \"string\", \"platform\": \"string\", \"focus\": \"string\"}}]}}\n\
         where PHASE is {{\"duration\": \"string\", \"goals\": [\"string\"], \"skills\": [\"string\"], \
         \"milestones\": [\"string\"]}} and the phases cover 6 months, 1 year and 3 years.",
        list_or_none(&request.career_goals),
        list_or_none(&request.current_skills),
        request.experience_level,
        personality,
    )
}

/// POST /api/roadmap/generate
///
/// # Request Body
/// ```json
/// { "career_goals": ["Data Scientist"], "current_skills": ["Python"], "experience_level": "Entry Level" }
/// ```
///
/// The caller's stored personality profile, if any, is folded into the prompt.
pub async fn generate_roadmap_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = load_user(state.store.as_ref(), &authed.id).await?;
    let personality = user.profile.personality_profile.as_ref();

    let outcome = generate(
        state.generator(),
        "career_roadmap",
        &roadmap_prompt(&request, personality),
        Roadmap::fallback,
    )
    .await;

    info!(
        user_id = %authed.id,
        goals = request.career_goals.len(),
        has_personality = personality.is_some(),
        degraded = outcome.is_degraded(),
        "Career roadmap generated"
    );

    Ok(ApiResponse::ok(json!({
        "roadmap": outcome.value,
        "ai_status": outcome.status(),
        "generated_at": Utc::now(),
        "user_id": authed.id,
    })))
}
