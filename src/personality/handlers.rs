// src/personality/handlers.rs

use axum::extract::{Extension, Json};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{PersonalityInsights, PersonalityProfile, PersonalityTest, SubmitPersonalityRequest};
use super::questions::{ESTIMATED_TIME, PERSONALITY_QUESTIONS};
use super::scoring::{calculate_scores, derive_profile};
use crate::auth::AuthedUser;
use crate::common::{generate_personality_test_id, ApiError, ApiResponse, AppState};
use crate::profile::completion::record_assessment;
use crate::profile::models::AssessmentKind;
use crate::services::generate;
use crate::storage::{Collection, DocumentStoreExt};

fn insights_prompt(profile: &PersonalityProfile) -> String {
    let top_traits: Vec<&str> = profile.top_traits.iter().map(|t| t.name.as_str()).collect();
    format!(
        "Based on this personality assessment data, provide detailed career insights.\n\
         Personality Type: {}\n\
         Top Traits: {}\n\
         Strengths: {}\n\
         Development Areas: {}\n\n\
         Respond with a single JSON object and nothing else, using exactly these keys:\n\
         \"career_recommendations\" (array of job titles), \
         \"ideal_environments\" (array of strings), \
         \"leadership_style\" (string), \
         \"communication_preferences\" (string), \
         \"learning_recommendations\" (array of strings).",
        profile.personality_type,
        top_traits.join(", "),
        profile.strengths.join(", "),
        profile.development_areas.join(", "),
    )
}

/// GET /api/personality/questions
pub async fn get_questions_handler() -> Json<ApiResponse> {
    ApiResponse::ok(json!({
        "questions": &PERSONALITY_QUESTIONS[..],
        "total_questions": PERSONALITY_QUESTIONS.len(),
        "estimated_time": ESTIMATED_TIME,
    }))
}

/// POST /api/personality/submit
///
/// # Request Body
/// ```json
/// { "answers": { "1": 0, "2": 3 } }
/// ```
///
/// Keys are question ids, values zero-based option indexes.
pub async fn submit_personality_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<SubmitPersonalityRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    info!(
        user_id = %authed.id,
        answered = request.answers.len(),
        "Personality test submitted"
    );

    let scores = calculate_scores(&request.answers);
    let profile = derive_profile(&scores);

    let outcome = generate(
        state.generator(),
        "personality_insights",
        &insights_prompt(&profile),
        PersonalityInsights::fallback,
    )
    .await;

    let test = PersonalityTest {
        id: generate_personality_test_id(),
        user_id: authed.id.clone(),
        answers: request.answers,
        scores: scores.to_map(),
        profile: profile.clone(),
        ai_insights: outcome.value.clone(),
        ai_status: outcome.status(),
        completed_at: Utc::now(),
    };
    state
        .store
        .put_as(Collection::PsychometricTests, &test.id, &test)
        .await?;

    let completion = record_assessment(
        state.store.as_ref(),
        &authed.id,
        AssessmentKind::Personality,
        Some(profile),
    )
    .await?;

    info!(
        user_id = %authed.id,
        test_id = %test.id,
        personality_type = %test.profile.personality_type,
        degraded = outcome.is_degraded(),
        "Personality test stored"
    );

    Ok(ApiResponse::ok_with_message(
        "Personality assessment completed successfully",
        json!({
            "test_id": test.id,
            "profile": test.profile,
            "scores": scores,
            "ai_insights": test.ai_insights,
            "recommendations": test.ai_insights.career_recommendations,
            "ai_status": test.ai_status,
            "profile_completion": completion,
        }),
    ))
}
