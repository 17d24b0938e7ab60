// src/assessments/handlers/career.rs
//! Career questionnaire: questions, submission and stored recommendations

use axum::extract::{Extension, Json};
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::assessments::engine;
use crate::assessments::models::{
    AssessmentResponse, Recommendation, RecommendationStatus, SubmitAnswersRequest,
};
use crate::assessments::questions::{
    CAREER_QUESTIONS, EDUCATION, ESTIMATED_TIME, EXPERIENCE, GOALS, INTERESTS, LEARNING_STYLE,
    MOTIVATION, SKILLS, WORK_ENVIRONMENT,
};
use crate::auth::AuthedUser;
use crate::common::helpers::answer_as_list;
use crate::common::{
    generate_recommendation_id, generate_response_id, ApiError, ApiResponse, AppState,
};
use crate::profile::completion::record_assessment;
use crate::profile::models::AssessmentKind;
use crate::services::generate;
use crate::storage::{Collection, DocumentStoreExt};

const ASSESSMENT_TYPE: &str = "career_guidance";

fn answer_line(answers: &Map<String, Value>, key: &str) -> String {
    let values = answer_as_list(answers.get(key));
    if values.is_empty() {
        "Not specified".to_string()
    } else {
        values.join(", ")
    }
}

fn recommendation_prompt(answers: &Map<String, Value>) -> String {
    format!(
        "You are a career guidance expert. Based on the following assessment answers, \
         recommend courses for this student.\n\n\
         STUDENT PROFILE:\n\
         - Education Level: {}\n\
         - Career Interests: {}\n\
         - Work Experience: {}\n\
         - Preferred Work Environment: {}\n\
         - Current Skills: {}\n\
         - Career Goals: {}\n\
         - Learning Style: {}\n\
         - Motivation: {}\n\n\
         Respond with a single JSON object and nothing else:\n\
         {{\n\
           \"career_path\": \"string\",\n\
           \"skill_gaps\": [\"string\"],\n\
           \"courses\": [{{\"title\": \"string\", \"description\": \"string\", \"category\": \"string\", \
         \"difficulty\": \"Beginner|Intermediate|Advanced\", \"duration\": \"string\", \"platform\": \"string\", \
         \"priority\": \"High|Medium|Low\", \"reason\": \"string\"}}],\n\
           \"learning_path\": \"string\",\n\
           \"next_steps\": [\"string\"]\n\
         }}\n\
         Provide 5-8 courses that bridge the student's current level to their goals.",
        answer_line(answers, EDUCATION),
        answer_line(answers, INTERESTS),
        answer_line(answers, EXPERIENCE),
        answer_line(answers, WORK_ENVIRONMENT),
        answer_line(answers, SKILLS),
        answer_line(answers, GOALS),
        answer_line(answers, LEARNING_STYLE),
        answer_line(answers, MOTIVATION),
    )
}

/// GET /api/assessments/questions
pub async fn get_career_questions_handler() -> Json<ApiResponse> {
    ApiResponse::ok(json!({
        "questions": &CAREER_QUESTIONS[..],
        "total_questions": CAREER_QUESTIONS.len(),
        "estimated_time": ESTIMATED_TIME,
    }))
}

/// POST /api/assessments/submit-answers
///
/// # Request Body
/// ```json
/// { "answers": { "1": "Bachelor's Degree", "2": ["Engineering"], "3": "2-3 years (Junior)" } }
/// ```
///
/// The bare answer map is accepted as well.
pub async fn submit_answers_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<SubmitAnswersRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let answers = request.into_answers();

    if answers.is_empty() {
        return Err(ApiError::BadRequest("Answers are required".to_string()));
    }

    let response = AssessmentResponse {
        id: generate_response_id(),
        user_id: authed.id.clone(),
        answers,
        assessment_type: ASSESSMENT_TYPE.to_string(),
        submitted_at: Utc::now(),
    };
    state
        .store
        .put_as(Collection::AssessmentResponses, &response.id, &response)
        .await?;

    info!(
        user_id = %authed.id,
        response_id = %response.id,
        answered = response.answers.len(),
        "Career assessment submitted"
    );

    let outcome = generate(
        state.generator(),
        "course_recommendations",
        &recommendation_prompt(&response.answers),
        || engine::recommend(&response.answers),
    )
    .await;

    let recommendation = Recommendation {
        id: generate_recommendation_id(),
        user_id: authed.id.clone(),
        assessment_response_id: response.id.clone(),
        ai_model: if outcome.is_degraded() {
            "fallback".to_string()
        } else {
            state.ai_model().to_string()
        },
        status: if outcome.is_degraded() {
            RecommendationStatus::Degraded
        } else {
            RecommendationStatus::Completed
        },
        degradation: outcome.degradation,
        recommendations: outcome.value.clone(),
        generated_at: Utc::now(),
    };
    state
        .store
        .put_as(Collection::Recommendations, &recommendation.id, &recommendation)
        .await?;

    let completion = record_assessment(
        state.store.as_ref(),
        &authed.id,
        AssessmentKind::Career,
        None,
    )
    .await?;

    if outcome.is_degraded() {
        warn!(
            user_id = %authed.id,
            recommendation_id = %recommendation.id,
            degradation = ?outcome.degradation,
            "Recommendations served from the rule engine"
        );
    } else {
        info!(
            user_id = %authed.id,
            recommendation_id = %recommendation.id,
            "Recommendations generated"
        );
    }

    Ok(ApiResponse::ok_with_message(
        "Assessment submitted and recommendations generated successfully",
        json!({
            "response_id": response.id,
            "recommendations_id": recommendation.id,
            "recommendations": recommendation.recommendations,
            "ai_status": outcome.status(),
            "profile_completion": completion,
        }),
    ))
}

/// GET /api/assessments/recommendations - Latest recommendation for the caller
pub async fn get_recommendations_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let recommendations: Vec<Recommendation> = state
        .store
        .query_as(Collection::Recommendations, "user_id", &json!(authed.id))
        .await?;

    // insertion order breaks ties between equal timestamps
    let latest = recommendations
        .into_iter()
        .reduce(|best, next| if next.generated_at >= best.generated_at { next } else { best });

    match latest {
        Some(recommendation) => Ok(ApiResponse::ok(json!({ "recommendation": recommendation }))),
        None => Ok(ApiResponse::empty(
            "No assessments found. Please complete an assessment first.",
        )),
    }
}
