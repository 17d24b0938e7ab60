// src/assessments/handlers/custom.rs
//! Custom graded assessments: draft -> in_progress -> completed

use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::assessments::grading::calculate_results;
use crate::assessments::models::{
    Assessment, AssessmentQueryParams, AssessmentStatus, CreateAssessmentRequest,
    QuestionResponse, SubmitResponseRequest,
};
use crate::assessments::validators::AssessmentValidator;
use crate::auth::AuthedUser;
use crate::common::{generate_assessment_id, ApiError, ApiResponse, AppState, Validator};
use crate::storage::{Collection, DocumentStore, DocumentStoreExt};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

/// Load an assessment and check the caller owns it. 404 before 403.
async fn load_owned_assessment(
    store: &dyn DocumentStore,
    assessment_id: &str,
    authed: &AuthedUser,
    action: &str,
) -> Result<Assessment, ApiError> {
    let assessment = store
        .get_as::<Assessment>(Collection::Assessments, assessment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assessment not found".to_string()))?;

    if assessment.user_id != authed.id {
        warn!(
            assessment_id = %assessment_id,
            caller = %authed.id,
            "Assessment access denied: caller is not the owner"
        );
        return Err(ApiError::Forbidden(format!(
            "Access denied: You can only {} your own assessments",
            action
        )));
    }
    Ok(assessment)
}

/// Mark completed and grade
fn finish(assessment: &mut Assessment) {
    let now = Utc::now();
    assessment.status = AssessmentStatus::Completed;
    assessment.completed_at = Some(now);
    assessment.time_spent = assessment
        .started_at
        .map(|started| (now - started).num_seconds().max(0));
    assessment.results = Some(calculate_results(
        &assessment.questions,
        &assessment.responses,
    ));
    assessment.updated_at = now;
}

/// POST /api/assessments
pub async fn create_assessment_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateAssessmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse>), ApiError> {
    let state = state_lock.read().await.clone();

    AssessmentValidator.validate(&request).into_result()?;

    let questions = request.questions.unwrap_or_default();
    let now = Utc::now();
    let assessment = Assessment {
        id: generate_assessment_id(),
        user_id: authed.id.clone(),
        assessment_type: request.assessment_type.unwrap_or_default(),
        title: request.title.unwrap_or_default().trim().to_string(),
        description: request.description.unwrap_or_default(),
        total_questions: questions.len(),
        questions,
        time_limit: request.time_limit,
        difficulty: request.difficulty.unwrap_or_else(|| "mixed".to_string()),
        status: AssessmentStatus::Draft,
        responses: Vec::new(),
        results: None,
        started_at: None,
        completed_at: None,
        time_spent: None,
        created_at: now,
        updated_at: now,
    };

    state
        .store
        .put_as(Collection::Assessments, &assessment.id, &assessment)
        .await?;

    info!(
        user_id = %authed.id,
        assessment_id = %assessment.id,
        questions = assessment.total_questions,
        "Assessment created"
    );

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok_with_message(
            "Assessment created successfully",
            json!({ "assessment": assessment }),
        ),
    ))
}

/// GET /api/assessments?assessment_type=&status=&limit=&offset=
pub async fn list_assessments_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Query(params): Query<AssessmentQueryParams>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let mut assessments: Vec<Assessment> = state
        .store
        .query_as(Collection::Assessments, "user_id", &json!(authed.id))
        .await?;

    assessments.retain(|a| {
        params
            .assessment_type
            .as_deref()
            .map_or(true, |t| a.assessment_type == t)
            && params.status.map_or(true, |s| a.status == s)
    });
    // newest first; later inserts win ties
    assessments.reverse();
    assessments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = assessments.len();
    let page: Vec<_> = assessments
        .iter()
        .skip(offset)
        .take(limit)
        .map(Assessment::summary)
        .collect();

    Ok(ApiResponse::ok(json!({
        "assessments": page,
        "total": total,
        "limit": limit,
        "offset": offset,
    })))
}

/// GET /api/assessments/:id
pub async fn get_assessment_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(assessment_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let assessment =
        load_owned_assessment(state.store.as_ref(), &assessment_id, &authed, "view").await?;

    Ok(ApiResponse::ok(json!({
        "assessment": assessment,
        "progress": assessment.progress(),
    })))
}

/// POST /api/assessments/:id/start
pub async fn start_assessment_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(assessment_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let mut assessment =
        load_owned_assessment(state.store.as_ref(), &assessment_id, &authed, "start").await?;

    match assessment.status {
        AssessmentStatus::Completed => {
            return Err(ApiError::BadRequest(
                "Assessment is already completed".to_string(),
            ));
        }
        AssessmentStatus::InProgress => {
            info!(assessment_id = %assessment.id, "Assessment already in progress");
        }
        AssessmentStatus::Draft => {
            let now = Utc::now();
            assessment.status = AssessmentStatus::InProgress;
            assessment.started_at = Some(now);
            assessment.updated_at = now;
            state
                .store
                .put_as(Collection::Assessments, &assessment.id, &assessment)
                .await?;
            info!(user_id = %authed.id, assessment_id = %assessment.id, "Assessment started");
        }
    }

    Ok(ApiResponse::ok_with_message(
        "Assessment started successfully",
        json!({ "assessment": assessment }),
    ))
}

/// POST /api/assessments/:id/responses
///
/// # Request Body
/// ```json
/// { "question_id": "q1", "answer": "B", "time_spent": 12 }
/// ```
///
/// Answering the last question completes and grades the assessment.
pub async fn submit_response_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(assessment_id): Path<String>,
    Json(request): Json<SubmitResponseRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let (Some(question_id), Some(answer)) = (
        request.question_id.filter(|id| !id.trim().is_empty()),
        request.answer,
    ) else {
        return Err(ApiError::BadRequest(
            "Question ID and answer are required".to_string(),
        ));
    };

    let mut assessment = load_owned_assessment(
        state.store.as_ref(),
        &assessment_id,
        &authed,
        "submit responses to",
    )
    .await?;

    if assessment.status != AssessmentStatus::InProgress {
        return Err(ApiError::BadRequest(
            "Assessment is not in progress".to_string(),
        ));
    }

    if !assessment.questions.iter().any(|q| q.id == question_id) {
        return Err(ApiError::BadRequest(format!(
            "Unknown question id '{}'",
            question_id
        )));
    }

    assessment.responses.retain(|r| r.question_id != question_id);
    assessment.responses.push(QuestionResponse {
        question_id,
        answer,
        time_spent: request.time_spent.unwrap_or(0),
        timestamp: Utc::now(),
    });
    assessment.updated_at = Utc::now();

    let is_complete = assessment.all_answered();
    if is_complete {
        finish(&mut assessment);
    }

    state
        .store
        .put_as(Collection::Assessments, &assessment.id, &assessment)
        .await?;

    info!(
        assessment_id = %assessment.id,
        answered = assessment.responses.len(),
        is_complete = is_complete,
        "Assessment response recorded"
    );

    let message = if is_complete {
        "Assessment completed successfully"
    } else {
        "Response submitted successfully"
    };

    Ok(ApiResponse::ok_with_message(
        message,
        json!({
            "assessment": assessment,
            "is_complete": is_complete,
            "progress": assessment.progress(),
        }),
    ))
}

/// POST /api/assessments/:id/complete
pub async fn complete_assessment_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(assessment_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let mut assessment =
        load_owned_assessment(state.store.as_ref(), &assessment_id, &authed, "complete").await?;

    if assessment.status != AssessmentStatus::InProgress {
        return Err(ApiError::BadRequest(
            "Assessment is not in progress".to_string(),
        ));
    }

    finish(&mut assessment);

    state
        .store
        .put_as(Collection::Assessments, &assessment.id, &assessment)
        .await?;

    if let Some(results) = &assessment.results {
        info!(
            assessment_id = %assessment.id,
            percentage = results.percentage,
            grade = %results.grade,
            "Assessment completed"
        );
    }

    Ok(ApiResponse::ok_with_message(
        "Assessment completed successfully",
        json!({ "assessment": assessment }),
    ))
}
