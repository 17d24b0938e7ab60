// src/market/handlers.rs

use axum::extract::{Extension, Json, Query};
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::data::{find_industry, SalaryInsight, SkillDemand, INDUSTRY_TRENDS, SKILL_DEMAND};
use super::models::{MarketAnalysis, SalaryQuery, SkillsQuery, TrendsQuery};
use crate::common::{ApiError, ApiResponse, AppState};
use crate::services::generate;

const DATA_SOURCE: &str = "CareerBridge Market Intelligence";
const DEFAULT_LOCATION: &str = "India";
const DEFAULT_EXPERIENCE: &str = "0-2";

fn analysis_prompt(trends: &Value) -> String {
    format!(
        "Analyze these job market trends for India and provide insights:\n{}\n\n\
         Respond with a single JSON object and nothing else, using exactly these keys:\n\
         \"market_summary\" (string), \
         \"emerging_opportunities\" (array of strings), \
         \"skill_predictions\" (array of strings), \
         \"salary_analysis\" (string), \
         \"growth_recommendations\" (array of strings).",
        serde_json::to_string_pretty(trends).unwrap_or_default()
    )
}

/// GET /api/market/trends?industry=all|technology|healthcare|finance|education
pub async fn get_trends_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<TrendsQuery>,
) -> Result<Json<ApiResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let industry = params
        .industry
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .unwrap_or_else(|| "all".to_string());

    let mut trends = Map::new();
    if industry == "all" {
        for (name, trend) in INDUSTRY_TRENDS.iter() {
            trends.insert(name.to_string(), json!(trend));
        }
    } else {
        let trend = find_industry(&industry)
            .ok_or_else(|| ApiError::NotFound(format!("No market data for industry '{}'", industry)))?;
        trends.insert(industry.clone(), json!(trend));
    }
    let trends = Value::Object(trends);

    let outcome = generate(
        state.generator(),
        "market_analysis",
        &analysis_prompt(&trends),
        MarketAnalysis::fallback,
    )
    .await;

    info!(
        industry = %industry,
        degraded = outcome.is_degraded(),
        "Market trends served"
    );

    Ok(ApiResponse::ok(json!({
        "trends": trends,
        "ai_analysis": outcome.value,
        "ai_status": outcome.status(),
        "last_updated": Utc::now(),
        "data_source": DATA_SOURCE,
    })))
}

/// GET /api/market/skills?skills=python,javascript
pub async fn get_skills_handler(Query(params): Query<SkillsQuery>) -> Json<ApiResponse> {
    let requested: Vec<String> = params
        .skills
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let skills: Vec<&SkillDemand> = SKILL_DEMAND
        .iter()
        .filter(|s| {
            requested.is_empty()
                || requested
                    .iter()
                    .any(|r| r.eq_ignore_ascii_case(s.skill_name))
        })
        .collect();

    ApiResponse::ok(json!({
        "skills": skills,
        "location": params.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        "requested_skills": requested,
    }))
}

/// GET /api/market/salary?job_title=&location=&experience=
pub async fn get_salary_handler(
    Query(params): Query<SalaryQuery>,
) -> Result<Json<ApiResponse>, ApiError> {
    let job_title = params
        .job_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Job title is required".to_string()))?;
    let location = params.location.as_deref().unwrap_or(DEFAULT_LOCATION);
    let experience = params.experience.as_deref().unwrap_or(DEFAULT_EXPERIENCE);

    Ok(ApiResponse::ok(json!({
        "salary_data": [SalaryInsight::reference(job_title, location, experience)],
        "job_title": job_title,
        "location": location,
        "experience": experience,
    })))
}
