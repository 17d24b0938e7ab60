// src/assessments/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::services::{Degradation, InsightSchema};

// ============================================================================
// Career questionnaire and recommendations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub duration: String,
    pub platform: String,
    pub priority: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// Work-style notes derived from the preferred environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkStyleInsights {
    pub work_style: String,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOpportunity {
    pub growth_rate: String,
    pub avg_salary: String,
    pub job_openings: String,
    pub top_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerTimeline {
    #[serde(rename = "6_months")]
    pub six_months: String,
    #[serde(rename = "1_year")]
    pub one_year: String,
    #[serde(rename = "2_years")]
    pub two_years: String,
    #[serde(rename = "3_years")]
    pub three_years: String,
}

/// Course recommendations for a career questionnaire. The model only has to
/// produce the first five fields; the rule engine fills in the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub career_path: String,
    pub skill_gaps: Vec<String>,
    pub courses: Vec<Course>,
    pub learning_path: String,
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_insights: Option<WorkStyleInsights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_opportunities: Option<MarketOpportunity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<CareerTimeline>,
}

impl InsightSchema for CourseRecommendation {
    fn is_complete(&self) -> bool {
        !self.career_path.trim().is_empty() && !self.courses.is_empty()
    }
}

/// Stored in `assessment_responses`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub user_id: String,
    pub answers: Map<String, Value>,
    pub assessment_type: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Completed,
    Degraded,
}

/// Stored in `recommendations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub user_id: String,
    pub assessment_response_id: String,
    pub recommendations: CourseRecommendation,
    pub ai_model: String,
    pub status: RecommendationStatus,
    #[serde(default)]
    pub degradation: Option<Degradation>,
    pub generated_at: DateTime<Utc>,
}

/// Accepts `{"answers": {...}}` or the bare answer map
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SubmitAnswersRequest {
    Wrapped { answers: Map<String, Value> },
    Bare(Map<String, Value>),
}

impl SubmitAnswersRequest {
    pub fn into_answers(self) -> Map<String, Value> {
        match self {
            SubmitAnswersRequest::Wrapped { answers } => answers,
            SubmitAnswersRequest::Bare(answers) => answers,
        }
    }
}

// ============================================================================
// Custom graded assessments
// ============================================================================

pub const ASSESSMENT_TYPES: [&str; 6] = [
    "psychometric",
    "skills",
    "aptitude",
    "personality",
    "career_interest",
    "comprehensive",
];

pub const DIFFICULTIES: [&str; 4] = ["easy", "medium", "hard", "mixed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    LikertScale,
    Text,
    Ranking,
    Boolean,
}

impl QuestionType {
    pub fn needs_options(&self) -> bool {
        matches!(
            self,
            QuestionType::MultipleChoice | QuestionType::LikertScale | QuestionType::Ranking
        )
    }
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<Value>,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question_id: String,
    pub answer: Value,
    #[serde(default)]
    pub time_spent: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub total_score: f64,
    pub max_score: f64,
    pub percentage: u8,
    pub grade: String,
    pub answered: usize,
}

/// Stored in `assessments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub user_id: String,
    pub assessment_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<AssessmentQuestion>,
    pub total_questions: usize,
    #[serde(default)]
    pub time_limit: Option<u32>,
    pub difficulty: String,
    pub status: AssessmentStatus,
    #[serde(default)]
    pub responses: Vec<QuestionResponse>,
    #[serde(default)]
    pub results: Option<AssessmentResults>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_spent: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    pub fn progress(&self) -> u8 {
        if self.total_questions == 0 {
            return 0;
        }
        let ratio = self.responses.len() as f64 / self.total_questions as f64;
        (ratio * 100.0).round().min(100.0) as u8
    }

    pub fn all_answered(&self) -> bool {
        self.responses.len() >= self.total_questions
    }

    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            assessment_type: self.assessment_type.clone(),
            status: self.status,
            progress: self.progress(),
            score: self.results.as_ref().map_or(0, |r| r.percentage),
            grade: self
                .results
                .as_ref()
                .map_or_else(|| "N/A".to_string(), |r| r.grade.clone()),
            time_spent: self.time_spent.unwrap_or(0),
            completed_at: self.completed_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssessmentSummary {
    pub id: String,
    pub title: String,
    pub assessment_type: String,
    pub status: AssessmentStatus,
    pub progress: u8,
    pub score: u8,
    pub grade: String,
    pub time_spent: i64,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateAssessmentRequest {
    pub assessment_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<AssessmentQuestion>>,
    pub time_limit: Option<u32>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponseRequest {
    pub question_id: Option<String>,
    pub answer: Option<Value>,
    pub time_spent: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct AssessmentQueryParams {
    pub assessment_type: Option<String>,
    pub status: Option<AssessmentStatus>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
