// src/personality/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::services::{AiStatus, InsightSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitScore {
    #[serde(rename = "trait")]
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub personality_type: String,
    pub top_traits: Vec<TraitScore>,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
}

/// Model-written career insights for a personality profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityInsights {
    pub career_recommendations: Vec<String>,
    pub ideal_environments: Vec<String>,
    pub leadership_style: String,
    pub communication_preferences: String,
    pub learning_recommendations: Vec<String>,
}

impl InsightSchema for PersonalityInsights {
    fn is_complete(&self) -> bool {
        !self.career_recommendations.is_empty()
    }
}

impl PersonalityInsights {
    pub fn fallback() -> Self {
        Self {
            career_recommendations: vec![
                "Project Manager".to_string(),
                "Team Lead".to_string(),
                "Consultant".to_string(),
            ],
            ideal_environments: vec![
                "Collaborative".to_string(),
                "Dynamic".to_string(),
                "Supportive".to_string(),
            ],
            leadership_style: "Collaborative and supportive".to_string(),
            communication_preferences: "Direct and encouraging".to_string(),
            learning_recommendations: vec![
                "Hands-on projects".to_string(),
                "Group learning".to_string(),
                "Mentorship".to_string(),
            ],
        }
    }
}

/// Stored in `psychometric_tests`; written once per submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityTest {
    pub id: String,
    pub user_id: String,
    pub answers: Map<String, Value>,
    pub scores: BTreeMap<String, u32>,
    pub profile: PersonalityProfile,
    pub ai_insights: PersonalityInsights,
    pub ai_status: AiStatus,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitPersonalityRequest {
    #[serde(default)]
    pub answers: Map<String, Value>,
}
