// src/profile/models.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::completion::BASE_COMPLETION;
use crate::personality::models::PersonalityProfile;

/// Questionnaires that count towards profile completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    Career,
    Personality,
}

/// Profile sub-document embedded in every user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_completion")]
    pub completion_percentage: u8,
    #[serde(default)]
    pub assessments_completed: BTreeSet<AssessmentKind>,
    #[serde(default)]
    pub personality_profile: Option<PersonalityProfile>,
    #[serde(default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferred_industries: Vec<String>,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

fn default_completion() -> u8 {
    BASE_COMPLETION
}

fn default_experience_level() -> String {
    "Entry Level".to_string()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            completion_percentage: BASE_COMPLETION,
            assessments_completed: BTreeSet::new(),
            personality_profile: None,
            career_goals: Vec::new(),
            skills: Vec::new(),
            preferred_industries: Vec::new(),
            experience_level: default_experience_level(),
            education_level: None,
            location: None,
            bio: None,
        }
    }
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub career_goals: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub preferred_industries: Option<Vec<String>>,
    pub experience_level: Option<String>,
    pub education_level: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}
