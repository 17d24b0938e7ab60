// src/profile/completion.rs
//! Profile completion percentage.
//!
//! ```text
//! 10 base
//! + 20 with a personality profile
//! + 15 per distinct questionnaire completed (career, personality)
//! + 10 each for career goals, skills, preferred industries and a bio
//! ```
//!
//! The stored value never decreases and never exceeds 100.

use chrono::Utc;
use tracing::{info, warn};

use super::models::{AssessmentKind, UserProfile};
use crate::auth::User;
use crate::common::ApiError;
use crate::personality::models::PersonalityProfile;
use crate::storage::{Collection, DocumentStore, DocumentStoreExt};

pub const BASE_COMPLETION: u8 = 10;
const MAX_COMPLETION: u32 = 100;

pub fn compute_completion(profile: &UserProfile) -> u8 {
    let mut completion = u32::from(BASE_COMPLETION);

    if profile.personality_profile.is_some() {
        completion += 20;
    }
    completion += 15 * profile.assessments_completed.len() as u32;
    if !profile.career_goals.is_empty() {
        completion += 10;
    }
    if !profile.skills.is_empty() {
        completion += 10;
    }
    if !profile.preferred_industries.is_empty() {
        completion += 10;
    }
    if profile.bio.as_deref().map_or(false, |b| !b.trim().is_empty()) {
        completion += 10;
    }

    completion.min(MAX_COMPLETION) as u8
}

/// Recompute and store the percentage, keeping the higher of the old and new value
pub fn refresh_completion(profile: &mut UserProfile) -> u8 {
    let computed = compute_completion(profile);
    profile.completion_percentage = profile
        .completion_percentage
        .max(computed)
        .min(MAX_COMPLETION as u8);
    profile.completion_percentage
}

/// Mark a questionnaire as completed for a user and persist the new
/// completion. Returns `None` when the user no longer exists.
pub async fn record_assessment(
    store: &dyn DocumentStore,
    user_id: &str,
    kind: AssessmentKind,
    personality: Option<PersonalityProfile>,
) -> Result<Option<u8>, ApiError> {
    let updated = store
        .update_as(Collection::Users, user_id, move |user: &mut User| {
            user.profile.assessments_completed.insert(kind);
            if let Some(profile) = personality {
                user.profile.personality_profile = Some(profile);
            }
            refresh_completion(&mut user.profile);
            user.updated_at = Utc::now();
        })
        .await?;

    let Some(user) = updated else {
        warn!(user_id = %user_id, "Assessment recorded for a missing user");
        return Ok(None);
    };
    let completion = user.profile.completion_percentage;

    info!(
        user_id = %user_id,
        assessment = ?kind,
        completion = completion,
        "Profile completion updated"
    );
    Ok(Some(completion))
}
