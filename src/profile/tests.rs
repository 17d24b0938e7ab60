//! Tests for profile module
//!
//! These tests verify:
//! - Completion percentage arithmetic, cap and monotonicity
//! - Profile validators
//! - Ownership checks on the profile endpoints

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::testing::TestApp;
    use crate::common::Validator;
    use crate::personality::models::PersonalityProfile;
    use axum::http::StatusCode;
    use completion::{compute_completion, refresh_completion, BASE_COMPLETION};
    use models::{AssessmentKind, UpdateProfileRequest, UserProfile};
    use serde_json::json;

    fn personality() -> PersonalityProfile {
        PersonalityProfile {
            personality_type: "The Analyst".to_string(),
            top_traits: Vec::new(),
            strengths: Vec::new(),
            development_areas: Vec::new(),
        }
    }

    // ============================================================================
    // Completion Tests
    // ============================================================================

    #[test]
    fn test_new_profile_starts_at_base() {
        let profile = UserProfile::default();
        assert_eq!(profile.completion_percentage, BASE_COMPLETION);
        assert_eq!(compute_completion(&profile), 10);
        assert_eq!(profile.experience_level, "Entry Level");
    }

    #[test]
    fn test_completion_components() {
        let mut profile = UserProfile::default();
        profile.skills = vec!["Rust".to_string()];
        assert_eq!(compute_completion(&profile), 20);

        profile.assessments_completed.insert(AssessmentKind::Career);
        assert_eq!(compute_completion(&profile), 35);

        // completing the same questionnaire twice counts once
        profile.assessments_completed.insert(AssessmentKind::Career);
        assert_eq!(compute_completion(&profile), 35);

        profile.personality_profile = Some(personality());
        profile.assessments_completed.insert(AssessmentKind::Personality);
        assert_eq!(compute_completion(&profile), 70);

        profile.bio = Some("   ".to_string());
        assert_eq!(compute_completion(&profile), 70);
    }

    #[test]
    fn test_completion_caps_at_100() {
        let mut profile = UserProfile::default();
        profile.personality_profile = Some(personality());
        profile.assessments_completed.insert(AssessmentKind::Career);
        profile.assessments_completed.insert(AssessmentKind::Personality);
        profile.career_goals = vec!["Lead".to_string()];
        profile.skills = vec!["Rust".to_string()];
        profile.preferred_industries = vec!["Technology".to_string()];
        profile.bio = Some("Builder".to_string());

        assert_eq!(compute_completion(&profile), 100);
        assert_eq!(refresh_completion(&mut profile), 100);

        // legacy documents may carry inflated values
        profile.completion_percentage = 130;
        assert_eq!(refresh_completion(&mut profile), 100);
    }

    #[test]
    fn test_refresh_never_decreases() {
        let mut profile = UserProfile::default();
        profile.skills = vec!["Rust".to_string()];
        profile.career_goals = vec!["Lead".to_string()];
        assert_eq!(refresh_completion(&mut profile), 30);

        profile.skills.clear();
        profile.career_goals.clear();
        assert_eq!(compute_completion(&profile), 10);
        assert_eq!(refresh_completion(&mut profile), 30);
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({})).unwrap();
        assert_eq!(profile, UserProfile::default());

        let profile: UserProfile =
            serde_json::from_value(json!({"assessments_completed": ["career", "personality"]}))
                .unwrap();
        assert_eq!(profile.assessments_completed.len(), 2);
    }

    // ============================================================================
    // Validator Tests
    // ============================================================================

    #[test]
    fn test_profile_validator() {
        let validator = validators::ProfileValidator;
        assert!(validator.validate(&UpdateProfileRequest::default()).is_valid);

        let request = UpdateProfileRequest {
            phone: Some("0123456789".to_string()),
            skills: Some(vec!["x".repeat(101)]),
            bio: Some("b".repeat(1001)),
            ..Default::default()
        };
        let result = validator.validate(&request);
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["phone", "skills", "bio"]);
    }

    // ============================================================================
    // Endpoint Tests
    // ============================================================================

    #[tokio::test]
    async fn test_profile_ownership() {
        let app = TestApp::new();
        let (asha_id, asha_token) = app.register("Asha Rao", "asha@example.com").await;
        let (ravi_id, _) = app.register("Ravi Kumar", "ravi@example.com").await;

        let (status, body) = app
            .get(&format!("/api/profile/{}", asha_id), Some(&asha_token))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["profile_completion"], 10);
        assert_eq!(body["data"]["assessments"], json!([]));

        let (status, _) = app
            .get(&format!("/api/profile/{}", ravi_id), Some(&asha_token))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = app
            .put(
                &format!("/api/profile/{}", ravi_id),
                Some(&asha_token),
                json!({"skills": ["Rust"]}),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = app.get("/api/profile/U_NOBODY00", Some(&asha_token)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app.get(&format!("/api/profile/{}", asha_id), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_completion_is_monotonic_across_updates() {
        let app = TestApp::new();
        let (user_id, token) = app.register("Asha Rao", "asha@example.com").await;
        let uri = format!("/api/profile/{}/update", user_id);

        let updates = [
            json!({"skills": ["Rust", "SQL"], "career_goals": ["Backend engineer"]}),
            json!({"preferred_industries": ["Technology"], "bio": "I like systems"}),
            json!({"skills": [], "career_goals": []}),
            json!({"experience_level": "Junior Professional"}),
        ];

        let mut previous = 10;
        let mut seen = Vec::new();
        for update in updates {
            let (status, body) = app.put(&uri, Some(&token), update).await;
            assert_eq!(status, StatusCode::OK, "{}", body);
            let completion = body["data"]["completion_percentage"].as_u64().unwrap();
            assert!(completion >= previous);
            assert!(completion <= 100);
            previous = completion;
            seen.push(completion);
        }
        assert_eq!(seen, vec![30, 50, 50, 50]);

        let (_, body) = app
            .get(&format!("/api/profile/{}", user_id), Some(&token))
            .await;
        assert_eq!(body["data"]["user"]["profile"]["experience_level"], "Junior Professional");
        assert_eq!(body["data"]["user"]["profile"]["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_invalid_update_is_rejected() {
        let app = TestApp::new();
        let (user_id, token) = app.register("Asha Rao", "asha@example.com").await;

        let (status, body) = app
            .put(
                &format!("/api/profile/{}", user_id),
                Some(&token),
                json!({"name": "A"}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_profile_updates_keep_concurrent_assessment_results() {
        let app = std::sync::Arc::new(TestApp::new());
        let (user_id, token) = app.register("Asha Rao", "asha@example.com").await;
        let uri = format!("/api/profile/{}", user_id);

        let mut tasks = Vec::new();
        for round in 0..6 {
            let app_for_put = app.clone();
            let (uri, token) = (uri.clone(), token.clone());
            tasks.push(tokio::spawn(async move {
                let update = if round % 2 == 0 {
                    json!({"skills": ["Rust"]})
                } else {
                    json!({"career_goals": ["Backend engineer"]})
                };
                let (status, body) = app_for_put.put(&uri, Some(&token), update).await;
                assert_eq!(status, StatusCode::OK, "{}", body);
            }));

            let store = app.store.clone();
            let user_id = user_id.clone();
            tasks.push(tokio::spawn(async move {
                let (kind, profile) = if round % 2 == 0 {
                    (AssessmentKind::Personality, Some(personality()))
                } else {
                    (AssessmentKind::Career, None)
                };
                completion::record_assessment(store.as_ref(), &user_id, kind, profile)
                    .await
                    .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let (_, body) = app.get(&uri, Some(&token)).await;
        let profile = &body["data"]["user"]["profile"];
        assert_eq!(profile["personality_profile"]["personality_type"], "The Analyst");
        assert_eq!(profile["assessments_completed"].as_array().unwrap().len(), 2);
        assert_eq!(profile["skills"], json!(["Rust"]));
        assert_eq!(profile["career_goals"], json!(["Backend engineer"]));
        // 10 base + 20 personality + 2 x 15 kinds + 10 skills + 10 goals
        assert_eq!(body["data"]["profile_completion"], 80);
    }
}
