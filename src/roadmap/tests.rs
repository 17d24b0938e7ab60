//! Tests for roadmap module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::testing::{StubGenerator, TestApp};
    use crate::services::InsightSchema;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_fallback_covers_three_horizons() {
        let roadmap = models::Roadmap::fallback();
        assert!(roadmap.is_complete());
        assert_eq!(roadmap.short_term.duration, "6 months");
        assert_eq!(roadmap.medium_term.duration, "1 year");
        assert_eq!(roadmap.long_term.duration, "3 years");
        assert_eq!(roadmap.learning_resources[0].platform, "Coursera");
    }

    #[tokio::test]
    async fn test_generate_without_ai() {
        let app = TestApp::new();
        let (user_id, token) = app.register("Asha Rao", "asha@example.com").await;

        let (status, body) = app
            .post(
                "/api/roadmap/generate",
                Some(&token),
                json!({"career_goals": ["Data Scientist"], "current_skills": ["Python"]}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["data"]["user_id"], user_id.as_str());
        assert_eq!(body["data"]["ai_status"]["degradation"], "not_configured");
        assert_eq!(
            body["data"]["roadmap"]["long_term"]["milestones"],
            json!(["Senior position", "Industry recognition", "Mentor junior professionals"])
        );
    }

    #[tokio::test]
    async fn test_generate_with_model_reply() {
        let phase = |duration: &str| {
            json!({"duration": duration, "goals": ["Ship"], "skills": ["Rust"], "milestones": ["Release"]})
        };
        let reply = json!({
            "short_term": phase("6 months"),
            "medium_term": phase("1 year"),
            "long_term": phase("3 years"),
            "learning_resources": []
        });
        let app = TestApp::with_generator(StubGenerator::Reply(reply.to_string()));
        let (_, token) = app.register("Asha Rao", "asha@example.com").await;

        // personality profile is picked up from the stored user
        app.post(
            "/api/personality/submit",
            Some(&token),
            json!({"answers": {"2": 0}}),
        )
        .await;

        let (_, body) = app
            .post("/api/roadmap/generate", Some(&token), json!({}))
            .await;
        assert_eq!(body["data"]["ai_status"]["source"], "ai");
        assert_eq!(body["data"]["roadmap"]["short_term"]["goals"], json!(["Ship"]));
    }

    #[tokio::test]
    async fn test_missing_phase_is_schema_mismatch() {
        let app = TestApp::with_generator(StubGenerator::Reply(
            json!({"short_term": {"duration": "6 months"}}).to_string(),
        ));
        let (_, token) = app.register("Asha Rao", "asha@example.com").await;

        let (_, body) = app
            .post("/api/roadmap/generate", Some(&token), json!({}))
            .await;
        assert_eq!(body["data"]["ai_status"]["degradation"], "schema_mismatch");
        assert_eq!(body["data"]["roadmap"]["short_term"]["duration"], "6 months");
    }

    #[tokio::test]
    async fn test_generate_requires_auth() {
        let app = TestApp::new();
        let (status, _) = app.post("/api/roadmap/generate", None, json!({})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
