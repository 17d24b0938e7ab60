//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - JWT token validation
//! - Registration validation and duplicate detection
//! - Login failure messages
//! - Bearer-protected endpoints

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::testing::{TestApp, TEST_SECRET};
    use crate::common::Validator;
    use crate::storage::DocumentStore;
    use axum::http::StatusCode;
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
    use serde_json::json;

    // ============================================================================
    // Token and Model Tests
    // ============================================================================

    #[test]
    fn test_token_round_trip_carries_claims() {
        let token = handlers::create_token(TEST_SECRET, 1, "U_TEST0001", "a@b.com").unwrap();

        let decoded = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .expect("Failed to decode token");

        assert_eq!(decoded.claims.sub, "U_TEST0001");
        assert_eq!(decoded.claims.email, "a@b.com");
    }

    #[test]
    fn test_jwt_validation_fails_with_wrong_secret() {
        let token = handlers::create_token(TEST_SECRET, 1, "U_TEST0001", "a@b.com").unwrap();

        let result = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(b"wrong_secret_key"),
            &Validation::new(Algorithm::HS256),
        );

        assert!(
            result.is_err(),
            "Token validation should fail with wrong secret"
        );
    }

    #[test]
    fn test_split_name() {
        assert_eq!(
            models::split_name("  Asha  Rao Kumar "),
            ("Asha".to_string(), "Rao Kumar".to_string())
        );
        assert_eq!(
            models::split_name("Asha"),
            ("Asha".to_string(), String::new())
        );
    }

    // ============================================================================
    // Validator Tests
    // ============================================================================

    #[test]
    fn test_register_validator() {
        let validator = validators::AuthValidator;

        let ok = models::RegisterRequest {
            name: Some("Asha Rao".into()),
            email: Some("asha@example.com".into()),
            password: Some("secret1".into()),
            phone: Some("9876543210".into()),
        };
        assert!(validator.validate(&ok).is_valid);

        let missing = models::RegisterRequest::default();
        let result = validator.validate(&missing);
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "password"]);

        let bad = models::RegisterRequest {
            name: Some("A".into()),
            email: Some("not-an-email".into()),
            password: Some("123".into()),
            phone: Some("12345".into()),
        };
        assert_eq!(validator.validate(&bad).errors.len(), 4);
    }

    // ============================================================================
    // Endpoint Tests
    // ============================================================================

    #[tokio::test]
    async fn test_register_returns_user_without_password_hash() {
        let app = TestApp::new();
        let (status, body) = app
            .post(
                "/api/auth/register",
                None,
                json!({"name": "Asha Rao", "email": "Asha@Example.com", "password": "secret123"}),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let user = &body["data"]["user"];
        assert_eq!(user["email"], "asha@example.com");
        assert_eq!(user["first_name"], "Asha");
        assert_eq!(user["last_name"], "Rao");
        assert_eq!(user["profile"]["completion_percentage"], 10);
        assert!(user.get("password_hash").is_none());
        assert!(body["data"]["token"].is_string());
    }

    #[tokio::test]
    async fn test_register_missing_fields_is_bad_request() {
        let app = TestApp::new();
        let (status, body) = app
            .post("/api/auth/register", None, json!({"email": "a@b.com"}))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_without_creating_user() {
        let app = TestApp::new();
        app.register("Asha Rao", "asha@example.com").await;

        let (status, body) = app
            .post(
                "/api/auth/register",
                None,
                json!({"name": "Other", "email": " ASHA@example.com ", "password": "secret123"}),
            )
            .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "User with this email already exists");

        let users = app
            .store
            .query(crate::storage::Collection::Users, "email", &json!("asha@example.com"))
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_create_one_user() {
        let app = std::sync::Arc::new(TestApp::new());

        let attempts: Vec<_> = (0..8)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    app.post(
                        "/api/auth/register",
                        None,
                        json!({
                            "name": format!("Asha {}", i),
                            "email": "asha@example.com",
                            "password": "secret123"
                        }),
                    )
                    .await
                    .0
                })
            })
            .collect();

        let mut statuses = Vec::new();
        for attempt in attempts {
            statuses.push(attempt.await.unwrap());
        }

        assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
        assert!(statuses
            .iter()
            .all(|s| *s == StatusCode::OK || *s == StatusCode::CONFLICT));

        let users = app
            .store
            .query(crate::storage::Collection::Users, "email", &json!("asha@example.com"))
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_login_failures_share_one_message() {
        let app = TestApp::new();
        app.register("Asha Rao", "asha@example.com").await;

        let (unknown_status, unknown) = app
            .post(
                "/api/auth/login",
                None,
                json!({"email": "nobody@example.com", "password": "secret123"}),
            )
            .await;
        let (wrong_status, wrong) = app
            .post(
                "/api/auth/login",
                None,
                json!({"email": "asha@example.com", "password": "not-it"}),
            )
            .await;

        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown["message"], "Invalid email or password");
        assert_eq!(unknown, wrong);

        // unknown accounts are checked against a placeholder hash that never admits anyone
        let (status, body) = app
            .post(
                "/api/auth/login",
                None,
                json!({"email": "nobody@example.com", "password": "no-such-account"}),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, unknown);
    }

    #[tokio::test]
    async fn test_login_and_profile() {
        let app = TestApp::new();
        let (user_id, _) = app.register("Asha Rao", "asha@example.com").await;

        let (status, body) = app
            .post(
                "/api/auth/login",
                None,
                json!({"email": "asha@example.com", "password": "secret123"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["user"]["last_login_at"].is_string());
        let token = body["data"]["token"].as_str().unwrap().to_string();

        let (status, body) = app.get("/api/auth/profile", Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user"]["id"], user_id.as_str());
    }

    #[tokio::test]
    async fn test_protected_endpoint_rejects_missing_and_bad_tokens() {
        let app = TestApp::new();

        let (status, _) = app.get("/api/auth/profile", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app.get("/api/auth/profile", Some("garbage")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        // valid signature, but the user does not exist
        let token = handlers::create_token(TEST_SECRET, 1, "U_MISSING0", "x@y.com").unwrap();
        let (status, _) = app.get("/api/auth/profile", Some(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_change_password() {
        let app = TestApp::new();
        let (_, token) = app.register("Asha Rao", "asha@example.com").await;

        let (status, body) = app
            .put(
                "/api/auth/change-password",
                Some(&token),
                json!({"current_password": "wrong", "new_password": "newsecret"}),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Current password is incorrect");

        let (status, _) = app
            .put(
                "/api/auth/change-password",
                Some(&token),
                json!({"current_password": "secret123", "new_password": "newsecret"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = app
            .post(
                "/api/auth/login",
                None,
                json!({"email": "asha@example.com", "password": "newsecret"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_logout_needs_no_token() {
        let app = TestApp::new();
        let (status, body) = app.post("/api/auth/logout", None, json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Logged out successfully");
    }
}
