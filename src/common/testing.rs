// Test harness: the full router over an in-memory store

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use super::AppState;
use crate::app::build_app;
use crate::services::{GeminiError, TextGenerator};
use crate::storage::{DocumentStore, MemoryStore};

pub const TEST_SECRET: &str = "test-secret";

/// Canned generator replies
pub enum StubGenerator {
    Reply(String),
    Fail,
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn model_name(&self) -> &str {
        "stub-model"
    }

    async fn generate_text(&self, _prompt: &str) -> Result<String, GeminiError> {
        match self {
            StubGenerator::Reply(text) => Ok(text.clone()),
            StubGenerator::Fail => Err(GeminiError::RequestFailed("stubbed failure".into())),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_generator(generator: StubGenerator) -> Self {
        Self::build(Some(Arc::new(generator)))
    }

    fn build(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState {
            store: store.clone() as Arc<dyn DocumentStore>,
            jwt_secret: TEST_SECRET.to_string(),
            jwt_ttl_hours: 1,
            generator,
        };
        let router = build_app(Arc::new(RwLock::new(state)), &[]);
        Self { router, store }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    /// Register a user and return `(user_id, token)`
    pub async fn register(&self, name: &str, email: &str) -> (String, String) {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                json!({"name": name, "email": email, "password": "secret123"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "registration failed: {}", body);
        (
            body["data"]["user"]["id"].as_str().unwrap().to_string(),
            body["data"]["token"].as_str().unwrap().to_string(),
        )
    }
}
