// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::body::{to_bytes, HttpBody};
use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use serde_json::Value;
use tracing::debug;

/// Fields whose values never reach the logs
const SECRET_FIELDS: [&str; 4] = ["password", "current_password", "new_password", "token"];

const REDACTED: &str = "***";

/// Larger bodies, or bodies of unknown length, pass through unlogged
const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

fn fits_log_limit(body: &Body) -> bool {
    body.size_hint()
        .upper()
        .map_or(false, |len| len <= MAX_LOGGED_BODY as u64)
}

/// Replaces secret fields at any depth
fn redact(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if SECRET_FIELDS.contains(&key.as_str()) {
                    *field = Value::String(REDACTED.to_string());
                } else {
                    redact(field);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact),
        _ => {}
    }
}

/// Renders a body for the log line. Non-JSON bodies are summarized by size
/// since they cannot be redacted field by field.
fn render_body(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(mut json) => {
            redact(&mut json);
            Some(serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string()))
        }
        Err(_) => Some(format!("<{} bytes, not JSON>", bytes.len())),
    }
}

/// Middleware to log request and response bodies in debug mode
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let request = if fits_log_limit(request.body()) {
        let (parts, body) = request.into_parts();
        let bytes = to_bytes(body, MAX_LOGGED_BODY)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

        if let Some(request_body) = render_body(&bytes) {
            debug!(
                method = %parts.method,
                uri = %parts.uri,
                request_body = %request_body,
                "📥 Request"
            );
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        debug!(
            method = %request.method(),
            uri = %request.uri(),
            "📥 Request body not logged"
        );
        request
    };

    let response = next.run(request).await;

    if !fits_log_limit(response.body()) {
        debug!(status = %response.status(), "📤 Response body not logged");
        return Ok(response);
    }

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, MAX_LOGGED_BODY)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(response_body) = render_body(&bytes) {
        debug!(
            status = %parts.status,
            response_body = %response_body,
            "📤 Response"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redacts_nested_secrets() {
        let mut body = json!({
            "email": "student@example.com",
            "password": "hunter22",
            "data": {"token": "eyJ...", "user": {"name": "Asha"}},
            "changes": [{"current_password": "old", "new_password": "new"}]
        });
        redact(&mut body);

        assert_eq!(body["email"], "student@example.com");
        assert_eq!(body["password"], REDACTED);
        assert_eq!(body["data"]["token"], REDACTED);
        assert_eq!(body["data"]["user"]["name"], "Asha");
        assert_eq!(body["changes"][0]["current_password"], REDACTED);
        assert_eq!(body["changes"][0]["new_password"], REDACTED);
    }

    #[test]
    fn test_log_limit_follows_body_size() {
        assert!(fits_log_limit(&Body::from("{}")));
        assert!(fits_log_limit(&Body::empty()));
        assert!(!fits_log_limit(&Body::from(vec![b'x'; MAX_LOGGED_BODY + 1])));
    }

    #[test]
    fn test_render_body() {
        assert!(render_body(b"").is_none());

        let rendered = render_body(br#"{"password":"hunter22"}"#).unwrap();
        assert!(!rendered.contains("hunter22"));

        assert_eq!(render_body(b"plain text").unwrap(), "<10 bytes, not JSON>");
    }
}
