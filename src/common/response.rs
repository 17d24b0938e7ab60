// Success envelope shared by every endpoint: {"success", "message"?, "data"?}

use axum::Json;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Value,
}

impl ApiResponse {
    pub fn ok(data: Value) -> Json<Self> {
        Json(Self {
            success: true,
            message: None,
            data,
        })
    }

    pub fn ok_with_message(message: impl Into<String>, data: Value) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data,
        })
    }

    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: Value::Null,
        })
    }

    /// A 200 response that still reports `success: false`, used when a lookup
    /// legitimately has nothing to return yet.
    pub fn empty(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            message: Some(message.into()),
            data: Value::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_is_omitted_when_absent() {
        let Json(resp) = ApiResponse::ok(json!({"questions": []}));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("message").is_none());
        assert_eq!(value["data"]["questions"], json!([]));
    }

    #[test]
    fn test_empty_reports_failure() {
        let Json(resp) = ApiResponse::empty("nothing yet");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "nothing yet");
        assert!(value["data"].is_null());
    }
}
