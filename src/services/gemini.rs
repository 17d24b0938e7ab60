// src/services/gemini.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::common::config::GeminiConfig;

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Anything that turns a prompt into free text. Handlers depend on this
/// rather than on [`GeminiService`] so tests can swap in canned replies.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn model_name(&self) -> &str;

    async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "totalTokenCount", default)]
    total_token_count: u32,
}

/// Google Generative Language client (`generateContent`), one attempt per call
#[derive(Debug)]
pub struct GeminiService {
    config: GeminiConfig,
    client: Client,
}

impl GeminiService {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { config, client }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn make_request(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeminiError::RateLimitExceeded);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Gemini API request failed");
            return Err(GeminiError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))
    }
}

/// First text part of the first candidate
fn extract_text(response: &GenerateContentResponse) -> Result<String, GeminiError> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.iter().find_map(|p| p.text.clone()))
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| GeminiError::InvalidResponse("No text in candidates".to_string()))
}

#[async_trait]
impl TextGenerator for GeminiService {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GeminiError::NotConfigured)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "Sending Gemini generateContent request"
        );

        let response = self.make_request(api_key, &request).await?;
        let text = extract_text(&response)?;

        if let Some(usage) = response.usage_metadata {
            info!(
                model = %self.config.model,
                tokens_used = usage.total_token_count,
                "Gemini text generation completed"
            );
        }

        Ok(text)
    }
}
