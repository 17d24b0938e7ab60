// src/services/insights.rs
//! AI insight pipeline shared by every feature that asks the model for
//! structured content.
//!
//! The model must answer with a JSON object, either bare or wrapped in one
//! markdown code fence, that deserializes into the caller's schema type.
//! Anything else is replaced by the caller's fallback and reported through a
//! typed [`Degradation`].

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::gemini::{GeminiError, TextGenerator};

/// Why an outcome carries fallback content instead of model output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    NotConfigured,
    RequestFailed,
    InvalidResponse,
    RateLimited,
    SchemaMismatch,
}

impl From<&GeminiError> for Degradation {
    fn from(e: &GeminiError) -> Self {
        match e {
            GeminiError::NotConfigured => Degradation::NotConfigured,
            GeminiError::RequestFailed(_) => Degradation::RequestFailed,
            GeminiError::InvalidResponse(_) => Degradation::InvalidResponse,
            GeminiError::RateLimitExceeded => Degradation::RateLimited,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    Ai,
    Fallback,
}

/// Serialized into responses as `ai_status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiStatus {
    pub source: InsightSource,
    pub degradation: Option<Degradation>,
}

#[derive(Debug, Clone)]
pub struct AiOutcome<T> {
    pub value: T,
    pub source: InsightSource,
    pub degradation: Option<Degradation>,
}

impl<T> AiOutcome<T> {
    fn from_ai(value: T) -> Self {
        Self {
            value,
            source: InsightSource::Ai,
            degradation: None,
        }
    }

    fn degraded(value: T, degradation: Degradation) -> Self {
        Self {
            value,
            source: InsightSource::Fallback,
            degradation: Some(degradation),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }

    pub fn status(&self) -> AiStatus {
        AiStatus {
            source: self.source,
            degradation: self.degradation,
        }
    }
}

/// Schema types accepted from the model. Deserialization enforces the shape;
/// `is_complete` adds checks serde cannot express.
pub trait InsightSchema: DeserializeOwned {
    fn is_complete(&self) -> bool {
        true
    }
}

/// Parse model output into a JSON object. Accepts the object itself or the
/// object inside a single ``` / ```json fence, nothing else.
pub fn extract_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();

    let body = if let Some(rest) = trimmed.strip_prefix("```") {
        let (first_line, remainder) = rest.split_once('\n')?;
        let lang = first_line.trim();
        if !lang.is_empty() && !lang.eq_ignore_ascii_case("json") {
            return None;
        }
        let inner = remainder.trim_end().strip_suffix("```")?;
        if inner.contains("```") {
            return None;
        }
        inner.trim()
    } else {
        trimmed
    };

    match serde_json::from_str::<Value>(body) {
        Ok(value) if value.is_object() => Some(value),
        _ => None,
    }
}

/// Ask the generator for `T`, falling back when it is absent or its answer
/// does not fit the schema. Never fails.
pub async fn generate<T, F>(
    generator: Option<&dyn TextGenerator>,
    purpose: &str,
    prompt: &str,
    fallback: F,
) -> AiOutcome<T>
where
    T: InsightSchema,
    F: FnOnce() -> T,
{
    let Some(generator) = generator else {
        info!(purpose = %purpose, "AI not configured, using fallback content");
        return AiOutcome::degraded(fallback(), Degradation::NotConfigured);
    };

    let text = match generator.generate_text(prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(purpose = %purpose, error = %e, "AI request failed, using fallback content");
            return AiOutcome::degraded(fallback(), Degradation::from(&e));
        }
    };

    let Some(json) = extract_json(&text) else {
        warn!(
            purpose = %purpose,
            response_chars = text.len(),
            "AI response was not a JSON object, using fallback content"
        );
        return AiOutcome::degraded(fallback(), Degradation::InvalidResponse);
    };

    match serde_json::from_value::<T>(json) {
        Ok(value) if value.is_complete() => AiOutcome::from_ai(value),
        Ok(_) => {
            warn!(purpose = %purpose, "AI response incomplete, using fallback content");
            AiOutcome::degraded(fallback(), Degradation::SchemaMismatch)
        }
        Err(e) => {
            warn!(purpose = %purpose, error = %e, "AI response did not match schema, using fallback content");
            AiOutcome::degraded(fallback(), Degradation::SchemaMismatch)
        }
    }
}
