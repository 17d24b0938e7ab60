// Application state shared across all modules

use std::sync::Arc;

use crate::services::TextGenerator;
use crate::storage::DocumentStore;

/// Store, token settings and the optional AI generator
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    /// `None` when no Gemini key is configured; AI features then serve fallbacks
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn generator(&self) -> Option<&dyn TextGenerator> {
        self.generator.as_deref()
    }

    pub fn ai_available(&self) -> bool {
        self.generator.is_some()
    }

    /// Model name recorded next to generated content
    pub fn ai_model(&self) -> &str {
        self.generator
            .as_deref()
            .map(|g| g.model_name())
            .unwrap_or("fallback")
    }
}
