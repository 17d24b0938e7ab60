// src/common/config.rs
//! Runtime configuration read from the environment (after `.env` is loaded)

use std::env;
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_JWT_SECRET: &str = "replace_with_strong_secret";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub cors_origins: Vec<String>,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GeminiConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.trim().is_empty())
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://careerbridge.db".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());

        let jwt_ttl_hours = env::var("JWT_TTL_HOURS")
            .ok()
            .and_then(|h| h.parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(24);

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| {
                "http://localhost:3000,http://localhost:3001,http://127.0.0.1:3000".to_string()
            })
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let defaults = GeminiConfig::default();
        let gemini = GeminiConfig {
            api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            timeout: env::var("AI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        };

        Self {
            database_url,
            port,
            jwt_secret,
            jwt_ttl_hours,
            cors_origins,
            gemini,
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// Log the effective configuration on startup without leaking secrets
pub fn log_config_summary(config: &AppConfig) {
    info!(
        database_url = %config.database_url,
        port = config.port,
        jwt_ttl_hours = config.jwt_ttl_hours,
        cors_origins = ?config.cors_origins,
        "Configuration loaded"
    );

    if config.gemini.is_configured() {
        info!(
            model = %config.gemini.model,
            timeout_secs = config.gemini.timeout.as_secs(),
            "Gemini AI enabled"
        );
    } else {
        warn!("GEMINI_API_KEY not set - AI features will use fallback content");
    }

    if config.uses_default_secret() {
        warn!("JWT_SECRET not set - using the development default, DO NOT USE IN PRODUCTION");
    }
}
