//! Summarizer endpoint, model, and credential configuration.

use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing GOOGLE_API_KEY in environment (set it in .env or the process environment)")]
    MissingApiKey,
}

/// Summarizer service configuration. The credential is read once at startup
/// and passed in explicitly; nothing here is read from ambient state later.
#[derive(Clone, Debug)]
pub struct SummarizerConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

impl SummarizerConfig {
    /// Config with the default endpoint and model for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Read the credential from `GOOGLE_API_KEY`, with an optional model
    /// override from `BUGSCRIBE_MODEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("BUGSCRIBE_MODEL") {
            if !model.trim().is_empty() {
                config.model = model.trim().to_string();
            }
        }
        Ok(config)
    }
}
