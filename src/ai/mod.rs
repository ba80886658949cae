//! Access to the generative model.
//!
//! Whether a model can be called is decided once at bootstrap and captured in
//! [`AiCapability`]; callers match on it instead of probing nullable clients.

pub mod gemini;
pub mod prompts;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::config::AiConfig;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI service unavailable: {0}")]
    Unavailable(String),

    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text")]
    EmptyResponse,

    #[error("could not parse model output: {0}")]
    Extract(#[from] ExtractError),

    #[error("model output has an unexpected shape: {0}")]
    Shape(String),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in completion")]
    NoJsonObject,

    #[error("invalid JSON in completion: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn model_name(&self) -> String;

    /// Sends a single prompt and returns the completion text.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Clone)]
pub enum AiCapability {
    Available(Arc<dyn GenerativeModel>),
    Unavailable { reason: String },
}

impl AiCapability {
    pub fn from_config(config: &AiConfig) -> Self {
        let Some(api_key) = config.api_key.as_deref() else {
            return AiCapability::unavailable("GEMINI_API_KEY is not set");
        };

        match GeminiClient::new(api_key, &config.model, config.request_timeout) {
            Ok(client) => {
                let client = match config.base_url.as_deref() {
                    Some(base_url) => client.with_base_url(base_url),
                    None => client,
                };
                AiCapability::Available(Arc::new(client))
            }
            Err(e) => AiCapability::unavailable(format!("failed to build Gemini client: {}", e)),
        }
    }

    pub fn available(model: impl GenerativeModel + 'static) -> Self {
        AiCapability::Available(Arc::new(model))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        AiCapability::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AiCapability::Available(_))
    }
}

impl fmt::Debug for AiCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiCapability::Available(model) => f
                .debug_tuple("Available")
                .field(&model.model_name())
                .finish(),
            AiCapability::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{.*\}").expect("JSON object pattern is valid")
});

/// Pulls the outermost `{...}` span out of free text and parses it.
pub fn extract_json(completion: &str) -> Result<Value, ExtractError> {
    let span = JSON_OBJECT
        .find(completion)
        .ok_or(ExtractError::NoJsonObject)?;
    Ok(serde_json::from_str(span.as_str())?)
}
