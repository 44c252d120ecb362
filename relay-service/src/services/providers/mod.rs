//! Text generation providers.
//!
//! Handlers only see the [`TextProvider`] trait; the Anthropic Messages API
//! is the single production implementation.

pub mod anthropic;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Non-2xx answer from the upstream API, with its raw body.
    #[error("Claude API error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

/// Trait for single-shot text generation.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Sends `prompt` as one user message and returns the first text block
    /// of the answer (empty when the answer has none).
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Model identifier requests are made with.
    fn model(&self) -> &str;
}
