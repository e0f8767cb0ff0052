//! Generative-model client abstraction
//!
//! Provides a common interface for dispatching dialogue messages to an
//! external generative-model API.

mod error;
mod gemini;
#[cfg(test)]
pub mod testing;
mod types;

pub use error::{LlmError, LlmErrorKind};
pub use gemini::GeminiChat;
pub use types::{Dialogue, Role, Turn};

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for chat-capable model providers.
///
/// The credential is forwarded on every dispatch; implementations hold
/// no per-caller state. Each call is a blocking round-trip with no
/// retry.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send one message with the accumulated turn history; returns the
    /// model's reply text.
    async fn send(&self, api_key: &str, history: &[Turn], message: &str)
        -> Result<String, LlmError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

/// Logging wrapper for model clients
pub struct LoggingModel {
    inner: Arc<dyn ChatModel>,
    model_id: String,
}

impl LoggingModel {
    pub fn new(inner: Arc<dyn ChatModel>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl ChatModel for LoggingModel {
    async fn send(
        &self,
        api_key: &str,
        history: &[Turn],
        message: &str,
    ) -> Result<String, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.send(api_key, history, message).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    history_turns = history.len(),
                    reply_chars = reply.len(),
                    "Model dispatch completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    error = %e.message,
                    "Model dispatch failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
