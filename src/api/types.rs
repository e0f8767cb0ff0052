//! API request and response types
//!
//! `api_key` is optional on the wire; requests without one fall back to
//! the server's configured default credential.

use serde::{Deserialize, Serialize};

/// Request to start a conversation on a topic
#[derive(Debug, Deserialize)]
pub struct TopicRequest {
    pub topic: String,
    pub api_key: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

/// Request carrying student text (or, for mode switching, the mode name)
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub message: String,
    pub api_key: Option<String>,
}

/// Request to change the difficulty tier
#[derive(Debug, Deserialize)]
pub struct DifficultyRequest {
    pub difficulty: String,
    pub api_key: Option<String>,
}

/// Request carrying only a credential
#[derive(Debug, Deserialize, Default)]
pub struct ApiKeyRequest {
    pub api_key: Option<String>,
}

/// Response wrapping the model's (or a fixed) reply
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub response: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
