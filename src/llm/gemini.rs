//! Google Gemini chat client

use super::types::{Role, Turn};
use super::{ChatModel, LlmError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MODEL_NAME: &str = "gemini-1.5-pro";

/// Gemini chat client for the `generateContent` REST API.
///
/// The API key is supplied by the caller on every dispatch rather than
/// held here, so one client serves requests carrying different
/// credentials.
pub struct GeminiChat {
    client: Client,
    base_url: String,
}

impl GeminiChat {
    /// `base_url` overrides the Google endpoint (tests, proxies).
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = match base_url {
            Some(url) => format!(
                "{}/v1beta/models/{}:generateContent",
                url.trim_end_matches('/'),
                MODEL_NAME
            ),
            None => format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
                MODEL_NAME
            ),
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    fn translate_request(history: &[Turn], message: &str) -> GeminiRequest {
        let mut contents: Vec<GeminiContent> = history
            .iter()
            .map(|turn| GeminiContent {
                role: match turn.role {
                    Role::User => "user".to_string(),
                    Role::Model => "model".to_string(),
                },
                parts: vec![GeminiPart {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        contents.push(GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart {
                text: message.to_string(),
            }],
        });

        GeminiRequest {
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: 0.3,
                top_p: 0.95,
                top_k: 40,
                max_output_tokens: 1024,
            },
        }
    }

    fn normalize_response(resp: GeminiResponse) -> Result<String, LlmError> {
        let candidate = resp
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::unknown("No candidates in response"))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(LlmError::unknown("Empty candidate in response"));
        }

        Ok(text)
    }
}

#[async_trait]
impl ChatModel for GeminiChat {
    async fn send(
        &self,
        api_key: &str,
        history: &[Turn],
        message: &str,
    ) -> Result<String, LlmError> {
        let request = Self::translate_request(history, message);
        let url = format!("{}?key={}", self.base_url, api_key);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("Request timeout: {}", e))
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {}", e))
                } else {
                    LlmError::unknown(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            if let Ok(error_resp) = serde_json::from_str::<GeminiErrorResponse>(&body) {
                let message = error_resp.error.message;
                return Err(match status.as_u16() {
                    400 => LlmError::invalid_request(format!("Invalid request: {}", message)),
                    401 | 403 => LlmError::auth(format!("Authentication failed: {}", message)),
                    429 => LlmError::rate_limit(format!("Rate limit exceeded: {}", message)),
                    500..=599 => LlmError::server_error(format!("Server error: {}", message)),
                    _ => LlmError::unknown(format!("HTTP {}: {}", status, message)),
                });
            }
            return Err(LlmError::unknown(format!(
                "HTTP {} error: {}",
                status, body
            )));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            LlmError::unknown(format!("Failed to parse response: {} - body: {}", e, body))
        })?;

        if let Some(usage) = &gemini_response.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                candidate_tokens = usage.candidates_token_count,
                "Gemini usage"
            );
        }

        Self::normalize_response(gemini_response)
    }

    fn model_id(&self) -> &str {
        MODEL_NAME
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: i32,
    max_output_tokens: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    prompt_token_count: u32,
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
    #[allow(dead_code)]
    code: Option<i32>,
    #[allow(dead_code)]
    status: Option<String>,
}
