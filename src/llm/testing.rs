//! Test doubles for the model client seam

use super::{ChatModel, LlmError, LlmErrorKind, Turn};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted model that records every dispatch instead of calling out.
pub struct ScriptedModel {
    reply: String,
    fail_with: Option<LlmErrorKind>,
    prompts: Mutex<Vec<String>>,
    history_lens: Mutex<Vec<usize>>,
}

impl ScriptedModel {
    /// Answers every dispatch with the same reply.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail_with: None,
            prompts: Mutex::new(Vec::new()),
            history_lens: Mutex::new(Vec::new()),
        }
    }

    /// Fails every dispatch with the given error kind.
    pub fn failing(kind: LlmErrorKind) -> Self {
        Self {
            reply: String::new(),
            fail_with: Some(kind),
            prompts: Mutex::new(Vec::new()),
            history_lens: Mutex::new(Vec::new()),
        }
    }

    /// All prompts dispatched so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// The most recent prompt dispatched.
    pub fn last_prompt(&self) -> String {
        self.prompts
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    /// History length observed at each dispatch.
    pub fn history_lens(&self) -> Vec<usize> {
        self.history_lens.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn send(
        &self,
        _api_key: &str,
        history: &[Turn],
        message: &str,
    ) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(message.to_string());
        self.history_lens.lock().unwrap().push(history.len());

        match self.fail_with {
            Some(kind) => Err(LlmError::new(kind, "scripted failure")),
            None => Ok(self.reply.clone()),
        }
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }
}
