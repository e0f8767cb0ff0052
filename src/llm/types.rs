//! Dialogue types shared across model clients

use super::{ChatModel, LlmError};

/// Speaker of a dialogue turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

/// One exchange in a dialogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// An open exchange with the generative model.
///
/// The remote API is stateless; turn history accumulates here and is
/// resent in full on every dispatch. A failed dispatch leaves the
/// history untouched.
#[derive(Debug, Default)]
pub struct Dialogue {
    turns: Vec<Turn>,
}

impl Dialogue {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)] // History inspection for API completeness
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[allow(dead_code)] // Paired with len for API completeness
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Send one message over this dialogue and record both turns.
    pub async fn send(
        &mut self,
        model: &dyn ChatModel,
        api_key: &str,
        text: &str,
    ) -> Result<String, LlmError> {
        let reply = model.send(api_key, &self.turns, text).await?;
        self.turns.push(Turn::user(text));
        self.turns.push(Turn::model(reply.clone()));
        Ok(reply)
    }
}
