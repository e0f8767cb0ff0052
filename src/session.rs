//! Conversation session state machine
//!
//! Owns topic, difficulty, mode, and the lifecycle of the dialogue with
//! the generative model. Decides which prompt template is dispatched
//! and validates caller input before any external call is attempted.
//! The session is `Idle` (no topic) or `Active` (topic set, dialogue
//! open); the two always flip together because both live in one
//! `Option`.

#[cfg(test)]
mod proptests;

use crate::knowledge::Topic;
use crate::llm::{ChatModel, Dialogue, LlmError};
use crate::prompts;
use std::fmt;
use thiserror::Error;

/// Teaching difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(input: &str) -> Option<Difficulty> {
        match input.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Guide with questions, never give direct answers
    #[default]
    Socratic,
    /// Answer directly, include code snippets on request
    Qa,
}

impl Mode {
    pub fn parse(input: &str) -> Option<Mode> {
        match input.trim().to_lowercase().as_str() {
            "socratic" => Some(Mode::Socratic),
            "qa" | "q&a" => Some(Mode::Qa),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Socratic => "Socratic",
            Mode::Qa => "Q&A",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failed-operation results surfaced to the caller. Every variant is
/// recoverable; the display text is the guidance shown to the student.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I'm sorry, I don't have information about {0}. Let's discuss sorting, searching, or data structures.")]
    UnknownTopic(String),
    #[error("Please start a conversation first by choosing a topic.")]
    NotActive,
    #[error("Invalid difficulty level. Please choose 'easy', 'medium', or 'hard'.")]
    InvalidDifficulty,
    #[error("Invalid mode. Please choose 'Socratic' or 'Q&A'.")]
    InvalidMode,
    #[error(transparent)]
    Model(#[from] LlmError),
}

/// Topic and dialogue for an active session. Keeping both in one value
/// makes "dialogue open iff topic set" hold by construction.
#[derive(Debug)]
struct ActiveTopic {
    topic: Topic,
    dialogue: Dialogue,
}

/// One tutoring session.
///
/// Owned by exactly one logical client at a time; callers that share a
/// session across tasks must add their own mutual exclusion, held for
/// the duration of a dispatch.
#[derive(Debug, Default)]
pub struct TutorSession {
    difficulty: Difficulty,
    mode: Mode,
    active: Option<ActiveTopic>,
}

impl TutorSession {
    pub fn new() -> Self {
        Self::default()
    }

    // State inspection, exercised by tests and available to embedding
    // presentation layers.

    #[allow(dead_code)]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[allow(dead_code)]
    pub fn topic(&self) -> Option<Topic> {
        self.active.as_ref().map(|a| a.topic)
    }

    #[allow(dead_code)]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[allow(dead_code)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of turns accumulated in the open dialogue, 0 when idle.
    #[allow(dead_code)]
    pub fn dialogue_turns(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.dialogue.len())
    }

    /// Start a session on `topic`, opening a fresh dialogue and
    /// dispatching the introduction template.
    ///
    /// Valid in any state: starting while active drops the old dialogue
    /// and begins anew (mode carries over). State is committed only
    /// after the introduction dispatch succeeds, so a model failure
    /// leaves the previous session intact.
    pub async fn start(
        &mut self,
        model: &dyn ChatModel,
        api_key: &str,
        topic: &str,
        difficulty: &str,
    ) -> Result<String, SessionError> {
        let topic = Topic::parse(topic)
            .ok_or_else(|| SessionError::UnknownTopic(topic.trim().to_string()))?;
        let difficulty =
            Difficulty::parse(difficulty).ok_or(SessionError::InvalidDifficulty)?;

        let mut dialogue = Dialogue::new();
        let prompt = prompts::introduction(topic, difficulty, self.mode);
        let reply = dialogue.send(model, api_key, &prompt).await?;

        self.difficulty = difficulty;
        self.active = Some(ActiveTopic { topic, dialogue });
        Ok(reply)
    }

    /// Relay the student's text, rendered through the template selected
    /// by the current mode. No state transition.
    pub async fn respond(
        &mut self,
        model: &dyn ChatModel,
        api_key: &str,
        user_text: &str,
    ) -> Result<String, SessionError> {
        let mode = self.mode;
        let difficulty = self.difficulty;
        let Some(active) = self.active.as_mut() else {
            return Err(SessionError::NotActive);
        };

        let prompt = match mode {
            Mode::Socratic => prompts::socratic_probe(active.topic, difficulty, user_text),
            Mode::Qa => prompts::direct_answer(active.topic, difficulty, user_text),
        };
        Ok(active.dialogue.send(model, api_key, &prompt).await?)
    }

    /// Change the difficulty tier and tell the model to adjust.
    /// Rejects values outside easy/medium/hard without mutating state;
    /// requires an active session.
    pub async fn set_difficulty(
        &mut self,
        model: &dyn ChatModel,
        api_key: &str,
        new_difficulty: &str,
    ) -> Result<String, SessionError> {
        let new_difficulty =
            Difficulty::parse(new_difficulty).ok_or(SessionError::InvalidDifficulty)?;
        let Some(active) = self.active.as_mut() else {
            return Err(SessionError::NotActive);
        };

        self.difficulty = new_difficulty;
        let prompt = prompts::difficulty_change(new_difficulty);
        Ok(active.dialogue.send(model, api_key, &prompt).await?)
    }

    /// Switch between Socratic and Q&A mode. The mode is validated here
    /// at the boundary; rendering never sees free text.
    pub async fn set_mode(
        &mut self,
        model: &dyn ChatModel,
        api_key: &str,
        new_mode: &str,
    ) -> Result<String, SessionError> {
        let new_mode = Mode::parse(new_mode).ok_or(SessionError::InvalidMode)?;
        let Some(active) = self.active.as_mut() else {
            return Err(SessionError::NotActive);
        };

        self.mode = new_mode;
        let prompt = prompts::mode_switch(active.topic, new_mode);
        Ok(active.dialogue.send(model, api_key, &prompt).await?)
    }

    /// Ask the model for a summary of the dialogue so far and a menu of
    /// continuation options. No state change.
    pub async fn check_understanding(
        &mut self,
        model: &dyn ChatModel,
        api_key: &str,
    ) -> Result<String, SessionError> {
        let Some(active) = self.active.as_mut() else {
            return Err(SessionError::NotActive);
        };

        let prompt = prompts::check_understanding(active.topic);
        Ok(active.dialogue.send(model, api_key, &prompt).await?)
    }

    /// Dispatch the conclusion template. Deliberately leaves the
    /// session active: "concluded but not ended" is an observable
    /// state, and full teardown requires a separate `end`.
    pub async fn conclude(
        &mut self,
        model: &dyn ChatModel,
        api_key: &str,
    ) -> Result<String, SessionError> {
        let Some(active) = self.active.as_mut() else {
            return Err(SessionError::NotActive);
        };

        let prompt = prompts::conclusion(active.topic);
        Ok(active.dialogue.send(model, api_key, &prompt).await?)
    }

    /// Reset to the idle state and defaults. Never dispatches to the
    /// model; ending an idle session is a no-op with a fixed message
    /// rather than an error.
    pub fn end(&mut self) -> String {
        if self.active.take().is_none() {
            return "No active conversation to end.".to_string();
        }

        self.difficulty = Difficulty::default();
        self.mode = Mode::default();
        "Thank you for the discussion. Is there anything else you'd like to explore?".to_string()
    }
}
