//! Property-based tests for the session state machine
//!
//! Drives the session with arbitrary operation sequences and checks it
//! against a naive reference model of the specified behavior.

use super::*;
use crate::knowledge::Topic;
use crate::llm::testing::ScriptedModel;
use futures::executor::block_on;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Start { topic: String, difficulty: String },
    Respond(String),
    SetDifficulty(String),
    SetMode(String),
    CheckUnderstanding,
    Conclude,
    End,
}

fn arb_topic() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("sorting".to_string()),
        Just("searching".to_string()),
        Just("data structures".to_string()),
        Just("graph theory".to_string()),
        "[a-z ]{0,12}",
    ]
}

fn arb_difficulty() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("easy".to_string()),
        Just("medium".to_string()),
        Just("hard".to_string()),
        Just("extreme".to_string()),
        "[a-z]{0,8}",
    ]
}

fn arb_mode() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Socratic".to_string()),
        Just("qa".to_string()),
        Just("Q&A".to_string()),
        Just("lecture".to_string()),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_topic(), arb_difficulty())
            .prop_map(|(topic, difficulty)| Op::Start { topic, difficulty }),
        "[a-zA-Z ?]{0,30}".prop_map(Op::Respond),
        arb_difficulty().prop_map(Op::SetDifficulty),
        arb_mode().prop_map(Op::SetMode),
        Just(Op::CheckUnderstanding),
        Just(Op::Conclude),
        Just(Op::End),
    ]
}

/// What the session should look like, per the specified transition
/// rules, ignoring dialogue contents.
#[derive(Debug, Clone, PartialEq)]
struct Reference {
    topic: Option<Topic>,
    difficulty: Difficulty,
    mode: Mode,
}

impl Reference {
    fn new() -> Self {
        Self {
            topic: None,
            difficulty: Difficulty::Medium,
            mode: Mode::Socratic,
        }
    }

    fn apply(&mut self, op: &Op) {
        match op {
            Op::Start { topic, difficulty } => {
                if let (Some(topic), Some(difficulty)) =
                    (Topic::parse(topic), Difficulty::parse(difficulty))
                {
                    self.topic = Some(topic);
                    self.difficulty = difficulty;
                }
            }
            Op::SetDifficulty(new) => {
                if let Some(new) = Difficulty::parse(new) {
                    if self.topic.is_some() {
                        self.difficulty = new;
                    }
                }
            }
            Op::SetMode(new) => {
                if let Some(new) = Mode::parse(new) {
                    if self.topic.is_some() {
                        self.mode = new;
                    }
                }
            }
            Op::Respond(_) | Op::CheckUnderstanding | Op::Conclude => {}
            Op::End => {
                if self.topic.take().is_some() {
                    self.difficulty = Difficulty::Medium;
                    self.mode = Mode::Socratic;
                }
            }
        }
    }
}

async fn apply_op(session: &mut TutorSession, model: &ScriptedModel, op: &Op) {
    // Errors are expected for invalid input and idle-state operations;
    // the reference model encodes whether state may change.
    let _ = match op {
        Op::Start { topic, difficulty } => session.start(model, "key", topic, difficulty).await,
        Op::Respond(text) => session.respond(model, "key", text).await,
        Op::SetDifficulty(new) => session.set_difficulty(model, "key", new).await,
        Op::SetMode(new) => session.set_mode(model, "key", new).await,
        Op::CheckUnderstanding => session.check_understanding(model, "key").await,
        Op::Conclude => session.conclude(model, "key").await,
        Op::End => Ok(session.end()),
    };
}

proptest! {
    /// The session tracks the reference model under any op sequence,
    /// and a dialogue exists iff a topic is set.
    #[test]
    fn session_matches_reference_model(ops in proptest::collection::vec(arb_op(), 1..25)) {
        let model = ScriptedModel::replying("reply");
        let mut session = TutorSession::new();
        let mut reference = Reference::new();

        for op in &ops {
            block_on(apply_op(&mut session, &model, op));
            reference.apply(op);

            prop_assert_eq!(session.topic(), reference.topic);
            prop_assert_eq!(session.difficulty(), reference.difficulty);
            prop_assert_eq!(session.mode(), reference.mode);
            prop_assert_eq!(session.is_active(), reference.topic.is_some());
            // Active sessions always carry at least the introduction
            // exchange; idle sessions carry nothing.
            if session.is_active() {
                prop_assert!(session.dialogue_turns() >= 2);
            } else {
                prop_assert_eq!(session.dialogue_turns(), 0);
            }
        }
    }

    /// End always lands on the idle defaults, whatever came before.
    #[test]
    fn end_restores_defaults(ops in proptest::collection::vec(arb_op(), 0..15)) {
        let model = ScriptedModel::replying("reply");
        let mut session = TutorSession::new();

        for op in &ops {
            block_on(apply_op(&mut session, &model, op));
        }
        session.end();

        prop_assert!(!session.is_active());
        prop_assert_eq!(session.difficulty(), Difficulty::Medium);
        prop_assert_eq!(session.mode(), Mode::Socratic);
    }
}
