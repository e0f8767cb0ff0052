//! HTTP API for the tutoring backend

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::llm::ChatModel;
use crate::session::TutorSession;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state shared across handlers.
///
/// One process-wide session, guarded by a single lock held for the
/// duration of each dispatch. Handlers receive the session through
/// this state rather than reaching for a global.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<TutorSession>>,
    pub model: Arc<dyn ChatModel>,
    /// Fallback credential for requests that carry no `api_key`.
    pub default_api_key: Option<String>,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>, default_api_key: Option<String>) -> Self {
        Self {
            session: Arc::new(Mutex::new(TutorSession::new())),
            model,
            default_api_key,
        }
    }
}
