//! HTTP request handlers
//!
//! Handlers decode the request, take the session lock for the duration
//! of the dispatch, and map typed session errors to HTTP statuses. No
//! tutoring logic lives here.

use super::types::{
    ApiKeyRequest, ConversationResponse, DifficultyRequest, ErrorResponse, MessageRequest,
    TopicRequest,
};
use super::AppState;
use crate::knowledge::Topic;
use crate::llm::LlmErrorKind;
use crate::session::SessionError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/start_conversation", post(start_conversation))
        .route("/process_response", post(process_response))
        .route("/change_difficulty", post(change_difficulty))
        .route("/switch_mode", post(switch_mode))
        .route("/check_understanding", post(check_understanding))
        .route("/conclude_topic", post(conclude_topic))
        .route("/end_conversation", post(end_conversation))
        .route("/available_topics", get(available_topics))
        .with_state(state)
}

async fn start_conversation(
    State(state): State<AppState>,
    Json(req): Json<TopicRequest>,
) -> Result<Json<ConversationResponse>, AppError> {
    let api_key = credential(&state, req.api_key)?;
    let mut session = state.session.lock().await;

    let response = session
        .start(state.model.as_ref(), &api_key, &req.topic, &req.difficulty)
        .await?;
    Ok(Json(ConversationResponse { response }))
}

async fn process_response(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<ConversationResponse>, AppError> {
    let api_key = credential(&state, req.api_key)?;
    let mut session = state.session.lock().await;

    let response = session
        .respond(state.model.as_ref(), &api_key, &req.message)
        .await?;
    Ok(Json(ConversationResponse { response }))
}

async fn change_difficulty(
    State(state): State<AppState>,
    Json(req): Json<DifficultyRequest>,
) -> Result<Json<ConversationResponse>, AppError> {
    let api_key = credential(&state, req.api_key)?;
    let mut session = state.session.lock().await;

    let response = session
        .set_difficulty(state.model.as_ref(), &api_key, &req.difficulty)
        .await?;
    Ok(Json(ConversationResponse { response }))
}

/// The mode rides in the `message` field, matching the wire contract of
/// the other message-bearing routes.
async fn switch_mode(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<ConversationResponse>, AppError> {
    let api_key = credential(&state, req.api_key)?;
    let mut session = state.session.lock().await;

    let response = session
        .set_mode(state.model.as_ref(), &api_key, &req.message)
        .await?;
    Ok(Json(ConversationResponse { response }))
}

async fn check_understanding(
    State(state): State<AppState>,
    Json(req): Json<ApiKeyRequest>,
) -> Result<Json<ConversationResponse>, AppError> {
    let api_key = credential(&state, req.api_key)?;
    let mut session = state.session.lock().await;

    let response = session
        .check_understanding(state.model.as_ref(), &api_key)
        .await?;
    Ok(Json(ConversationResponse { response }))
}

async fn conclude_topic(
    State(state): State<AppState>,
    Json(req): Json<ApiKeyRequest>,
) -> Result<Json<ConversationResponse>, AppError> {
    let api_key = credential(&state, req.api_key)?;
    let mut session = state.session.lock().await;

    let response = session
        .conclude(state.model.as_ref(), &api_key)
        .await?;
    Ok(Json(ConversationResponse { response }))
}

/// Valid in any state; never dispatches to the model.
async fn end_conversation(State(state): State<AppState>) -> Json<ConversationResponse> {
    let mut session = state.session.lock().await;
    Json(ConversationResponse {
        response: session.end(),
    })
}

async fn available_topics() -> Json<Vec<&'static str>> {
    Json(Topic::all().iter().map(|t| t.name()).collect())
}

/// Resolve the credential for one dispatch: the request key wins, the
/// configured default is the fallback.
fn credential(state: &AppState, request_key: Option<String>) -> Result<String, AppError> {
    request_key
        .filter(|key| !key.is_empty())
        .or_else(|| state.default_api_key.clone())
        .ok_or_else(|| {
            AppError::BadRequest(
                "Missing api_key and no default credential configured.".to_string(),
            )
        })
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Auth(String),
    RateLimited(String),
    Upstream(String),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Model(e) => match e.kind {
                LlmErrorKind::Auth => AppError::Auth(e.message),
                LlmErrorKind::RateLimit => AppError::RateLimited(e.message),
                _ => AppError::Upstream(e.message),
            },
            recoverable => AppError::BadRequest(recoverable.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::RateLimited(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
