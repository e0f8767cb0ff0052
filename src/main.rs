//! Socratic tutoring backend
//!
//! An HTTP service wrapping a conversation state machine over the
//! Gemini generative-model API. Students pick a topic from a fixed
//! knowledge base; the service renders prompt templates and relays
//! the model's replies.

mod api;
mod knowledge;
mod llm;
mod prompts;
mod session;

use api::{create_router, AppState};
use llm::{ChatModel, GeminiChat, LoggingModel};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "socratic_tutor=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration
    let port: u16 = std::env::var("TUTOR_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let default_api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
    let base_url = std::env::var("GEMINI_BASE_URL").ok();

    if default_api_key.is_none() {
        tracing::warn!(
            "No GEMINI_API_KEY configured; every request must carry its own api_key"
        );
    }

    // Model client, shared across all requests
    let gemini = GeminiChat::new(base_url.as_deref());
    let model = Arc::new(LoggingModel::new(Arc::new(gemini)));
    tracing::info!(model = %model.model_id(), "Model client initialized");

    // Application state and router
    let state = AppState::new(model, default_api_key);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state).layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Tutoring backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
