pub mod client;
mod page;

use crate::cli::Args;
use crate::models::chat::{SendReply, SendRequest};
use crate::models::conversation::ConversationStore;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use client::BackendClient;
use log::info;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct UiState {
    store: Arc<Mutex<ConversationStore>>,
    backend: BackendClient,
}

impl UiState {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            store: Arc::new(Mutex::new(ConversationStore::new())),
            backend,
        }
    }
}

pub fn router(state: UiState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/history", get(history_handler))
        .route("/send", post(send_handler))
        .with_state(state)
}

pub async fn run(args: &Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let state = UiState::new(BackendClient::new(&args.api_addr));
    info!("Starting chat UI server on: http://{}", args.ui_addr);

    let listener = tokio::net::TcpListener::bind(&args.ui_addr).await?;
    axum::serve(listener, router(state).into_make_service()).await?;
    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(page::CHAT_PAGE)
}

async fn history_handler(State(state): State<UiState>) -> Json<ConversationStore> {
    let store = state.store.lock().await;
    Json(store.clone())
}

/// One conversational turn. The store lock is held across the backend call
/// so turns are strictly serialized and the prompt/reply alignment can
/// never be observed half-finished.
async fn send_handler(
    State(state): State<UiState>,
    Json(SendRequest { prompt }): Json<SendRequest>,
) -> Response {
    if prompt.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let mut store = state.store.lock().await;
    store.push_prompt(prompt.clone());
    let reply = state.backend.ask(&prompt).await;
    store.push_reply(reply.clone());

    Json(SendReply { reply }).into_response()
}
