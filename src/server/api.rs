use crate::llm::{ChatClient, CompletionResponse};
use crate::models::chat::{ChatRequest, ErrorBody};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Fixed client-facing error bodies. Whatever failed upstream stays in the
/// server log; these strings are all a client ever sees.
pub const MISSING_PROMPT_ERROR: &str = "No se proporcionó una pregunta";
pub const INTERNAL_SERVER_ERROR: &str = "Error interno del servidor";

#[derive(Clone)]
pub struct AppState {
    gateway: Arc<dyn ChatClient>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn ChatClient>) -> Self {
        Self { gateway }
    }
}

/// Failures the chat route can answer with. `into_response` is the only
/// place client-facing error text is produced, so upstream detail cannot
/// cross the process boundary.
#[derive(Debug, thiserror::Error)]
pub enum ChatFailure {
    #[error("no prompt was provided")]
    MissingPrompt,
    #[error("chat completion failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ChatFailure {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ChatFailure::MissingPrompt => (StatusCode::BAD_REQUEST, MISSING_PROMPT_ERROR),
            ChatFailure::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR),
        };
        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    addr: &str,
    gateway: Arc<dyn ChatClient>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting chat API server on: http://{}", addr);

    let app = router(AppState::new(gateway));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<CompletionResponse>, ChatFailure> {
    let prompt = match payload {
        Ok(Json(body)) => body.prompt.unwrap_or_default(),
        Err(_) => return Err(ChatFailure::MissingPrompt),
    };
    if prompt.is_empty() {
        return Err(ChatFailure::MissingPrompt);
    }

    match state.gateway.complete(&prompt).await {
        Ok(completion) => Ok(Json(completion)),
        Err(e) => {
            error!("Chat completion failed: {}", e);
            Err(ChatFailure::Upstream(e.to_string()))
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    #[derive(Default)]
    struct MockGateway {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockGateway {
        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatClient for MockGateway {
        async fn complete(
            &self,
            prompt: &str,
        ) -> Result<CompletionResponse, Box<dyn Error + Send + Sync>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err("provider exploded: quota exceeded".into());
            }
            Ok(CompletionResponse {
                response: format!("eco: {prompt}"),
            })
        }
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn answers_with_a_completion_for_a_prompt() {
        let gateway = Arc::new(MockGateway::default());
        let app = router(AppState::new(gateway.clone()));

        let response = app
            .oneshot(chat_request(r#"{"prompt": "hola"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"], "eco: hola");
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn rejects_a_missing_prompt_without_calling_the_gateway() {
        let gateway = Arc::new(MockGateway::default());
        let app = router(AppState::new(gateway.clone()));

        let response = app.oneshot(chat_request("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], MISSING_PROMPT_ERROR);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn rejects_an_empty_prompt() {
        let gateway = Arc::new(MockGateway::default());
        let app = router(AppState::new(gateway.clone()));

        let response = app
            .oneshot(chat_request(r#"{"prompt": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], MISSING_PROMPT_ERROR);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn rejects_a_body_that_is_not_json() {
        let gateway = Arc::new(MockGateway::default());
        let app = router(AppState::new(gateway.clone()));

        let response = app.oneshot(chat_request("esto no es json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], MISSING_PROMPT_ERROR);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn hides_upstream_detail_behind_a_generic_error() {
        let gateway = Arc::new(MockGateway::failing());
        let app = router(AppState::new(gateway.clone()));

        let response = app
            .oneshot(chat_request(r#"{"prompt": "hola"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("quota"));
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn reports_health() {
        let gateway = Arc::new(MockGateway::default());
        let app = router(AppState::new(gateway));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
