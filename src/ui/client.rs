use crate::llm::CompletionResponse;
use crate::models::chat::ChatRequest;
use log::warn;

/// Shown when the API answered 200 but the body carried no response text.
pub const NO_RESPONSE_FALLBACK: &str = "No se pudo obtener una respuesta.";
/// Shown when the API answered non-200 or could not be reached at all.
pub const SERVER_ERROR_FALLBACK: &str = "Error al comunicarse con el servidor.";

/// HTTP client for the chat API process.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    chat_url: String,
}

impl BackendClient {
    pub fn new(api_addr: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_url: format!("http://{}/chat", api_addr),
        }
    }

    /// Sends one prompt to the chat API. Every failure mode degrades to a
    /// fixed fallback string, so the conversation always gains a reply for
    /// the turn. A 400, a 500 and an unreachable server all read the same
    /// from here.
    pub async fn ask(&self, prompt: &str) -> String {
        let request = ChatRequest {
            prompt: Some(prompt.to_string()),
        };

        match self.http.post(&self.chat_url).json(&request).send().await {
            Ok(resp) if resp.status().is_success() => {
                match resp.json::<CompletionResponse>().await {
                    Ok(body) => body.response,
                    Err(_) => NO_RESPONSE_FALLBACK.to_string(),
                }
            }
            Ok(resp) => {
                warn!("Chat API answered with status {}", resp.status());
                SERVER_ERROR_FALLBACK.to_string()
            }
            Err(e) => {
                warn!("Could not reach the chat API: {}", e);
                SERVER_ERROR_FALLBACK.to_string()
            }
        }
    }
}
