use serde::{Deserialize, Serialize};

/// Body accepted by `POST /chat`. The field is optional on the wire so a
/// missing prompt deserializes and is rejected by the handler, not by the
/// JSON layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Error body returned by the chat API on 400/500 responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One submission from the chat page to the UI process.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub prompt: String,
}

/// The reply the UI process hands back to the page for one turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendReply {
    pub reply: String,
}
