pub mod gemini;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::sync::Arc;

use self::gemini::GeminiChatClient;
use crate::cli::Args;

pub const DEFAULT_CHAT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub completion_model: Option<String>,
    pub base_url: Option<String>,
}

impl LlmConfig {
    pub fn from_args(args: &Args) -> Self {
        let api_key = if !args.gemini_api_key.is_empty() {
            Some(args.gemini_api_key.clone())
        } else {
            None
        };
        Self {
            api_key,
            completion_model: args.chat_model.clone(),
            base_url: args.chat_base_url.clone(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>>;
}

pub fn new_client(
    config: &LlmConfig,
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let client = GeminiChatClient::from_config(config)?;
    Ok(Arc::new(client))
}
