use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Listen address for the chat API process.
    #[arg(long, env = "API_ADDR", default_value = "127.0.0.1:8000")]
    pub api_addr: String,

    /// Listen address for the chat UI process.
    #[arg(long, env = "UI_ADDR", default_value = "127.0.0.1:8501")]
    pub ui_addr: String,

    /// API Key for the Gemini provider. Required by the `api` process.
    #[arg(long, env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    /// Model name for chat completion (e.g., gemini-1.5-flash)
    #[arg(long, env = "CHAT_MODEL")]
    pub chat_model: Option<String>,

    /// Base URL override for the Gemini provider API.
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,

    /// Readiness probe attempts against the API before the UI starts anyway.
    #[arg(long, env = "STARTUP_PROBE_ATTEMPTS", default_value = "20")]
    pub startup_probe_attempts: u32,

    /// Base delay in milliseconds between readiness probe attempts.
    #[arg(long, env = "STARTUP_PROBE_DELAY_MS", default_value = "250")]
    pub startup_probe_delay_ms: u64,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the chat API server
    Api,
    /// Run the chat UI server
    Ui,
}
