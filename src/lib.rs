pub mod cli;
pub mod llm;
pub mod models;
pub mod server;
pub mod supervisor;
pub mod ui;

use cli::{Args, Command};
use log::info;
use std::error::Error;
use supervisor::AppManager;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("API Address: {}", args.api_addr);
    info!("UI Address: {}", args.ui_addr);
    info!(
        "Chat Model: {}",
        args.chat_model.as_deref().unwrap_or(llm::DEFAULT_CHAT_MODEL)
    );
    info!("Startup Probe Attempts: {}", args.startup_probe_attempts);
    info!("Startup Probe Delay (ms): {}", args.startup_probe_delay_ms);
    info!("-------------------------");

    match &args.command {
        Some(Command::Api) => server::run(&args).await,
        Some(Command::Ui) => ui::run(&args).await,
        None => AppManager::new().run(&args).await,
    }
}
