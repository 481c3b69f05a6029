use crate::cli::Args;
use log::{info, warn};
use std::error::Error;
use tokio::process::{Child, Command};
use tokio::time::{sleep, Duration};

/// Launches the API and UI processes as children of the current executable
/// and supervises their lifetimes. There is no restart-on-crash and no
/// health monitoring past the startup probe.
pub struct AppManager {
    backend: Option<Child>,
    frontend: Option<Child>,
}

impl AppManager {
    pub fn new() -> Self {
        Self {
            backend: None,
            frontend: None,
        }
    }

    fn start_backend(&mut self, args: &Args) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut command = Command::new(std::env::current_exe()?);
        command.arg("api").arg("--api-addr").arg(&args.api_addr);
        if let Some(model) = &args.chat_model {
            command.arg("--chat-model").arg(model);
        }
        if let Some(base_url) = &args.chat_base_url {
            command.arg("--chat-base-url").arg(base_url);
        }
        let child = command.kill_on_drop(true).spawn()?;
        info!("Chat API process started (pid {:?})", child.id());
        self.backend = Some(child);
        Ok(())
    }

    fn start_frontend(&mut self, args: &Args) -> Result<(), Box<dyn Error + Send + Sync>> {
        let child = Command::new(std::env::current_exe()?)
            .arg("ui")
            .arg("--ui-addr")
            .arg(&args.ui_addr)
            .arg("--api-addr")
            .arg(&args.api_addr)
            .kill_on_drop(true)
            .spawn()?;
        info!("Chat UI process started (pid {:?})", child.id());
        self.frontend = Some(child);
        Ok(())
    }

    /// Polls the API health route with a bounded linear backoff until it
    /// answers. When the probe gives up the UI is started anyway; early
    /// requests then surface in the conversation as the communication-error
    /// reply until the API comes up.
    async fn wait_until_ready(&self, args: &Args) -> bool {
        let url = format!("http://{}/health", args.api_addr);
        let http = reqwest::Client::new();

        for attempt in 1..=args.startup_probe_attempts {
            if let Ok(resp) = http.get(&url).send().await {
                if resp.status().is_success() {
                    info!("Chat API is ready after {} probe(s)", attempt);
                    return true;
                }
            }
            sleep(Duration::from_millis(
                args.startup_probe_delay_ms * attempt as u64,
            ))
            .await;
        }
        false
    }

    pub async fn run(mut self, args: &Args) -> Result<(), Box<dyn Error + Send + Sync>> {
        info!("Starting the application...");

        self.start_backend(args)?;
        if !self.wait_until_ready(args).await {
            warn!("Chat API never reported ready; starting the UI anyway");
        }
        self.start_frontend(args)?;

        info!("Application running. Press Ctrl-C to stop.");
        tokio::signal::ctrl_c().await?;

        info!("Stopping the application...");
        self.shutdown().await;
        Ok(())
    }

    async fn shutdown(&mut self) {
        if let Some(child) = self.frontend.as_mut() {
            if let Err(e) = child.kill().await {
                warn!("Failed to stop the chat UI process: {}", e);
            }
        }
        if let Some(child) = self.backend.as_mut() {
            if let Err(e) = child.kill().await {
                warn!("Failed to stop the chat API process: {}", e);
            }
        }
    }
}

impl Default for AppManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{Json, Router};

    fn probe_args(api_addr: &str, attempts: u32, delay_ms: u64) -> Args {
        Args {
            command: None,
            api_addr: api_addr.to_string(),
            ui_addr: "127.0.0.1:8501".to_string(),
            gemini_api_key: String::new(),
            chat_model: None,
            chat_base_url: None,
            startup_probe_attempts: attempts,
            startup_probe_delay_ms: delay_ms,
        }
    }

    #[tokio::test]
    async fn readiness_probe_succeeds_against_a_listening_api() {
        let app = Router::new().route(
            "/health",
            get(|| async { Json(serde_json::json!({ "status": "ok" })) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service()).await.unwrap();
        });

        let manager = AppManager::new();
        assert!(manager.wait_until_ready(&probe_args(&addr, 5, 10)).await);
    }

    #[tokio::test]
    async fn readiness_probe_gives_up_when_nothing_listens() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let manager = AppManager::new();
        assert!(!manager.wait_until_ready(&probe_args(&addr, 2, 10)).await);
    }
}
