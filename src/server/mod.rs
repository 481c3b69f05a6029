pub mod api;

use crate::cli::Args;
use crate::llm::{new_client, LlmConfig};
use std::error::Error;

pub async fn run(args: &Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let gateway = new_client(&LlmConfig::from_args(args))?;
    api::start_http_server(&args.api_addr, gateway).await
}
