use std::process::ExitCode;

use dotenv::dotenv;
use openrouter_check::{OpenRouterConfig, run_check};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // Diagnostics go to stderr; stdout carries only the check banners.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = OpenRouterConfig::from_env();

    if run_check(config).await.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
