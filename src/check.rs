//! The connectivity check itself.

use crate::chat::{ChatMessage, ChatRequest, ChatRole};
use crate::client::OpenRouterClient;
use crate::config::OpenRouterConfig;
use crate::error::CheckError;

/// Fixed prompt sent by every check invocation.
pub const CHECK_PROMPT: &str = "Write a simple 'Hello World' program in Python";

const SEPARATOR_WIDTH: usize = 50;

/// Result of one check run.
///
/// Every failure source (configuration, connectivity, authentication,
/// malformed payload) collapses into `Failed`; callers only branch on
/// pass/fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Passed { response: String },
    Failed { reason: String },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed { .. })
    }
}

/// Run the connectivity check once, reporting progress on stdout.
///
/// Never returns an error; failures are printed and folded into the outcome.
pub async fn run_check(config: OpenRouterConfig) -> CheckOutcome {
    println!("🔗 Connecting to OpenRouter API...");

    match request_completion(config).await {
        Ok(text) => {
            println!("✅ OpenRouter API test successful!");
            println!("\n📝 Response:");
            println!("{}", "-".repeat(SEPARATOR_WIDTH));
            // The response body is printed exactly as returned.
            println!("{text}");
            println!("{}", "-".repeat(SEPARATOR_WIDTH));

            CheckOutcome::Passed { response: text }
        }
        Err(e) => {
            println!("❌ Error testing OpenRouter API: {e}");

            CheckOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn request_completion(config: OpenRouterConfig) -> Result<String, CheckError> {
    let client = OpenRouterClient::new(config)?;

    let request = ChatRequest::new(
        client.config.model.clone(),
        vec![ChatMessage {
            role: ChatRole::User,
            content: CHECK_PROMPT.to_string(),
        }],
    );

    let completion = client.chat_completion(&request).await?;

    completion
        .first_text()
        .map(str::to_owned)
        .ok_or_else(|| CheckError::Api {
            message: "API response contained no choices".to_string(),
            status_code: None,
        })
}
