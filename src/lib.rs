//! # openrouter-check
//!
//! One-shot connectivity check for the OpenRouter chat-completions API.
//!
//! The binary builds a client from the environment, sends a single fixed
//! prompt, prints the outcome on stdout, and exits 0 on success or 1 on
//! failure.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openrouter_check::{OpenRouterConfig, run_check};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = OpenRouterConfig::from_env();
//!     let outcome = run_check(config).await;
//!     assert!(outcome.passed());
//! }
//! ```

pub mod chat;
pub mod check;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;

pub use check::{CheckOutcome, run_check};
pub use client::OpenRouterClient;
pub use config::OpenRouterConfig;
pub use error::CheckError;
