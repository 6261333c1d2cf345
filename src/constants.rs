pub mod openrouter {
    pub const API_BASE: &str = "https://openrouter.ai/api/v1";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const DEFAULT_MODEL: &str = "qwen/qwen3-coder:free";
    pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";
    pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";
    pub const ATTRIBUTION_REFERER: &str = "https://github.com/kuldeep27396/pr-review-agent";
    pub const ATTRIBUTION_TITLE: &str = "PR Review Agent Test";
}
