//! Wire types for the OpenRouter chat-completions API.
//!
//! Response structs preserve fields the check itself never reads. They are
//! part of the API contract and are retained for debugging and logging.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,

    pub messages: Vec<ChatMessage>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    pub choices: Vec<ChatChoice>,

    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: i32,
    pub completion_tokens: i32,
    pub total_tokens: i32,
}

impl ChatCompletion {
    /// Text content of the first choice, if the response carried one.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_without_unset_options() {
        let request = ChatRequest::new(
            "qwen/qwen3-coder:free",
            vec![ChatMessage {
                role: ChatRole::User,
                content: "ping".to_string(),
            }],
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "qwen/qwen3-coder:free",
                "messages": [{ "role": "user", "content": "ping" }]
            })
        );
    }

    #[test]
    fn completion_deserializes_and_exposes_first_choice() {
        let body = json!({
            "id": "gen-1234",
            "model": "qwen/qwen3-coder:free",
            "choices": [
                {
                    "message": { "role": "assistant", "content": "print('Hello World')" },
                    "finish_reason": "stop"
                },
                {
                    "message": { "role": "assistant", "content": "second choice" },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20 }
        });

        let completion: ChatCompletion = serde_json::from_value(body).unwrap();
        assert_eq!(completion.first_text(), Some("print('Hello World')"));
        assert_eq!(completion.usage.unwrap().total_tokens, 20);
    }

    #[test]
    fn completion_tolerates_missing_optional_fields() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "ok" } }
            ]
        });

        let completion: ChatCompletion = serde_json::from_value(body).unwrap();
        assert_eq!(completion.first_text(), Some("ok"));
        assert!(completion.id.is_none());
        assert!(completion.usage.is_none());
    }

    #[test]
    fn first_text_is_none_for_empty_choices() {
        let completion: ChatCompletion = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_eq!(completion.first_text(), None);
    }
}
