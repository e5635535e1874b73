use serde::{Deserialize, Serialize};

use crate::validate::{
    Validate, ValidationError, optional_model_name, optional_non_empty, require_non_empty,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCodeRequest {
    pub prompt: String,
    /// Target language; the generator picks TypeScript when absent.
    #[serde(default)]
    pub language: Option<String>,
}

impl Validate for GenerateCodeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("prompt", &self.prompt)?;
        optional_non_empty("language", self.language.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSqlRequest {
    pub prompt: String,
    /// Optional DDL or table description passed to the model as context.
    #[serde(default)]
    pub schema: Option<String>,
}

impl Validate for GenerateSqlRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("prompt", &self.prompt)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

impl Validate for SentimentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("text", &self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
    #[serde(default)]
    pub model: Option<String>,
    /// When set, the assistant's model and system prompt drive the call.
    #[serde(default)]
    pub assistant_id: Option<i64>,
}

impl ChatRequest {
    /// Content of the most recent user turn, if any.
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|turn| turn.role == ChatRole::User)
            .map(|turn| turn.content.as_str())
    }
}

impl Validate for ChatRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            return Err(ValidationError::new("messages", "must not be empty"));
        }
        if self.messages.iter().any(|turn| turn.content.trim().is_empty()) {
            return Err(ValidationError::new(
                "messages",
                "message content must not be empty",
            ));
        }
        optional_model_name("model", self.model.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub text: String,
    /// Upper bound on summary length in characters.
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl Validate for SummarizeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("text", &self.text)?;
        if self.max_length == Some(0) {
            return Err(ValidationError::new("maxLength", "must be greater than zero"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeImageRequest {
    /// An `http(s)` URL, a `data:` URI, or bare base64 (treated as JPEG).
    pub image: String,
    #[serde(default)]
    pub prompt: Option<String>,
}

impl AnalyzeImageRequest {
    /// Normalizes `image` into something the vision API accepts as `image_url.url`.
    pub fn image_url(&self) -> String {
        let image = self.image.trim();
        if image.starts_with("http://") || image.starts_with("https://") || image.starts_with("data:")
        {
            image.to_string()
        } else {
            format!("data:image/jpeg;base64,{image}")
        }
    }
}

impl Validate for AnalyzeImageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("image", &self.image)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    /// `WIDTHxHEIGHT`, e.g. `1024x1024`.
    #[serde(default)]
    pub size: Option<String>,
}

impl GenerateImageRequest {
    pub const DEFAULT_SIZE: &'static str = "1024x1024";

    pub fn size(&self) -> &str {
        self.size.as_deref().unwrap_or(Self::DEFAULT_SIZE)
    }
}

impl Validate for GenerateImageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("prompt", &self.prompt)?;
        if let Some(size) = self.size.as_deref() {
            let valid = size
                .split_once('x')
                .is_some_and(|(w, h)| w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok());
            if !valid {
                return Err(ValidationError::new("size", "expected WIDTHxHEIGHT"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_requires_messages_field() {
        let res = serde_json::from_value::<ChatRequest>(json!({ "model": "gpt-4o-mini" }));
        assert!(res.is_err());
    }

    #[test]
    fn chat_request_rejects_empty_message_list() {
        let req: ChatRequest = serde_json::from_value(json!({ "messages": [] })).expect("parse");
        assert_eq!(req.validate().unwrap_err().field, "messages");
    }

    #[test]
    fn chat_model_must_be_a_single_path_segment() {
        let req: ChatRequest = serde_json::from_value(json!({
            "messages": [{ "role": "user", "content": "hi" }],
            "model": "gemini-2.0-flash:generateContent?alt=sse"
        }))
        .expect("parse");
        assert_eq!(req.validate().unwrap_err().field, "model");

        let req: ChatRequest = serde_json::from_value(json!({
            "messages": [{ "role": "user", "content": "hi" }],
            "model": "models/gemini-2.0-flash"
        }))
        .expect("parse");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn last_user_message_skips_assistant_turns() {
        let req: ChatRequest = serde_json::from_value(json!({
            "messages": [
                { "role": "user", "content": "first" },
                { "role": "assistant", "content": "reply" }
            ],
            "assistantId": 4
        }))
        .expect("parse");
        assert_eq!(req.last_user_message(), Some("first"));
        assert_eq!(req.assistant_id, Some(4));
    }

    #[test]
    fn bare_base64_images_become_data_uris() {
        let req = AnalyzeImageRequest {
            image: "aGVsbG8=".to_string(),
            prompt: None,
        };
        assert_eq!(req.image_url(), "data:image/jpeg;base64,aGVsbG8=");

        let req = AnalyzeImageRequest {
            image: "https://example.test/cat.png".to_string(),
            prompt: None,
        };
        assert_eq!(req.image_url(), "https://example.test/cat.png");
    }

    #[test]
    fn image_size_must_be_width_by_height() {
        let req = GenerateImageRequest {
            prompt: "a cat".to_string(),
            size: Some("big".to_string()),
        };
        assert!(req.validate().is_err());

        let req = GenerateImageRequest {
            prompt: "a cat".to_string(),
            size: Some("512x512".to_string()),
        };
        assert!(req.validate().is_ok());
        assert_eq!(req.size(), "512x512");
    }
}
