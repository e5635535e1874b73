use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::ai::{ChatRole, ChatTurn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A single conversation turn or system instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// `"user"` or `"model"`. Absent for `systemInstruction`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.into()),
                extra: BTreeMap::new(),
            }],
        }
    }

    /// Concatenated text of all text parts.
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

impl From<&ChatTurn> for Content {
    /// Gemini has no `assistant` role; model turns are `model`. System turns are sent
    /// as user text here, since only one `systemInstruction` is allowed.
    fn from(turn: &ChatTurn) -> Self {
        let role = match turn.role {
            ChatRole::Assistant => "model",
            ChatRole::User | ChatRole::System => "user",
        };
        Content::text(Some(role), turn.content.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// inlineData, functionCall, ... are carried through untouched.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, if it is non-empty.
    pub fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(Content::joined_text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_camel_case_and_omits_empty_options() {
        let req = GenerateContentRequest {
            contents: vec![Content::from(&ChatTurn::assistant("hello"))],
            system_instruction: Some(Content::text(None, "be brief")),
            generation_config: None,
        };
        assert_eq!(
            serde_json::to_value(&req).expect("serialize"),
            json!({
                "contents": [{ "role": "model", "parts": [{ "text": "hello" }] }],
                "systemInstruction": { "parts": [{ "text": "be brief" }] }
            })
        );
    }

    #[test]
    fn first_text_joins_parts_of_first_candidate() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hel" }, { "text": "lo" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 3 }
        }))
        .expect("parse");
        assert_eq!(resp.first_text().as_deref(), Some("Hello"));
        assert!(resp.extra.contains_key("usageMetadata"));
    }
}
