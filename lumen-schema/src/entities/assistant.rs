use serde::{Deserialize, Serialize};

use super::JsonObject;
use crate::validate::{
    Validate, ValidationError, model_name, optional_model_name, optional_non_empty,
    require_non_empty,
};

/// A configured AI assistant. `model` decides which completion provider serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAssistant {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub model: String,
    pub config: JsonObject,
    pub active: bool,
}

impl AiAssistant {
    /// Optional system prompt stored under `config.systemPrompt`.
    pub fn system_prompt(&self) -> Option<&str> {
        self.config
            .get("systemPrompt")
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAiAssistant {
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub config: JsonObject,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl NewAiAssistant {
    pub fn into_record(self, id: i64, project_id: i64) -> AiAssistant {
        AiAssistant {
            id,
            project_id,
            name: self.name,
            model: self.model,
            config: self.config,
            active: self.active,
        }
    }
}

impl Validate for NewAiAssistant {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        model_name("model", &self.model)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AiAssistantPatch {
    pub name: Option<String>,
    pub model: Option<String>,
    pub config: Option<JsonObject>,
    pub active: Option<bool>,
}

impl AiAssistantPatch {
    pub fn apply_to(self, assistant: &mut AiAssistant) {
        macro_rules! set_plain {
            ($field:ident) => {
                if let Some(v) = self.$field {
                    assistant.$field = v;
                }
            };
        }

        set_plain!(name);
        set_plain!(model);
        set_plain!(config);
        set_plain!(active);
    }
}

impl Validate for AiAssistantPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_non_empty("name", self.name.as_deref())?;
        optional_model_name("model", self.model.as_deref())
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn system_prompt_ignores_blank_values() {
        let new: NewAiAssistant = serde_json::from_value(json!({
            "name": "bot",
            "model": "gpt-4o-mini",
            "config": { "systemPrompt": "   " }
        }))
        .expect("parse");
        let assistant = new.into_record(1, 1);
        assert!(assistant.system_prompt().is_none());
        assert!(assistant.active);
    }

    #[test]
    fn assistant_model_is_checked_on_create_and_patch() {
        let new: NewAiAssistant =
            serde_json::from_value(json!({ "name": "bot", "model": "../v1/files" })).expect("parse");
        assert_eq!(new.validate().unwrap_err().field, "model");

        let patch = AiAssistantPatch {
            model: Some("gemini-2.0-flash?key=x".to_string()),
            ..Default::default()
        };
        assert_eq!(patch.validate().unwrap_err().field, "model");
    }
}
