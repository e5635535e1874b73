use serde::{Deserialize, Serialize};

use super::JsonObject;
use crate::validate::{Validate, ValidationError, require_non_empty};

/// A sign-in method (email, OAuth vendor, ...) configured for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthProvider {
    pub id: i64,
    pub project_id: i64,
    pub provider: String,
    pub enabled: bool,
    pub config: JsonObject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuthProvider {
    pub provider: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub config: JsonObject,
}

impl NewAuthProvider {
    pub fn into_record(self, id: i64, project_id: i64) -> AuthProvider {
        AuthProvider {
            id,
            project_id,
            provider: self.provider,
            enabled: self.enabled,
            config: self.config,
        }
    }
}

impl Validate for NewAuthProvider {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("provider", &self.provider)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthProviderPatch {
    pub enabled: Option<bool>,
    pub config: Option<JsonObject>,
}

impl AuthProviderPatch {
    pub fn apply_to(self, provider: &mut AuthProvider) {
        if let Some(enabled) = self.enabled {
            provider.enabled = enabled;
        }
        if let Some(config) = self.config {
            provider.config = config;
        }
    }
}

impl Validate for AuthProviderPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

fn default_enabled() -> bool {
    true
}
