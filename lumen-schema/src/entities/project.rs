use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::validate::{Validate, ValidationError, optional_non_empty, require_non_empty};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    pub region: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_region")]
    pub region: String,
}

impl NewProject {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            status: default_status(),
            region: default_region(),
        }
    }

    pub fn into_record(self, id: i64, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            region: self.region,
            created_at,
        }
    }
}

impl Validate for NewProject {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("status", &self.status)?;
        require_non_empty("region", &self.region)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectPatch {
    pub name: Option<String>,
    /// Absent keeps the description, `null` clears it.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    pub region: Option<String>,
}

impl ProjectPatch {
    pub fn apply_to(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(region) = self.region {
            project.region = region;
        }
    }
}

impl Validate for ProjectPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_non_empty("name", self.name.as_deref())?;
        optional_non_empty("status", self.status.as_deref())?;
        optional_non_empty("region", self.region.as_deref())
    }
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn default_status() -> String {
    "active".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}
