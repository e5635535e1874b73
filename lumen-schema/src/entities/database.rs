use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::JsonObject;
use crate::validate::{Validate, ValidationError, optional_non_empty, require_non_empty};

/// A managed Postgres database attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub connection_string: String,
    pub status: String,
    pub extensions: Vec<String>,
    /// Dashboard-facing counters (connections, storage used, ...). Shape is not fixed.
    pub metrics: JsonObject,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDatabase {
    pub name: String,
    pub connection_string: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub metrics: JsonObject,
}

impl NewDatabase {
    pub fn into_record(self, id: i64, project_id: i64, created_at: DateTime<Utc>) -> Database {
        Database {
            id,
            project_id,
            name: self.name,
            connection_string: self.connection_string,
            status: self.status,
            extensions: self.extensions,
            metrics: self.metrics,
            created_at,
        }
    }
}

impl Validate for NewDatabase {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("connectionString", &self.connection_string)?;
        if self.extensions.iter().any(|e| e.trim().is_empty()) {
            return Err(ValidationError::new(
                "extensions",
                "extension names must not be empty",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DatabasePatch {
    pub name: Option<String>,
    pub connection_string: Option<String>,
    pub status: Option<String>,
    pub extensions: Option<Vec<String>>,
    /// Replaces the whole metrics object; keys are not merged individually.
    pub metrics: Option<JsonObject>,
}

impl DatabasePatch {
    pub fn apply_to(self, database: &mut Database) {
        macro_rules! set_plain {
            ($field:ident) => {
                if let Some(v) = self.$field {
                    database.$field = v;
                }
            };
        }

        set_plain!(name);
        set_plain!(connection_string);
        set_plain!(status);
        set_plain!(extensions);
        set_plain!(metrics);
    }
}

impl Validate for DatabasePatch {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_non_empty("name", self.name.as_deref())?;
        optional_non_empty("connectionString", self.connection_string.as_deref())?;
        optional_non_empty("status", self.status.as_deref())
    }
}

fn default_status() -> String {
    "active".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_connection_string_fails_to_parse() {
        let res = serde_json::from_value::<NewDatabase>(json!({ "name": "main" }));
        assert!(res.is_err());
    }

    #[test]
    fn patch_replaces_extension_list() {
        let new: NewDatabase = serde_json::from_value(json!({
            "name": "main",
            "connectionString": "postgresql://localhost/main",
            "extensions": ["pgvector"]
        }))
        .expect("parse");
        let mut db = new.into_record(1, 1, Utc::now());

        let patch: DatabasePatch =
            serde_json::from_value(json!({ "extensions": ["postgis"] })).expect("parse");
        patch.apply_to(&mut db);

        assert_eq!(db.extensions, vec!["postgis".to_string()]);
        assert_eq!(db.status, "active");
    }
}
