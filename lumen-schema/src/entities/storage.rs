use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationError, optional_non_empty, require_non_empty};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageBucket {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub public: bool,
    pub file_count: u64,
    /// Bytes.
    pub total_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStorageBucket {
    pub name: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub file_count: u64,
    #[serde(default)]
    pub total_size: u64,
}

impl NewStorageBucket {
    pub fn into_record(self, id: i64, project_id: i64) -> StorageBucket {
        StorageBucket {
            id,
            project_id,
            name: self.name,
            public: self.public,
            file_count: self.file_count,
            total_size: self.total_size,
        }
    }
}

impl Validate for NewStorageBucket {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StorageBucketPatch {
    pub name: Option<String>,
    pub public: Option<bool>,
    pub file_count: Option<u64>,
    pub total_size: Option<u64>,
}

impl StorageBucketPatch {
    pub fn apply_to(self, bucket: &mut StorageBucket) {
        macro_rules! set_plain {
            ($field:ident) => {
                if let Some(v) = self.$field {
                    bucket.$field = v;
                }
            };
        }

        set_plain!(name);
        set_plain!(public);
        set_plain!(file_count);
        set_plain!(total_size);
    }
}

impl Validate for StorageBucketPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_non_empty("name", self.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sizes_do_not_parse() {
        let res = serde_json::from_str::<NewStorageBucket>(r#"{"name":"a","totalSize":-1}"#);
        assert!(res.is_err());
    }
}
