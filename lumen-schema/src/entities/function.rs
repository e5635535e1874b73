use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationError, optional_non_empty, require_non_empty};

/// A deployed serverless function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub runtime: String,
    pub status: String,
    pub invocations: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFunction {
    pub name: String,
    pub runtime: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub invocations: u64,
}

impl NewFunction {
    pub fn into_record(self, id: i64, project_id: i64) -> Function {
        Function {
            id,
            project_id,
            name: self.name,
            runtime: self.runtime,
            status: self.status,
            invocations: self.invocations,
        }
    }
}

impl Validate for NewFunction {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("runtime", &self.runtime)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FunctionPatch {
    pub name: Option<String>,
    pub runtime: Option<String>,
    pub status: Option<String>,
    pub invocations: Option<u64>,
}

impl FunctionPatch {
    pub fn apply_to(self, function: &mut Function) {
        if let Some(name) = self.name {
            function.name = name;
        }
        if let Some(runtime) = self.runtime {
            function.runtime = runtime;
        }
        if let Some(status) = self.status {
            function.status = status;
        }
        if let Some(invocations) = self.invocations {
            function.invocations = invocations;
        }
    }
}

impl Validate for FunctionPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_non_empty("name", self.name.as_deref())?;
        optional_non_empty("runtime", self.runtime.as_deref())?;
        optional_non_empty("status", self.status.as_deref())
    }
}

fn default_status() -> String {
    "deployed".to_string()
}
