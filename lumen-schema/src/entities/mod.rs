//! Dashboard resource records and their create/patch payloads.
//!
//! Records serialize with camelCase keys to match the dashboard frontend.
//! `New*` payloads carry caller-supplied fields (defaults fill the rest);
//! `*Patch` payloads hold every mutable attribute as an `Option`, where
//! `None` means "leave unchanged". Clearable optionals (`ProjectPatch::description`)
//! nest one more `Option` so an explicit `null` can be told apart.

mod assistant;
mod auth;
mod database;
mod function;
mod metric;
mod project;
mod storage;

pub use assistant::{AiAssistant, AiAssistantPatch, NewAiAssistant};
pub use auth::{AuthProvider, AuthProviderPatch, NewAuthProvider};
pub use database::{Database, DatabasePatch, NewDatabase};
pub use function::{Function, FunctionPatch, NewFunction};
pub use metric::{Metric, NewMetric};
pub use project::{NewProject, Project, ProjectPatch};
pub use storage::{NewStorageBucket, StorageBucket, StorageBucketPatch};

/// Free-form JSON object used for `config` and `metrics` attributes.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
