//! Kind-tagged envelopes exchanged with the store actor.

use lumen_schema::{
    AiAssistant, AiAssistantPatch, AuthProvider, AuthProviderPatch, Database, DatabasePatch,
    Function, FunctionPatch, Metric, NewAiAssistant, NewAuthProvider, NewDatabase, NewFunction,
    NewMetric, NewProject, NewStorageBucket, Project, ProjectPatch, StorageBucket,
    StorageBucketPatch,
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Project,
    Database,
    AuthProvider,
    StorageBucket,
    Function,
    AiAssistant,
    Metric,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Project => "project",
            ResourceKind::Database => "database",
            ResourceKind::AuthProvider => "auth provider",
            ResourceKind::StorageBucket => "storage bucket",
            ResourceKind::Function => "function",
            ResourceKind::AiAssistant => "AI assistant",
            ResourceKind::Metric => "metric",
        };
        f.write_str(name)
    }
}

/// Any stored record. Serializes as the bare record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Project(Project),
    Database(Database),
    AuthProvider(AuthProvider),
    StorageBucket(StorageBucket),
    Function(Function),
    AiAssistant(AiAssistant),
    Metric(Metric),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Project(_) => ResourceKind::Project,
            Resource::Database(_) => ResourceKind::Database,
            Resource::AuthProvider(_) => ResourceKind::AuthProvider,
            Resource::StorageBucket(_) => ResourceKind::StorageBucket,
            Resource::Function(_) => ResourceKind::Function,
            Resource::AiAssistant(_) => ResourceKind::AiAssistant,
            Resource::Metric(_) => ResourceKind::Metric,
        }
    }
}

/// Create payload plus, for child records, the owning project id taken from the URL.
#[derive(Debug, Clone)]
pub enum ResourceCreate {
    Project(NewProject),
    Database { project_id: i64, new: NewDatabase },
    AuthProvider { project_id: i64, new: NewAuthProvider },
    StorageBucket { project_id: i64, new: NewStorageBucket },
    Function { project_id: i64, new: NewFunction },
    AiAssistant { project_id: i64, new: NewAiAssistant },
    Metric { project_id: i64, new: NewMetric },
}

impl ResourceCreate {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceCreate::Project(_) => ResourceKind::Project,
            ResourceCreate::Database { .. } => ResourceKind::Database,
            ResourceCreate::AuthProvider { .. } => ResourceKind::AuthProvider,
            ResourceCreate::StorageBucket { .. } => ResourceKind::StorageBucket,
            ResourceCreate::Function { .. } => ResourceKind::Function,
            ResourceCreate::AiAssistant { .. } => ResourceKind::AiAssistant,
            ResourceCreate::Metric { .. } => ResourceKind::Metric,
        }
    }
}

/// Partial update addressed by record id. Metrics are append-only and have no patch.
#[derive(Debug, Clone)]
pub enum ResourcePatch {
    Project { id: i64, patch: ProjectPatch },
    Database { id: i64, patch: DatabasePatch },
    AuthProvider { id: i64, patch: AuthProviderPatch },
    StorageBucket { id: i64, patch: StorageBucketPatch },
    Function { id: i64, patch: FunctionPatch },
    AiAssistant { id: i64, patch: AiAssistantPatch },
}

impl ResourcePatch {
    pub fn id(&self) -> i64 {
        match self {
            ResourcePatch::Project { id, .. }
            | ResourcePatch::Database { id, .. }
            | ResourcePatch::AuthProvider { id, .. }
            | ResourcePatch::StorageBucket { id, .. }
            | ResourcePatch::Function { id, .. }
            | ResourcePatch::AiAssistant { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourcePatch::Project { .. } => ResourceKind::Project,
            ResourcePatch::Database { .. } => ResourceKind::Database,
            ResourcePatch::AuthProvider { .. } => ResourceKind::AuthProvider,
            ResourcePatch::StorageBucket { .. } => ResourceKind::StorageBucket,
            ResourcePatch::Function { .. } => ResourceKind::Function,
            ResourcePatch::AiAssistant { .. } => ResourceKind::AiAssistant,
        }
    }
}
