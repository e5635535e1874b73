//! Typed views over the store envelopes.
//!
//! The actor speaks in [`Resource`]/[`ResourceCreate`]/[`ResourcePatch`]; these
//! traits let the handle expose `get::<Project>(id)`-style calls instead.

use lumen_schema::{
    AiAssistant, AiAssistantPatch, AuthProvider, AuthProviderPatch, Database, DatabasePatch,
    Function, FunctionPatch, Metric, NewAiAssistant, NewAuthProvider, NewDatabase, NewFunction,
    NewMetric, NewStorageBucket, Project, ProjectPatch, StorageBucket, StorageBucketPatch,
};

use super::envelope::{Resource, ResourceCreate, ResourceKind, ResourcePatch};

pub trait StoredRecord: Sized + Send + 'static {
    const KIND: ResourceKind;

    fn id(&self) -> i64;

    /// Owning project, `None` for root records.
    fn project_id(&self) -> Option<i64>;

    fn into_resource(self) -> Resource;

    /// `None` when the envelope holds another kind.
    fn from_resource(resource: Resource) -> Option<Self>;
}

/// Create payload of a record that lives under a project.
pub trait ChildCreate: Send + 'static {
    type Record: StoredRecord;

    fn into_create(self, project_id: i64) -> ResourceCreate;
}

/// Patch payload of a mutable record.
pub trait RecordPatch: Send + 'static {
    type Record: StoredRecord;

    fn into_patch(self, id: i64) -> ResourcePatch;
}

impl StoredRecord for Project {
    const KIND: ResourceKind = ResourceKind::Project;

    fn id(&self) -> i64 {
        self.id
    }

    fn project_id(&self) -> Option<i64> {
        None
    }

    fn into_resource(self) -> Resource {
        Resource::Project(self)
    }

    fn from_resource(resource: Resource) -> Option<Self> {
        match resource {
            Resource::Project(project) => Some(project),
            _ => None,
        }
    }
}

impl RecordPatch for ProjectPatch {
    type Record = Project;

    fn into_patch(self, id: i64) -> ResourcePatch {
        ResourcePatch::Project { id, patch: self }
    }
}

impl StoredRecord for Database {
    const KIND: ResourceKind = ResourceKind::Database;

    fn id(&self) -> i64 {
        self.id
    }

    fn project_id(&self) -> Option<i64> {
        Some(self.project_id)
    }

    fn into_resource(self) -> Resource {
        Resource::Database(self)
    }

    fn from_resource(resource: Resource) -> Option<Self> {
        match resource {
            Resource::Database(database) => Some(database),
            _ => None,
        }
    }
}

impl ChildCreate for NewDatabase {
    type Record = Database;

    fn into_create(self, project_id: i64) -> ResourceCreate {
        ResourceCreate::Database {
            project_id,
            new: self,
        }
    }
}

impl RecordPatch for DatabasePatch {
    type Record = Database;

    fn into_patch(self, id: i64) -> ResourcePatch {
        ResourcePatch::Database { id, patch: self }
    }
}

impl StoredRecord for AuthProvider {
    const KIND: ResourceKind = ResourceKind::AuthProvider;

    fn id(&self) -> i64 {
        self.id
    }

    fn project_id(&self) -> Option<i64> {
        Some(self.project_id)
    }

    fn into_resource(self) -> Resource {
        Resource::AuthProvider(self)
    }

    fn from_resource(resource: Resource) -> Option<Self> {
        match resource {
            Resource::AuthProvider(provider) => Some(provider),
            _ => None,
        }
    }
}

impl ChildCreate for NewAuthProvider {
    type Record = AuthProvider;

    fn into_create(self, project_id: i64) -> ResourceCreate {
        ResourceCreate::AuthProvider {
            project_id,
            new: self,
        }
    }
}

impl RecordPatch for AuthProviderPatch {
    type Record = AuthProvider;

    fn into_patch(self, id: i64) -> ResourcePatch {
        ResourcePatch::AuthProvider { id, patch: self }
    }
}

impl StoredRecord for StorageBucket {
    const KIND: ResourceKind = ResourceKind::StorageBucket;

    fn id(&self) -> i64 {
        self.id
    }

    fn project_id(&self) -> Option<i64> {
        Some(self.project_id)
    }

    fn into_resource(self) -> Resource {
        Resource::StorageBucket(self)
    }

    fn from_resource(resource: Resource) -> Option<Self> {
        match resource {
            Resource::StorageBucket(bucket) => Some(bucket),
            _ => None,
        }
    }
}

impl ChildCreate for NewStorageBucket {
    type Record = StorageBucket;

    fn into_create(self, project_id: i64) -> ResourceCreate {
        ResourceCreate::StorageBucket {
            project_id,
            new: self,
        }
    }
}

impl RecordPatch for StorageBucketPatch {
    type Record = StorageBucket;

    fn into_patch(self, id: i64) -> ResourcePatch {
        ResourcePatch::StorageBucket { id, patch: self }
    }
}

impl StoredRecord for Function {
    const KIND: ResourceKind = ResourceKind::Function;

    fn id(&self) -> i64 {
        self.id
    }

    fn project_id(&self) -> Option<i64> {
        Some(self.project_id)
    }

    fn into_resource(self) -> Resource {
        Resource::Function(self)
    }

    fn from_resource(resource: Resource) -> Option<Self> {
        match resource {
            Resource::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl ChildCreate for NewFunction {
    type Record = Function;

    fn into_create(self, project_id: i64) -> ResourceCreate {
        ResourceCreate::Function {
            project_id,
            new: self,
        }
    }
}

impl RecordPatch for FunctionPatch {
    type Record = Function;

    fn into_patch(self, id: i64) -> ResourcePatch {
        ResourcePatch::Function { id, patch: self }
    }
}

impl StoredRecord for AiAssistant {
    const KIND: ResourceKind = ResourceKind::AiAssistant;

    fn id(&self) -> i64 {
        self.id
    }

    fn project_id(&self) -> Option<i64> {
        Some(self.project_id)
    }

    fn into_resource(self) -> Resource {
        Resource::AiAssistant(self)
    }

    fn from_resource(resource: Resource) -> Option<Self> {
        match resource {
            Resource::AiAssistant(assistant) => Some(assistant),
            _ => None,
        }
    }
}

impl ChildCreate for NewAiAssistant {
    type Record = AiAssistant;

    fn into_create(self, project_id: i64) -> ResourceCreate {
        ResourceCreate::AiAssistant {
            project_id,
            new: self,
        }
    }
}

impl RecordPatch for AiAssistantPatch {
    type Record = AiAssistant;

    fn into_patch(self, id: i64) -> ResourcePatch {
        ResourcePatch::AiAssistant { id, patch: self }
    }
}

impl StoredRecord for Metric {
    const KIND: ResourceKind = ResourceKind::Metric;

    fn id(&self) -> i64 {
        self.id
    }

    fn project_id(&self) -> Option<i64> {
        Some(self.project_id)
    }

    fn into_resource(self) -> Resource {
        Resource::Metric(self)
    }

    fn from_resource(resource: Resource) -> Option<Self> {
        match resource {
            Resource::Metric(metric) => Some(metric),
            _ => None,
        }
    }
}

impl ChildCreate for NewMetric {
    type Record = Metric;

    fn into_create(self, project_id: i64) -> ResourceCreate {
        ResourceCreate::Metric {
            project_id,
            new: self,
        }
    }
}
