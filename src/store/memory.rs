use chrono::Utc;
use lumen_schema::{
    AiAssistant, AuthProvider, Database, Function, Metric, NewProject, Project, StorageBucket,
};

use super::envelope::{Resource, ResourceCreate, ResourceKind, ResourcePatch};
use super::table::Table;
use super::traits::StoredRecord;

/// The single owner of every entity table and id counter.
///
/// Plain synchronous data structure; the store actor is the only thing that
/// mutates it at runtime.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Table<Project>,
    databases: Table<Database>,
    auth_providers: Table<AuthProvider>,
    storage_buckets: Table<StorageBucket>,
    functions: Table<Function>,
    assistants: Table<AiAssistant>,
    metrics: Table<Metric>,
}

impl MemoryStore {
    pub fn create(&mut self, create: ResourceCreate) -> Resource {
        let now = Utc::now();
        match create {
            ResourceCreate::Project(new) => self.create_project(new).into_resource(),
            ResourceCreate::Database { project_id, new } => self
                .databases
                .insert_with(|id| new.into_record(id, project_id, now))
                .into_resource(),
            ResourceCreate::AuthProvider { project_id, new } => self
                .auth_providers
                .insert_with(|id| new.into_record(id, project_id))
                .into_resource(),
            ResourceCreate::StorageBucket { project_id, new } => self
                .storage_buckets
                .insert_with(|id| new.into_record(id, project_id))
                .into_resource(),
            ResourceCreate::Function { project_id, new } => self
                .functions
                .insert_with(|id| new.into_record(id, project_id))
                .into_resource(),
            ResourceCreate::AiAssistant { project_id, new } => self
                .assistants
                .insert_with(|id| new.into_record(id, project_id))
                .into_resource(),
            ResourceCreate::Metric { project_id, new } => self
                .metrics
                .insert_with(|id| new.into_record(id, project_id, now))
                .into_resource(),
        }
    }

    pub fn create_project(&mut self, new: NewProject) -> Project {
        let now = Utc::now();
        self.projects.insert_with(|id| new.into_record(id, now))
    }

    /// Merges the patch into the stored record; `None` when the id is unknown.
    pub fn patch(&mut self, patch: ResourcePatch) -> Option<Resource> {
        match patch {
            ResourcePatch::Project { id, patch } => self
                .projects
                .update(id, |record| patch.apply_to(record))
                .map(StoredRecord::into_resource),
            ResourcePatch::Database { id, patch } => self
                .databases
                .update(id, |record| patch.apply_to(record))
                .map(StoredRecord::into_resource),
            ResourcePatch::AuthProvider { id, patch } => self
                .auth_providers
                .update(id, |record| patch.apply_to(record))
                .map(StoredRecord::into_resource),
            ResourcePatch::StorageBucket { id, patch } => self
                .storage_buckets
                .update(id, |record| patch.apply_to(record))
                .map(StoredRecord::into_resource),
            ResourcePatch::Function { id, patch } => self
                .functions
                .update(id, |record| patch.apply_to(record))
                .map(StoredRecord::into_resource),
            ResourcePatch::AiAssistant { id, patch } => self
                .assistants
                .update(id, |record| patch.apply_to(record))
                .map(StoredRecord::into_resource),
        }
    }

    pub fn get(&self, kind: ResourceKind, id: i64) -> Option<Resource> {
        match kind {
            ResourceKind::Project => self.projects.get(id).cloned().map(Resource::Project),
            ResourceKind::Database => self.databases.get(id).cloned().map(Resource::Database),
            ResourceKind::AuthProvider => self
                .auth_providers
                .get(id)
                .cloned()
                .map(Resource::AuthProvider),
            ResourceKind::StorageBucket => self
                .storage_buckets
                .get(id)
                .cloned()
                .map(Resource::StorageBucket),
            ResourceKind::Function => self.functions.get(id).cloned().map(Resource::Function),
            ResourceKind::AiAssistant => {
                self.assistants.get(id).cloned().map(Resource::AiAssistant)
            }
            ResourceKind::Metric => self.metrics.get(id).cloned().map(Resource::Metric),
        }
    }

    /// Child records of `project_id`, ordered by id. Projects have no parent,
    /// so `ResourceKind::Project` always yields an empty list.
    pub fn list_for_project(&self, kind: ResourceKind, project_id: i64) -> Vec<Resource> {
        fn wrap<T: StoredRecord>(rows: Vec<T>) -> Vec<Resource> {
            rows.into_iter().map(StoredRecord::into_resource).collect()
        }

        match kind {
            ResourceKind::Project => Vec::new(),
            ResourceKind::Database => wrap(self.databases.for_project(project_id)),
            ResourceKind::AuthProvider => wrap(self.auth_providers.for_project(project_id)),
            ResourceKind::StorageBucket => wrap(self.storage_buckets.for_project(project_id)),
            ResourceKind::Function => wrap(self.functions.for_project(project_id)),
            ResourceKind::AiAssistant => wrap(self.assistants.for_project(project_id)),
            ResourceKind::Metric => wrap(self.metrics.for_project(project_id)),
        }
    }

    pub fn list_projects(&self) -> Vec<Project> {
        self.projects.all()
    }

    /// Removes the project only; its children stay in place.
    pub fn delete_project(&mut self, id: i64) -> Option<Project> {
        self.projects.remove(id)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// No records of any kind.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.databases.is_empty()
            && self.auth_providers.is_empty()
            && self.storage_buckets.is_empty()
            && self.functions.is_empty()
            && self.assistants.is_empty()
            && self.metrics.is_empty()
    }
}
