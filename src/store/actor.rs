use lumen_schema::{NewProject, Project};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort, SpawnErr};
use tracing::{debug, info};

use super::envelope::{Resource, ResourceCreate, ResourceKind, ResourcePatch};
use super::memory::MemoryStore;
use super::seed::seed_demo;
use super::traits::{ChildCreate, RecordPatch, StoredRecord};
use crate::error::LumenError;

#[derive(Debug)]
pub enum StoreMessage {
    /// Insert a record under the next id of its table.
    Create(ResourceCreate, RpcReplyPort<Resource>),

    /// Merge a partial update; `None` when the id is unknown.
    Patch(ResourcePatch, RpcReplyPort<Option<Resource>>),

    /// Fetch one record by kind and id.
    Get(ResourceKind, i64, RpcReplyPort<Option<Resource>>),

    /// Children of one project, ordered by id.
    ListForProject(ResourceKind, i64, RpcReplyPort<Vec<Resource>>),

    /// All projects, ordered by id.
    ListProjects(RpcReplyPort<Vec<Project>>),

    /// Remove a project (children are kept).
    DeleteProject(i64, RpcReplyPort<Option<Project>>),
}

/// Cloneable front door to the store actor.
#[derive(Clone)]
pub struct StoreHandle {
    actor: ActorRef<StoreMessage>,
}

impl StoreHandle {
    pub async fn list_projects(&self) -> Result<Vec<Project>, LumenError> {
        ractor::call!(self.actor, StoreMessage::ListProjects)
            .map_err(|e| LumenError::Store(format!("StoreActor ListProjects RPC failed: {e}")))
    }

    pub async fn create_project(&self, new: NewProject) -> Result<Project, LumenError> {
        let created = self.create(ResourceCreate::Project(new)).await?;
        expect_kind(created)
    }

    /// Creates a child record under `project_id`. The project is not required to exist.
    pub async fn create_for_project<N: ChildCreate>(
        &self,
        project_id: i64,
        new: N,
    ) -> Result<N::Record, LumenError> {
        let created = self.create(new.into_create(project_id)).await?;
        expect_kind(created)
    }

    pub async fn update<P: RecordPatch>(
        &self,
        id: i64,
        patch: P,
    ) -> Result<P::Record, LumenError> {
        let kind = <P::Record as StoredRecord>::KIND;
        let updated = ractor::call!(self.actor, StoreMessage::Patch, patch.into_patch(id))
            .map_err(|e| LumenError::Store(format!("StoreActor Patch RPC failed: {e}")))?;
        match updated {
            Some(resource) => expect_kind(resource),
            None => Err(LumenError::NotFound { kind, id }),
        }
    }

    pub async fn get<R: StoredRecord>(&self, id: i64) -> Result<R, LumenError> {
        let found = ractor::call!(self.actor, StoreMessage::Get, R::KIND, id)
            .map_err(|e| LumenError::Store(format!("StoreActor Get RPC failed: {e}")))?;
        match found {
            Some(resource) => expect_kind(resource),
            None => Err(LumenError::NotFound { kind: R::KIND, id }),
        }
    }

    /// Records of kind `R` owned by `project_id`; empty when the project is unknown.
    pub async fn list_for_project<R: StoredRecord>(
        &self,
        project_id: i64,
    ) -> Result<Vec<R>, LumenError> {
        let rows = ractor::call!(self.actor, StoreMessage::ListForProject, R::KIND, project_id)
            .map_err(|e| {
                LumenError::Store(format!("StoreActor ListForProject RPC failed: {e}"))
            })?;
        rows.into_iter().map(expect_kind).collect()
    }

    pub async fn delete_project(&self, id: i64) -> Result<Project, LumenError> {
        ractor::call!(self.actor, StoreMessage::DeleteProject, id)
            .map_err(|e| LumenError::Store(format!("StoreActor DeleteProject RPC failed: {e}")))?
            .ok_or(LumenError::NotFound {
                kind: ResourceKind::Project,
                id,
            })
    }

    async fn create(&self, create: ResourceCreate) -> Result<Resource, LumenError> {
        ractor::call!(self.actor, StoreMessage::Create, create)
            .map_err(|e| LumenError::Store(format!("StoreActor Create RPC failed: {e}")))
    }
}

fn expect_kind<R: StoredRecord>(resource: Resource) -> Result<R, LumenError> {
    let got = resource.kind();
    R::from_resource(resource).ok_or_else(|| {
        LumenError::Unexpected(format!(
            "store returned a {got} where a {} was expected",
            R::KIND
        ))
    })
}

struct StoreActor;

#[ractor::async_trait]
impl Actor for StoreActor {
    type Msg = StoreMessage;
    type State = MemoryStore;
    type Arguments = bool;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        seed_demo_data: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let mut store = MemoryStore::default();
        if seed_demo_data {
            let project_id = seed_demo(&mut store);
            info!(project_id, "StoreActor seeded demo data");
        }
        info!(
            projects = store.project_count(),
            empty = store.is_empty(),
            "StoreActor initialized"
        );
        Ok(store)
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            StoreMessage::Create(create, reply) => {
                let kind = create.kind();
                let created = state.create(create);
                if let Some(id) = created_id(&created) {
                    debug!(%kind, id, "Record created");
                }
                let _ = reply.send(created);
            }
            StoreMessage::Patch(patch, reply) => {
                let (kind, id) = (patch.kind(), patch.id());
                let updated = state.patch(patch);
                debug!(%kind, id, found = updated.is_some(), "Record patched");
                let _ = reply.send(updated);
            }
            StoreMessage::Get(kind, id, reply) => {
                let _ = reply.send(state.get(kind, id));
            }
            StoreMessage::ListForProject(kind, project_id, reply) => {
                let _ = reply.send(state.list_for_project(kind, project_id));
            }
            StoreMessage::ListProjects(reply) => {
                let _ = reply.send(state.list_projects());
            }
            StoreMessage::DeleteProject(id, reply) => {
                let removed = state.delete_project(id);
                debug!(id, found = removed.is_some(), "Project deleted");
                let _ = reply.send(removed);
            }
        }
        Ok(())
    }
}

fn created_id(resource: &Resource) -> Option<i64> {
    match resource {
        Resource::Project(r) => Some(r.id),
        Resource::Database(r) => Some(r.id),
        Resource::AuthProvider(r) => Some(r.id),
        Resource::StorageBucket(r) => Some(r.id),
        Resource::Function(r) => Some(r.id),
        Resource::AiAssistant(r) => Some(r.id),
        Resource::Metric(r) => Some(r.id),
    }
}

/// Spawn the store actor and return a cloneable handle.
///
/// The actor is unnamed so several stores can coexist in one process (tests).
pub async fn spawn(seed_demo_data: bool) -> Result<StoreHandle, SpawnErr> {
    let (actor, _jh) = ractor::Actor::spawn(None, StoreActor, seed_demo_data).await?;
    Ok(StoreHandle { actor })
}
