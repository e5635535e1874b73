//! Project-scoped child collections and their single-record PATCH routes.

use crate::error::LumenError;
use crate::server::extract::{ResourceId, ValidatedJson};
use crate::server::router::LumenState;
use crate::store::{ChildCreate, RecordPatch, StoredRecord};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, patch},
};
use lumen_schema::{
    AiAssistant, AiAssistantPatch, AuthProvider, AuthProviderPatch, Database, DatabasePatch,
    Function, FunctionPatch, Metric, NewAiAssistant, NewAuthProvider, NewDatabase, NewFunction,
    NewMetric, NewStorageBucket, StorageBucket, StorageBucketPatch, Validate,
};
use serde::{Serialize, de::DeserializeOwned};

pub fn router() -> Router<LumenState> {
    Router::new()
        .route(
            "/api/projects/{id}/databases",
            get(list_children::<Database>).post(create_child::<NewDatabase>),
        )
        .route(
            "/api/projects/{id}/auth",
            get(list_children::<AuthProvider>).post(create_child::<NewAuthProvider>),
        )
        .route(
            "/api/projects/{id}/storage",
            get(list_children::<StorageBucket>).post(create_child::<NewStorageBucket>),
        )
        .route(
            "/api/projects/{id}/functions",
            get(list_children::<Function>).post(create_child::<NewFunction>),
        )
        .route(
            "/api/projects/{id}/ai",
            get(list_children::<AiAssistant>).post(create_child::<NewAiAssistant>),
        )
        .route(
            "/api/projects/{id}/metrics",
            get(list_children::<Metric>).post(create_child::<NewMetric>),
        )
        .route("/api/databases/{id}", patch(update_record::<DatabasePatch>))
        .route("/api/auth/{id}", patch(update_record::<AuthProviderPatch>))
        .route("/api/storage/{id}", patch(update_record::<StorageBucketPatch>))
        .route("/api/functions/{id}", patch(update_record::<FunctionPatch>))
        .route("/api/assistants/{id}", patch(update_record::<AiAssistantPatch>))
}

/// Records owned by the project in the path; unknown projects list as empty.
async fn list_children<R>(
    State(state): State<LumenState>,
    ResourceId(project_id): ResourceId,
) -> Result<Json<Vec<R>>, LumenError>
where
    R: StoredRecord + Serialize,
{
    Ok(Json(state.store.list_for_project::<R>(project_id).await?))
}

async fn create_child<N>(
    State(state): State<LumenState>,
    ResourceId(project_id): ResourceId,
    ValidatedJson(new): ValidatedJson<N>,
) -> Result<(StatusCode, Json<N::Record>), LumenError>
where
    N: ChildCreate + DeserializeOwned + Validate,
    N::Record: Serialize,
{
    let record = state.store.create_for_project(project_id, new).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_record<P>(
    State(state): State<LumenState>,
    ResourceId(id): ResourceId,
    ValidatedJson(patch): ValidatedJson<P>,
) -> Result<Json<P::Record>, LumenError>
where
    P: RecordPatch + DeserializeOwned + Validate,
    P::Record: Serialize,
{
    Ok(Json(state.store.update(id, patch).await?))
}
