use crate::error::LumenError;
use crate::server::extract::{ResourceId, ValidatedJson};
use crate::server::router::LumenState;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use lumen_schema::{NewProject, Project, ProjectPatch};

pub fn router() -> Router<LumenState> {
    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            get(get_project).patch(update_project).delete(delete_project),
        )
}

async fn list_projects(State(state): State<LumenState>) -> Result<Json<Vec<Project>>, LumenError> {
    Ok(Json(state.store.list_projects().await?))
}

async fn create_project(
    State(state): State<LumenState>,
    ValidatedJson(new): ValidatedJson<NewProject>,
) -> Result<(StatusCode, Json<Project>), LumenError> {
    let project = state.store.create_project(new).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

async fn get_project(
    State(state): State<LumenState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Project>, LumenError> {
    Ok(Json(state.store.get::<Project>(id).await?))
}

async fn update_project(
    State(state): State<LumenState>,
    ResourceId(id): ResourceId,
    ValidatedJson(patch): ValidatedJson<ProjectPatch>,
) -> Result<Json<Project>, LumenError> {
    Ok(Json(state.store.update(id, patch).await?))
}

/// Child records are left in place.
async fn delete_project(
    State(state): State<LumenState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, LumenError> {
    state.store.delete_project(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
