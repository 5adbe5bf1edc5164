//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::{Json, Query};
use crate::handlers::crud;
use crate::query::IdParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH /projects?id=
pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<MessageResponse>> {
    let id = params.require()?;
    let updated = ProjectRepo::update(&state.pool, id, &input).await?;
    crud::ensure_found::<Project>(updated, id)?;
    Ok(crud::updated::<Project>())
}
