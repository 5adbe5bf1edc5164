//! Handlers shared by every table: list and delete-by-id.
//!
//! Mounted per entity with a turbofish, e.g. `get(crud::list::<Project>)`.

use axum::extract::State;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::TableRepo;
use folio_db::table::Table;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Query};
use crate::query::IdParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /{table}
pub async fn list<T>(State(state): State<AppState>) -> AppResult<Json<Vec<T>>>
where
    T: Table + Serialize + 'static,
{
    let rows = TableRepo::list::<T>(&state.pool).await?;
    Ok(Json(rows))
}

/// DELETE /{table}?id=
pub async fn delete<T>(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<MessageResponse>>
where
    T: Table + 'static,
{
    let id = params.require()?;
    let deleted = TableRepo::delete::<T>(&state.pool, id).await?;
    ensure_found::<T>(deleted, id)?;
    tracing::info!(entity = T::ENTITY, id, "Row deleted");
    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        T::ENTITY
    ))))
}

/// Turn a zero-rows-affected outcome into a 404 for `T`.
pub fn ensure_found<T: Table>(affected: bool, id: DbId) -> AppResult<()> {
    if affected {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: T::ENTITY,
            id,
        }))
    }
}

/// `{ "message": "<Entity> updated successfully" }`.
pub fn updated<T: Table>() -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("{} updated successfully", T::ENTITY)))
}
