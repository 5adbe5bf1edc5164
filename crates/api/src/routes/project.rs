//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;
use folio_db::models::project::Project;

use crate::handlers::{crud, project};
use crate::state::AppState;

/// ```text
/// GET    /projects                          -> list
/// POST   /projects                          -> create
/// PATCH  /projects?id={id}                  -> update
/// DELETE /projects?id={id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/projects",
        get(crud::list::<Project>)
            .post(project::create)
            .patch(project::update)
            .delete(crud::delete::<Project>),
    )
}
