//! Route definitions for the `/employees` resource (read-only).

use axum::routing::get;
use axum::Router;
use folio_db::models::employee::Employee;

use crate::handlers::crud;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/employees", get(crud::list::<Employee>))
}
