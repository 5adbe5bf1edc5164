//! Route definitions for the `/companies` resource.

use axum::routing::get;
use axum::Router;
use folio_db::models::company::Company;

use crate::handlers::{company, crud};
use crate::state::AppState;

/// ```text
/// GET    /companies                         -> list
/// POST   /companies                         -> create (with master employee)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/companies",
        get(crud::list::<Company>).post(company::create),
    )
}
