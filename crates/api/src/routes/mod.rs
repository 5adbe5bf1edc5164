pub mod company;
pub mod employee;
pub mod health;
pub mod message;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /companies                                       list, create
/// /employees                                       list
/// /projects                                        list, create, update (?id=), delete (?id=)
/// /messages                                        list, create, update (id in body)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(company::router())
        .merge(employee::router())
        .merge(project::router())
        .merge(message::router())
}
