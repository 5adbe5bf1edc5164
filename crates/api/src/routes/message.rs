//! Route definitions for the `/messages` resource.

use axum::routing::get;
use axum::Router;
use folio_db::models::message::Message;

use crate::handlers::{crud, message};
use crate::state::AppState;

/// ```text
/// GET    /messages                          -> list
/// POST   /messages                          -> create
/// PATCH  /messages                          -> update (id in body)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/messages",
        get(crud::list::<Message>)
            .post(message::create)
            .patch(message::update),
    )
}
