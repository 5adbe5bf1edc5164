//! Handlers for the `/messages` resource.

use axum::extract::State;
use axum::http::StatusCode;
use folio_db::models::message::{CreateMessage, Message, UpdateMessage};
use folio_db::repositories::MessageRepo;

use crate::error::AppResult;
use crate::extract::Json;
use crate::handlers::crud;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /messages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> AppResult<(StatusCode, Json<Message>)> {
    let message = MessageRepo::create(&state.pool, &input).await?;
    tracing::info!(message_id = message.id, "Message received");
    Ok((StatusCode::CREATED, Json(message)))
}

/// PATCH /messages (id in the body)
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateMessage>,
) -> AppResult<Json<MessageResponse>> {
    let updated = MessageRepo::update(&state.pool, &input).await?;
    crud::ensure_found::<Message>(updated, input.id)?;
    Ok(crud::updated::<Message>())
}
