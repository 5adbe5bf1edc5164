//! Contact message model and DTOs.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::id::deserialize_id;
use crate::table::Table;

/// A message row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub location: String,
    pub message: String,
    pub read: bool,
}

impl Table for Message {
    const TABLE: &'static str = "messages";
    const ENTITY: &'static str = "Message";
    const COLUMNS: &'static str = "id, email, name, location, message, read";
}

/// DTO for creating a message. Omitted text fields are stored as empty
/// strings and `read` defaults to `false`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateMessage {
    pub email: String,
    pub name: String,
    pub location: String,
    pub message: String,
    pub read: bool,
}

/// DTO for updating a message. The target id travels in the body, either as
/// a number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMessage {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: DbId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub read: Option<bool>,
}
