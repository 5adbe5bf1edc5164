//! Repository for the `messages` table.

use sqlx::PgPool;

use crate::models::message::{CreateMessage, Message, UpdateMessage};
use crate::table::Table;

const COLUMNS: &str = Message::COLUMNS;

/// Provides insert and update operations for contact messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (email, name, location, message, read)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.message)
            .bind(input.read)
            .fetch_one(pool)
            .await
    }

    /// Update the message identified by `input.id`. Only non-`None` fields
    /// are applied.
    ///
    /// Returns `false` if no row with that id exists.
    pub async fn update(pool: &PgPool, input: &UpdateMessage) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE messages SET
                email = COALESCE($2, email),
                name = COALESCE($3, name),
                location = COALESCE($4, location),
                message = COALESCE($5, message),
                read = COALESCE($6, read)
             WHERE id = $1",
        )
        .bind(input.id)
        .bind(&input.email)
        .bind(&input.name)
        .bind(&input.location)
        .bind(&input.message)
        .bind(input.read)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
