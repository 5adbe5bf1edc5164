//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::table::Table;

const COLUMNS: &str = Project::COLUMNS;

/// Provides insert and update operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, location, imageurl)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.imageurl)
            .fetch_one(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                date = COALESCE($4, date),
                imageurl = COALESCE($5, imageurl)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.location)
        .bind(input.date)
        .bind(&input.imageurl)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
