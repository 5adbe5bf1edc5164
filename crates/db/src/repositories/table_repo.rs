//! Queries shared by every [`Table`].

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::table::Table;

/// Generic list and delete operations, parameterized by the row type.
pub struct TableRepo;

impl TableRepo {
    /// List every row ordered by id ascending.
    pub async fn list<T: Table>(pool: &PgPool) -> Result<Vec<T>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} ORDER BY id ASC", T::COLUMNS, T::TABLE);
        sqlx::query_as::<_, T>(&query).fetch_all(pool).await
    }

    /// Delete a row by id. Returns `true` if a row was removed.
    pub async fn delete<T: Table>(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
