//! Table descriptions shared by the generic list/delete queries.

use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A table whose rows decode into `Self`.
///
/// Every table has a `BIGSERIAL id` primary key; list queries order by it.
pub trait Table: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// SQL table name.
    const TABLE: &'static str;
    /// Entity name used in client-facing messages.
    const ENTITY: &'static str;
    /// Column list selected by reads and returned by inserts.
    const COLUMNS: &'static str;
}
