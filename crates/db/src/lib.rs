//! Database layer: connection settings, pool construction, migrations,
//! models and repositories.

pub mod models;
pub mod repositories;
pub mod settings;
pub mod table;

use std::collections::HashSet;

use serde::Serialize;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub use settings::{DbSettings, SslMode};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool and open the first connection eagerly, so a bad
/// host or credentials fail at startup rather than on the first request.
pub async fn create_pool(settings: &DbSettings) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(
        host = %settings.host,
        port = settings.port,
        database = %settings.database,
        max_connections = settings.max_connections,
        "Connecting to database"
    );
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(settings.connect_options())
        .await
}

/// Liveness check: runs `SELECT 1` on a pooled connection.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Migrations embedded from `db/migrations` at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Schema state of the connected database relative to the embedded migrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationStatus {
    /// Successfully applied migrations known to this build.
    pub applied: usize,
    /// Embedded migrations not yet applied.
    pub pending: usize,
    /// Highest successfully applied version, if any.
    pub latest_version: Option<i64>,
}

/// Compare `_sqlx_migrations` against the embedded migration set.
///
/// Fails if the bookkeeping table does not exist yet.
pub async fn migration_status(pool: &DbPool) -> Result<MigrationStatus, sqlx::Error> {
    let versions: Vec<i64> =
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success ORDER BY version")
            .fetch_all(pool)
            .await?;
    let applied: HashSet<i64> = versions.iter().copied().collect();

    let (known, pending) = MIGRATOR
        .iter()
        .fold((0, 0), |(known, pending), migration| {
            if applied.contains(&migration.version) {
                (known + 1, pending)
            } else {
                (known, pending + 1)
            }
        });

    Ok(MigrationStatus {
        applied: known,
        pending,
        latest_version: versions.last().copied(),
    })
}
