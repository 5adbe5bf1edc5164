//! `/health`: liveness of the pool plus schema state.
//!
//! The service is only `"ok"` when the database answers and every migration
//! embedded in this build has been applied; anything else is `"degraded"`.
//! The endpoint itself always answers 200; callers read the body.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use folio_db::MigrationStatus;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `null` when the database is unreachable or has never been migrated.
    pub migrations: Option<MigrationStatus>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = folio_db::health_check(&state.pool).await.is_ok();

    let migrations = if db_healthy {
        folio_db::migration_status(&state.pool)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "Could not read migration state"))
            .ok()
    } else {
        None
    };

    let schema_current = migrations.as_ref().is_some_and(|m| m.pending == 0);
    let status = if db_healthy && schema_current {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        migrations,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
