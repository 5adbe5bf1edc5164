//! Integration tests for `/health`: pool liveness and migration state.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

const MIGRATION_COUNT: u64 = 4;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_ok_when_schema_is_current(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["migrations"]["applied"], MIGRATION_COUNT);
    assert_eq!(json["migrations"]["pending"], 0);
    assert!(json["migrations"]["latest_version"].is_i64());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_degraded_when_a_migration_is_pending(pool: PgPool) {
    sqlx::query(
        "DELETE FROM _sqlx_migrations WHERE version = (SELECT MAX(version) FROM _sqlx_migrations)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["migrations"]["applied"], MIGRATION_COUNT - 1);
    assert_eq!(json["migrations"]["pending"], 1);
}

#[sqlx::test(migrations = false)]
async fn health_reports_degraded_on_unmigrated_database(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert!(json["migrations"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_degraded_when_pool_is_closed(pool: PgPool) {
    pool.close().await;
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert!(json["migrations"].is_null());
}
