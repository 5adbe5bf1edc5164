/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the pool is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, owned by the entry point.
    pub pool: folio_db::DbPool,
}
