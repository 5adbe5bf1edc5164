//! Handlers for the `/companies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use folio_db::models::company::{Company, CreateCompany};
use folio_db::repositories::CompanyRepo;

use crate::error::AppResult;
use crate::extract::Json;
use crate::state::AppState;

/// POST /companies
///
/// Creates the company and its master employee atomically. The response
/// carries only the company.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let company = CompanyRepo::create_with_master(&state.pool, &input).await?;
    tracing::info!(company_id = company.id, "Company created with master employee");
    Ok((StatusCode::CREATED, Json(company)))
}
