//! Shared query parameter types for API handlers.

use folio_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// `?id=` selector used by update and delete endpoints.
///
/// Kept as raw text so that `?id=` with no value is reported the same way as
/// an absent parameter.
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    /// The parsed id, or a 400 when the parameter is absent, blank or not an
    /// integer.
    pub fn require(&self) -> AppResult<DbId> {
        let raw = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing ID in the URL parameter".to_string()))?;

        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid ID in the URL parameter: {raw}")))
    }
}
