//! Company entity model and creation DTO.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::table::Table;

/// A company row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub company_name: String,
}

impl Table for Company {
    const TABLE: &'static str = "companies";
    const ENTITY: &'static str = "Company";
    const COLUMNS: &'static str = "id, company_name";
}

/// DTO for creating a company together with its master employee.
///
/// Omitted fields are stored as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCompany {
    pub company_name: String,
    /// Email of the master employee.
    pub email: String,
    /// Username of the master employee.
    pub username: String,
}
