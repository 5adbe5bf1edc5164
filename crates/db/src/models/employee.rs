//! Employee entity model.
//!
//! Employees are only created as a company's master employee; see
//! [`crate::repositories::CompanyRepo::create_with_master`].

use folio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::table::Table;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub company_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_master: bool,
    pub username: Option<String>,
}

impl Table for Employee {
    const TABLE: &'static str = "employees";
    const ENTITY: &'static str = "Employee";
    const COLUMNS: &'static str = "id, company_id, first_name, last_name, email, is_master, username";
}
