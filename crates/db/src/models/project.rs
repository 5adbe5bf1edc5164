//! Project entity model and DTOs.

use chrono::NaiveDate;
use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::table::Table;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub date: Option<NaiveDate>,
    pub imageurl: String,
}

impl Table for Project {
    const TABLE: &'static str = "projects";
    const ENTITY: &'static str = "Project";
    const COLUMNS: &'static str = "id, name, location, date, imageurl";
}

/// DTO for creating a new project. `date` is only settable through updates.
///
/// Omitted fields are stored as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProject {
    pub name: String,
    pub location: String,
    pub imageurl: String,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub location: Option<String>,
    pub date: Option<NaiveDate>,
    pub imageurl: Option<String>,
}
