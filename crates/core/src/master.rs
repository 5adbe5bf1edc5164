//! Fixed field values for the master employee created alongside each company.
//!
//! The partial unique index `uq_employees_master_per_company` allows only one
//! such row per company.

pub const MASTER_FIRST_NAME: &str = "MASTER";
pub const MASTER_LAST_NAME: &str = "ADMIN";
