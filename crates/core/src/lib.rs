//! Shared types used by every folio crate.

pub mod error;
pub mod master;
pub mod types;
