//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Queries whose shape is the same
//! for every table live on [`TableRepo`].

pub mod company_repo;
pub mod message_repo;
pub mod project_repo;
pub mod table_repo;

pub use company_repo::CompanyRepo;
pub use message_repo::MessageRepo;
pub use project_repo::ProjectRepo;
pub use table_repo::TableRepo;
