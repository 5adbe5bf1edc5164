//! Repository for the `companies` table.

use folio_core::master::{MASTER_FIRST_NAME, MASTER_LAST_NAME};
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany};
use crate::table::Table;

const COLUMNS: &str = Company::COLUMNS;

/// Provides company creation.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a company and its master employee within one transaction.
    ///
    /// If either insert fails the transaction is dropped uncommitted, so no
    /// company is left without a master employee.
    pub async fn create_with_master(
        pool: &PgPool,
        input: &CreateCompany,
    ) -> Result<Company, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO companies (company_name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        let company = sqlx::query_as::<_, Company>(&query)
            .bind(&input.company_name)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO employees (company_id, first_name, last_name, email, is_master, username)
             VALUES ($1, $2, $3, $4, TRUE, $5)",
        )
        .bind(company.id)
        .bind(MASTER_FIRST_NAME)
        .bind(MASTER_LAST_NAME)
        .bind(&input.email)
        .bind(&input.username)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(company)
    }
}
