//! Repository for the `companies` table.

use sqlx::PgPool;

use crate::models::company::{Company, CompanyIndustryRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "code, name, description";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// List all companies in the table's natural order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }

    /// Find a company by code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE code = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the company joined with its industries.
    ///
    /// One row per linked industry, or a single row with a null `industry`
    /// when none are linked. Empty when the company does not exist.
    pub async fn find_with_industries(
        pool: &PgPool,
        code: &str,
    ) -> Result<Vec<CompanyIndustryRow>, sqlx::Error> {
        sqlx::query_as::<_, CompanyIndustryRow>(
            "SELECT c.code, c.name, c.description, i.industry \
             FROM companies AS c \
             LEFT JOIN company_industries AS ci ON c.code = ci.comp_code \
             LEFT JOIN industries AS i ON ci.ind_code = i.code \
             WHERE c.code = $1 \
             ORDER BY i.code",
        )
        .bind(code)
        .fetch_all(pool)
        .await
    }

    /// Insert a new company, returning the created row.
    pub async fn create(pool: &PgPool, company: &Company) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (code, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&company.code)
            .bind(&company.name)
            .bind(&company.description)
            .fetch_one(pool)
            .await
    }

    /// Replace a company's name and description.
    ///
    /// Returns `None` if no row with the given `code` exists.
    pub async fn update(
        pool: &PgPool,
        code: &str,
        name: &str,
        description: &str,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET name = $2, description = $3
             WHERE code = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(code)
            .bind(name)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company by code. Returns `true` if a row was removed.
    ///
    /// Invoices and industry links cascade.
    pub async fn delete(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
