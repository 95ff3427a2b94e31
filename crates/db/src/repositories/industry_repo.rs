//! Repository for the `industries` and `company_industries` tables.

use sqlx::PgPool;

use crate::models::industry::{CompanyIndustry, CreateIndustry, Industry, IndustryCompanyRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "code, industry";

/// Provides CRUD operations for industries and their company links.
pub struct IndustryRepo;

impl IndustryRepo {
    /// List all industries.
    pub async fn list(pool: &PgPool) -> Result<Vec<Industry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM industries");
        sqlx::query_as::<_, Industry>(&query).fetch_all(pool).await
    }

    /// Find an industry by code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Industry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM industries WHERE code = $1");
        sqlx::query_as::<_, Industry>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the industry joined with its companies.
    ///
    /// One row per linked company, or a single row with a null `name` when
    /// none are linked. Empty when the industry does not exist.
    pub async fn find_with_companies(
        pool: &PgPool,
        code: &str,
    ) -> Result<Vec<IndustryCompanyRow>, sqlx::Error> {
        sqlx::query_as::<_, IndustryCompanyRow>(
            "SELECT i.code, i.industry, c.name \
             FROM industries AS i \
             LEFT JOIN company_industries AS ci ON i.code = ci.ind_code \
             LEFT JOIN companies AS c ON ci.comp_code = c.code \
             WHERE i.code = $1 \
             ORDER BY c.code",
        )
        .bind(code)
        .fetch_all(pool)
        .await
    }

    /// Insert a new industry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateIndustry) -> Result<Industry, sqlx::Error> {
        let query = format!(
            "INSERT INTO industries (code, industry)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Industry>(&query)
            .bind(&input.code)
            .bind(&input.industry)
            .fetch_one(pool)
            .await
    }

    /// Associate a company with an industry.
    ///
    /// Linking an already-linked pair is a no-op that still returns the pair.
    pub async fn link_company(
        pool: &PgPool,
        comp_code: &str,
        ind_code: &str,
    ) -> Result<CompanyIndustry, sqlx::Error> {
        sqlx::query(
            "INSERT INTO company_industries (comp_code, ind_code)
             VALUES ($1, $2)
             ON CONFLICT (comp_code, ind_code) DO NOTHING",
        )
        .bind(comp_code)
        .bind(ind_code)
        .execute(pool)
        .await?;

        Ok(CompanyIndustry {
            comp_code: comp_code.to_string(),
            ind_code: ind_code.to_string(),
        })
    }
}
