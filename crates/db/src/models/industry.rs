//! Industry entity model, the company/industry join row, and the industry
//! detail mapper.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `industries` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

/// Request body for creating an industry. Stored as given.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIndustry {
    pub code: String,
    pub industry: String,
}

/// A row from the `company_industries` join table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CompanyIndustry {
    pub comp_code: String,
    pub ind_code: String,
}

/// One row of `industries LEFT JOIN company_industries LEFT JOIN companies`.
///
/// `name` is `None` when no company is linked to the industry.
#[derive(Debug, Clone, FromRow)]
pub struct IndustryCompanyRow {
    pub code: String,
    pub industry: String,
    pub name: Option<String>,
}

/// An industry with the names of its linked companies.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryDetail {
    pub code: String,
    pub industry: String,
    pub companies: Vec<String>,
}

impl IndustryDetail {
    /// Fold joined rows into a detail view. `None` when `rows` is empty.
    pub fn from_rows(rows: Vec<IndustryCompanyRow>) -> Option<Self> {
        let mut rows = rows.into_iter();
        let first = rows.next()?;

        let companies = std::iter::once(first.name)
            .chain(rows.map(|r| r.name))
            .flatten()
            .collect();

        Some(Self {
            code: first.code,
            industry: first.industry,
            companies,
        })
    }
}
