//! Company entity model, DTOs, and the company detail mapper.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::invoice::Invoice;

/// A row from the `companies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Request body for creating a company. The code is derived from `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub description: String,
}

/// Request body for updating a company. Both fields are replaced.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCompany {
    pub name: String,
    pub description: String,
}

/// One row of `companies LEFT JOIN company_industries LEFT JOIN industries`.
///
/// `industry` is `None` when the company has no linked industries.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyIndustryRow {
    pub code: String,
    pub name: String,
    pub description: String,
    pub industry: Option<String>,
}

/// A company together with its invoices and industry names.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: String,
    pub invoices: Vec<Invoice>,
    pub industries: Vec<String>,
}

impl CompanyDetail {
    /// Fold joined rows into a detail view.
    ///
    /// Returns `None` when `rows` is empty (no such company). The null
    /// industry produced by the left join for an unlinked company is skipped,
    /// so such a company gets an empty list.
    pub fn from_rows(rows: Vec<CompanyIndustryRow>, invoices: Vec<Invoice>) -> Option<Self> {
        let mut rows = rows.into_iter();
        let first = rows.next()?;

        let industries = std::iter::once(first.industry)
            .chain(rows.map(|r| r.industry))
            .flatten()
            .collect();

        Some(Self {
            code: first.code,
            name: first.name,
            description: first.description,
            invoices,
            industries,
        })
    }
}
