//! Invoice entity model, DTOs, and the invoice detail mapper.

use biztime_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::company::Company;

/// A row from the `invoices` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
}

/// Request body for creating an invoice. `paid` starts false and
/// `add_date` is the creation date.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    pub comp_code: String,
    pub amt: f64,
}

/// Request body for updating an invoice's amount and payment state.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoice {
    pub amt: f64,
    pub paid: bool,
}

/// One row of `invoices INNER JOIN companies`.
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceCompanyRow {
    pub id: DbId,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
    pub name: String,
    pub description: String,
}

/// An invoice with its owning company nested in place of `comp_code`.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetail {
    pub id: DbId,
    pub company: Company,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
}

impl From<InvoiceCompanyRow> for InvoiceDetail {
    fn from(row: InvoiceCompanyRow) -> Self {
        Self {
            id: row.id,
            company: Company {
                code: row.comp_code,
                name: row.name,
                description: row.description,
            },
            amt: row.amt,
            paid: row.paid,
            add_date: row.add_date,
            paid_date: row.paid_date,
        }
    }
}
