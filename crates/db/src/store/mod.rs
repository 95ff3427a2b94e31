//! The injectable persistence accessor.
//!
//! Service operations talk to an `Arc<dyn Store>` built once at startup.
//! [`PgStore`] delegates to the Postgres repositories; [`MemoryStore`] keeps
//! the same tables and constraints in process for tests and local runs.

mod memory;
mod postgres;

use async_trait::async_trait;
use biztime_core::error::CoreError;
use biztime_core::types::{Date, DbId};

use crate::models::company::{Company, CompanyIndustryRow, UpdateCompany};
use crate::models::industry::{CompanyIndustry, CreateIndustry, Industry, IndustryCompanyRow};
use crate::models::invoice::{CreateInvoice, Invoice, InvoiceCompanyRow, UpdateInvoice};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failure raised by a [`Store`] call. Every variant is a fault from the
/// caller's point of view; absence is reported through `Option`/`bool`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Duplicate key violates unique constraint: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Fault(err.to_string())
    }
}

/// Row-level access to companies, invoices, industries, and their links.
#[async_trait]
pub trait Store: Send + Sync {
    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Release underlying resources. Called once at shutdown.
    async fn close(&self);

    // --- companies ---

    async fn list_companies(&self) -> Result<Vec<Company>, StoreError>;

    async fn find_company(&self, code: &str) -> Result<Option<Company>, StoreError>;

    /// Left-join rows of a company and its industries; empty if absent.
    async fn company_industry_rows(&self, code: &str)
        -> Result<Vec<CompanyIndustryRow>, StoreError>;

    async fn invoices_for_company(&self, code: &str) -> Result<Vec<Invoice>, StoreError>;

    async fn insert_company(&self, company: &Company) -> Result<Company, StoreError>;

    async fn update_company(
        &self,
        code: &str,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, StoreError>;

    async fn delete_company(&self, code: &str) -> Result<bool, StoreError>;

    // --- invoices ---

    /// All invoices ordered by id.
    async fn list_invoices(&self) -> Result<Vec<Invoice>, StoreError>;

    async fn find_invoice(&self, id: DbId) -> Result<Option<Invoice>, StoreError>;

    /// Inner-join row of an invoice and its company.
    async fn invoice_with_company(&self, id: DbId)
        -> Result<Option<InvoiceCompanyRow>, StoreError>;

    async fn insert_invoice(&self, input: &CreateInvoice) -> Result<Invoice, StoreError>;

    /// Write `amt`/`paid` and the `paid_date` given by
    /// [`biztime_core::payment::next_paid_date`], atomically with the read
    /// of the current `paid_date`.
    async fn update_invoice_payment(
        &self,
        id: DbId,
        input: &UpdateInvoice,
        today: Date,
    ) -> Result<Option<Invoice>, StoreError>;

    async fn delete_invoice(&self, id: DbId) -> Result<bool, StoreError>;

    // --- industries ---

    async fn list_industries(&self) -> Result<Vec<Industry>, StoreError>;

    /// Left-join rows of an industry and its companies; empty if absent.
    async fn industry_company_rows(&self, code: &str)
        -> Result<Vec<IndustryCompanyRow>, StoreError>;

    async fn find_industry(&self, code: &str) -> Result<Option<Industry>, StoreError>;

    async fn insert_industry(&self, input: &CreateIndustry) -> Result<Industry, StoreError>;

    /// Insert a join row. An existing identical link is left in place.
    async fn link_company(
        &self,
        comp_code: &str,
        ind_code: &str,
    ) -> Result<CompanyIndustry, StoreError>;
}
