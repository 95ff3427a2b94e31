use async_trait::async_trait;
use biztime_core::types::{Date, DbId};

use super::{Store, StoreError};
use crate::models::company::{Company, CompanyIndustryRow, UpdateCompany};
use crate::models::industry::{CompanyIndustry, CreateIndustry, Industry, IndustryCompanyRow};
use crate::models::invoice::{CreateInvoice, Invoice, InvoiceCompanyRow, UpdateInvoice};
use crate::repositories::{CompanyRepo, IndustryRepo, InvoiceRepo};
use crate::DbPool;

/// [`Store`] backed by a PostgreSQL connection pool.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        Ok(CompanyRepo::list(&self.pool).await?)
    }

    async fn find_company(&self, code: &str) -> Result<Option<Company>, StoreError> {
        Ok(CompanyRepo::find_by_code(&self.pool, code).await?)
    }

    async fn company_industry_rows(
        &self,
        code: &str,
    ) -> Result<Vec<CompanyIndustryRow>, StoreError> {
        Ok(CompanyRepo::find_with_industries(&self.pool, code).await?)
    }

    async fn invoices_for_company(&self, code: &str) -> Result<Vec<Invoice>, StoreError> {
        Ok(InvoiceRepo::list_by_company(&self.pool, code).await?)
    }

    async fn insert_company(&self, company: &Company) -> Result<Company, StoreError> {
        Ok(CompanyRepo::create(&self.pool, company).await?)
    }

    async fn update_company(
        &self,
        code: &str,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, StoreError> {
        Ok(CompanyRepo::update(&self.pool, code, &input.name, &input.description).await?)
    }

    async fn delete_company(&self, code: &str) -> Result<bool, StoreError> {
        Ok(CompanyRepo::delete(&self.pool, code).await?)
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>, StoreError> {
        Ok(InvoiceRepo::list(&self.pool).await?)
    }

    async fn find_invoice(&self, id: DbId) -> Result<Option<Invoice>, StoreError> {
        Ok(InvoiceRepo::find_by_id(&self.pool, id).await?)
    }

    async fn invoice_with_company(
        &self,
        id: DbId,
    ) -> Result<Option<InvoiceCompanyRow>, StoreError> {
        Ok(InvoiceRepo::find_with_company(&self.pool, id).await?)
    }

    async fn insert_invoice(&self, input: &CreateInvoice) -> Result<Invoice, StoreError> {
        Ok(InvoiceRepo::create(&self.pool, &input.comp_code, input.amt).await?)
    }

    async fn update_invoice_payment(
        &self,
        id: DbId,
        input: &UpdateInvoice,
        today: Date,
    ) -> Result<Option<Invoice>, StoreError> {
        Ok(InvoiceRepo::update_payment(&self.pool, id, input, today).await?)
    }

    async fn delete_invoice(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(InvoiceRepo::delete(&self.pool, id).await?)
    }

    async fn list_industries(&self) -> Result<Vec<Industry>, StoreError> {
        Ok(IndustryRepo::list(&self.pool).await?)
    }

    async fn industry_company_rows(
        &self,
        code: &str,
    ) -> Result<Vec<IndustryCompanyRow>, StoreError> {
        Ok(IndustryRepo::find_with_companies(&self.pool, code).await?)
    }

    async fn find_industry(&self, code: &str) -> Result<Option<Industry>, StoreError> {
        Ok(IndustryRepo::find_by_code(&self.pool, code).await?)
    }

    async fn insert_industry(&self, input: &CreateIndustry) -> Result<Industry, StoreError> {
        Ok(IndustryRepo::create(&self.pool, input).await?)
    }

    async fn link_company(
        &self,
        comp_code: &str,
        ind_code: &str,
    ) -> Result<CompanyIndustry, StoreError> {
        Ok(IndustryRepo::link_company(&self.pool, comp_code, ind_code).await?)
    }
}
