use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use biztime_core::payment::next_paid_date;
use biztime_core::types::{self, Date, DbId};

use super::{Store, StoreError};
use crate::models::company::{Company, CompanyIndustryRow, UpdateCompany};
use crate::models::industry::{CompanyIndustry, CreateIndustry, Industry, IndustryCompanyRow};
use crate::models::invoice::{CreateInvoice, Invoice, InvoiceCompanyRow, UpdateInvoice};

#[derive(Debug, Default)]
struct Tables {
    /// Insertion order is the natural order.
    companies: Vec<Company>,
    invoices: BTreeMap<DbId, Invoice>,
    last_invoice_id: DbId,
    industries: Vec<Industry>,
    links: Vec<CompanyIndustry>,
}

impl Tables {
    fn company(&self, code: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.code == code)
    }

    fn industry(&self, code: &str) -> Option<&Industry> {
        self.industries.iter().find(|i| i.code == code)
    }
}

/// In-process [`Store`] with the same keys, foreign keys, cascades, and
/// amount check as the Postgres schema.
///
/// Each call runs under a single lock acquisition, so the paid-date
/// read-and-write is atomic here too.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

fn check_amount(amt: f64) -> Result<(), StoreError> {
    if amt > 0.0 {
        Ok(())
    } else {
        Err(StoreError::CheckViolation(format!(
            "invoices_amt_check: amt must be positive, got {amt}"
        )))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }

    async fn close(&self) {}

    async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        Ok(self.read()?.companies.clone())
    }

    async fn find_company(&self, code: &str) -> Result<Option<Company>, StoreError> {
        Ok(self.read()?.company(code).cloned())
    }

    async fn company_industry_rows(
        &self,
        code: &str,
    ) -> Result<Vec<CompanyIndustryRow>, StoreError> {
        let tables = self.read()?;
        let Some(company) = tables.company(code) else {
            return Ok(Vec::new());
        };

        let mut industries: Vec<&Industry> = tables
            .links
            .iter()
            .filter(|link| link.comp_code == code)
            .filter_map(|link| tables.industry(&link.ind_code))
            .collect();
        industries.sort_by(|a, b| a.code.cmp(&b.code));

        let row = |industry: Option<String>| CompanyIndustryRow {
            code: company.code.clone(),
            name: company.name.clone(),
            description: company.description.clone(),
            industry,
        };

        if industries.is_empty() {
            return Ok(vec![row(None)]);
        }
        Ok(industries
            .into_iter()
            .map(|i| row(Some(i.industry.clone())))
            .collect())
    }

    async fn invoices_for_company(&self, code: &str) -> Result<Vec<Invoice>, StoreError> {
        Ok(self
            .read()?
            .invoices
            .values()
            .filter(|inv| inv.comp_code == code)
            .cloned()
            .collect())
    }

    async fn insert_company(&self, company: &Company) -> Result<Company, StoreError> {
        let mut tables = self.write()?;
        if tables.company(&company.code).is_some() {
            return Err(StoreError::UniqueViolation(format!(
                "companies_pkey: code '{}' already exists",
                company.code
            )));
        }
        if tables.companies.iter().any(|c| c.name == company.name) {
            return Err(StoreError::UniqueViolation(format!(
                "companies_name_key: name '{}' already exists",
                company.name
            )));
        }
        tables.companies.push(company.clone());
        Ok(company.clone())
    }

    async fn update_company(
        &self,
        code: &str,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, StoreError> {
        let mut tables = self.write()?;
        if tables
            .companies
            .iter()
            .any(|c| c.code != code && c.name == input.name)
        {
            return Err(StoreError::UniqueViolation(format!(
                "companies_name_key: name '{}' already exists",
                input.name
            )));
        }
        let Some(company) = tables.companies.iter_mut().find(|c| c.code == code) else {
            return Ok(None);
        };
        company.name = input.name.clone();
        company.description = input.description.clone();
        Ok(Some(company.clone()))
    }

    async fn delete_company(&self, code: &str) -> Result<bool, StoreError> {
        let mut tables = self.write()?;
        let before = tables.companies.len();
        tables.companies.retain(|c| c.code != code);
        if tables.companies.len() == before {
            return Ok(false);
        }
        tables.invoices.retain(|_, inv| inv.comp_code != code);
        tables.links.retain(|link| link.comp_code != code);
        Ok(true)
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>, StoreError> {
        Ok(self.read()?.invoices.values().cloned().collect())
    }

    async fn find_invoice(&self, id: DbId) -> Result<Option<Invoice>, StoreError> {
        Ok(self.read()?.invoices.get(&id).cloned())
    }

    async fn invoice_with_company(
        &self,
        id: DbId,
    ) -> Result<Option<InvoiceCompanyRow>, StoreError> {
        let tables = self.read()?;
        let row = tables.invoices.get(&id).and_then(|inv| {
            tables.company(&inv.comp_code).map(|company| InvoiceCompanyRow {
                id: inv.id,
                comp_code: inv.comp_code.clone(),
                amt: inv.amt,
                paid: inv.paid,
                add_date: inv.add_date,
                paid_date: inv.paid_date,
                name: company.name.clone(),
                description: company.description.clone(),
            })
        });
        Ok(row)
    }

    async fn insert_invoice(&self, input: &CreateInvoice) -> Result<Invoice, StoreError> {
        let mut tables = self.write()?;
        if tables.company(&input.comp_code).is_none() {
            return Err(StoreError::ForeignKeyViolation(format!(
                "invoices_comp_code_fkey: company '{}' does not exist",
                input.comp_code
            )));
        }
        check_amount(input.amt)?;

        tables.last_invoice_id += 1;
        let invoice = Invoice {
            id: tables.last_invoice_id,
            comp_code: input.comp_code.clone(),
            amt: input.amt,
            paid: false,
            add_date: types::today(),
            paid_date: None,
        };
        tables.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice)
    }

    async fn update_invoice_payment(
        &self,
        id: DbId,
        input: &UpdateInvoice,
        today: Date,
    ) -> Result<Option<Invoice>, StoreError> {
        let mut tables = self.write()?;
        let Some(invoice) = tables.invoices.get_mut(&id) else {
            return Ok(None);
        };
        check_amount(input.amt)?;

        invoice.paid_date = next_paid_date(invoice.paid_date, input.paid, today);
        invoice.amt = input.amt;
        invoice.paid = input.paid;
        Ok(Some(invoice.clone()))
    }

    async fn delete_invoice(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.write()?.invoices.remove(&id).is_some())
    }

    async fn list_industries(&self) -> Result<Vec<Industry>, StoreError> {
        Ok(self.read()?.industries.clone())
    }

    async fn industry_company_rows(
        &self,
        code: &str,
    ) -> Result<Vec<IndustryCompanyRow>, StoreError> {
        let tables = self.read()?;
        let Some(industry) = tables.industry(code) else {
            return Ok(Vec::new());
        };

        let mut companies: Vec<&Company> = tables
            .links
            .iter()
            .filter(|link| link.ind_code == code)
            .filter_map(|link| tables.company(&link.comp_code))
            .collect();
        companies.sort_by(|a, b| a.code.cmp(&b.code));

        let row = |name: Option<String>| IndustryCompanyRow {
            code: industry.code.clone(),
            industry: industry.industry.clone(),
            name,
        };

        if companies.is_empty() {
            return Ok(vec![row(None)]);
        }
        Ok(companies
            .into_iter()
            .map(|c| row(Some(c.name.clone())))
            .collect())
    }

    async fn find_industry(&self, code: &str) -> Result<Option<Industry>, StoreError> {
        Ok(self.read()?.industry(code).cloned())
    }

    async fn insert_industry(&self, input: &CreateIndustry) -> Result<Industry, StoreError> {
        let mut tables = self.write()?;
        if tables.industry(&input.code).is_some() {
            return Err(StoreError::UniqueViolation(format!(
                "industries_pkey: code '{}' already exists",
                input.code
            )));
        }
        let industry = Industry {
            code: input.code.clone(),
            industry: input.industry.clone(),
        };
        tables.industries.push(industry.clone());
        Ok(industry)
    }

    async fn link_company(
        &self,
        comp_code: &str,
        ind_code: &str,
    ) -> Result<CompanyIndustry, StoreError> {
        let mut tables = self.write()?;
        if tables.company(comp_code).is_none() {
            return Err(StoreError::ForeignKeyViolation(format!(
                "company_industries_comp_code_fkey: company '{comp_code}' does not exist"
            )));
        }
        if tables.industry(ind_code).is_none() {
            return Err(StoreError::ForeignKeyViolation(format!(
                "company_industries_ind_code_fkey: industry '{ind_code}' does not exist"
            )));
        }

        let link = CompanyIndustry {
            comp_code: comp_code.to_string(),
            ind_code: ind_code.to_string(),
        };
        if !tables.links.contains(&link) {
            tables.links.push(link.clone());
        }
        Ok(link)
    }
}
