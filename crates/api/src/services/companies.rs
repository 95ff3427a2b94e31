//! Company operations.

use biztime_core::error::{CoreError, CoreResult};
use biztime_core::slug::company_code;
use biztime_db::models::company::{Company, CompanyDetail, CreateCompany, UpdateCompany};
use biztime_db::Store;

const ENTITY: &str = "company";

/// All companies, unfiltered.
pub async fn list(store: &dyn Store) -> CoreResult<Vec<Company>> {
    Ok(store.list_companies().await?)
}

/// A company with its invoices and industry names.
pub async fn get(store: &dyn Store, code: &str) -> CoreResult<CompanyDetail> {
    let rows = store.company_industry_rows(code).await?;
    if rows.is_empty() {
        return Err(CoreError::not_found_code(ENTITY, code));
    }
    let invoices = store.invoices_for_company(code).await?;
    CompanyDetail::from_rows(rows, invoices).ok_or_else(|| CoreError::not_found_code(ENTITY, code))
}

/// Create a company whose code is derived from its name.
///
/// A name with no ASCII letters or digits cannot produce a code and is a
/// fault, as is a code or name that already exists.
pub async fn create(store: &dyn Store, input: CreateCompany) -> CoreResult<Company> {
    let code = company_code(&input.name);
    if code.is_empty() {
        return Err(CoreError::Fault(format!(
            "company name '{}' yields an empty code",
            input.name
        )));
    }

    let company = store
        .insert_company(&Company {
            code,
            name: input.name,
            description: input.description,
        })
        .await?;
    tracing::info!(code = %company.code, "Company created");
    Ok(company)
}

/// Succeed only if a company with `code` exists.
pub async fn ensure_exists(store: &dyn Store, code: &str) -> CoreResult<()> {
    match store.find_company(code).await? {
        Some(_) => Ok(()),
        None => Err(CoreError::not_found_code(ENTITY, code)),
    }
}

/// Replace a company's name and description. The code never changes.
pub async fn update(store: &dyn Store, code: &str, input: UpdateCompany) -> CoreResult<Company> {
    store
        .update_company(code, &input)
        .await?
        .ok_or_else(|| CoreError::not_found_code(ENTITY, code))
}

/// Delete a company along with its invoices and industry links.
pub async fn delete(store: &dyn Store, code: &str) -> CoreResult<()> {
    if store.delete_company(code).await? {
        tracing::info!(%code, "Company deleted");
        Ok(())
    } else {
        Err(CoreError::not_found_code(ENTITY, code))
    }
}
