//! Industry operations and company linking.

use biztime_core::error::{CoreError, CoreResult};
use biztime_db::models::industry::{CompanyIndustry, CreateIndustry, Industry, IndustryDetail};
use biztime_db::Store;

const ENTITY: &str = "industry";

pub async fn list(store: &dyn Store) -> CoreResult<Vec<Industry>> {
    Ok(store.list_industries().await?)
}

/// An industry with the names of its companies.
pub async fn get(store: &dyn Store, code: &str) -> CoreResult<IndustryDetail> {
    let rows = store.industry_company_rows(code).await?;
    IndustryDetail::from_rows(rows).ok_or_else(|| CoreError::not_found_code(ENTITY, code))
}

pub async fn create(store: &dyn Store, input: CreateIndustry) -> CoreResult<Industry> {
    let industry = store.insert_industry(&input).await?;
    tracing::info!(code = %industry.code, "Industry created");
    Ok(industry)
}

/// Associate a company with an existing industry.
///
/// A missing industry is `NotFound`; a missing company is rejected by the
/// store as a fault. Linking the same pair twice is harmless.
pub async fn link_company(
    store: &dyn Store,
    ind_code: &str,
    comp_code: &str,
) -> CoreResult<CompanyIndustry> {
    if store.find_industry(ind_code).await?.is_none() {
        return Err(CoreError::not_found_code(ENTITY, ind_code));
    }
    let link = store.link_company(comp_code, ind_code).await?;
    tracing::info!(%ind_code, %comp_code, "Company linked to industry");
    Ok(link)
}
