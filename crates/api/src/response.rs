//! Response envelope types for API handlers.
//!
//! Each resource wraps its payload under a resource-named key
//! (`{"companies": [...]}`, `{"invoice": {...}}`). Use these instead of
//! ad-hoc `serde_json::json!` to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// `{ "companies": [...] }`
#[derive(Debug, Serialize)]
pub struct CompaniesResponse<T: Serialize> {
    pub companies: T,
}

/// `{ "company": {...} }`
#[derive(Debug, Serialize)]
pub struct CompanyResponse<T: Serialize> {
    pub company: T,
}

/// `{ "invoices": [...] }`
#[derive(Debug, Serialize)]
pub struct InvoicesResponse<T: Serialize> {
    pub invoices: T,
}

/// `{ "invoice": {...} }`
#[derive(Debug, Serialize)]
pub struct InvoiceResponse<T: Serialize> {
    pub invoice: T,
}

/// `{ "industries": [...] }`
#[derive(Debug, Serialize)]
pub struct IndustriesResponse<T: Serialize> {
    pub industries: T,
}

/// `{ "industry": {...} }`
#[derive(Debug, Serialize)]
pub struct IndustryResponse<T: Serialize> {
    pub industry: T,
}

/// `{ "result": {...} }`, used for join-table inserts.
#[derive(Debug, Serialize)]
pub struct ResultResponse<T: Serialize> {
    pub result: T,
}

/// `{ "status": "deleted" }`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}
