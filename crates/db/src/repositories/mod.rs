//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod company_repo;
pub mod industry_repo;
pub mod invoice_repo;

pub use company_repo::CompanyRepo;
pub use industry_repo::IndustryRepo;
pub use invoice_repo::InvoiceRepo;
