//! Transport-independent operations.
//!
//! Each function takes the injected [`biztime_db::Store`] and returns a
//! [`biztime_core::error::CoreResult`]: the value, `NotFound`, or `Fault`.
//! Handlers only wrap these results in response envelopes.

pub mod companies;
pub mod industries;
pub mod invoices;
