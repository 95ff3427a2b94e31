//! Invoice operations, including the paid-date transition.

use biztime_core::error::{CoreError, CoreResult};
use biztime_core::types::{self, Date, DbId};
use biztime_db::models::invoice::{CreateInvoice, Invoice, InvoiceDetail, UpdateInvoice};
use biztime_db::Store;

const ENTITY: &str = "invoice";

/// All invoices ordered by id.
pub async fn list(store: &dyn Store) -> CoreResult<Vec<Invoice>> {
    Ok(store.list_invoices().await?)
}

/// An invoice with its company nested.
///
/// An invoice whose company row is gone is not reachable here.
pub async fn get(store: &dyn Store, id: DbId) -> CoreResult<InvoiceDetail> {
    store
        .invoice_with_company(id)
        .await?
        .map(InvoiceDetail::from)
        .ok_or_else(|| CoreError::not_found_id(ENTITY, id))
}

/// Create an unpaid invoice. An unknown `comp_code` is a fault.
pub async fn create(store: &dyn Store, input: CreateInvoice) -> CoreResult<Invoice> {
    let invoice = store.insert_invoice(&input).await?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "Invoice created");
    Ok(invoice)
}

/// Succeed only if an invoice with `id` exists.
pub async fn ensure_exists(store: &dyn Store, id: DbId) -> CoreResult<()> {
    match store.find_invoice(id).await? {
        Some(_) => Ok(()),
        None => Err(CoreError::not_found_id(ENTITY, id)),
    }
}

/// Update amount and payment state as of today.
pub async fn update(store: &dyn Store, id: DbId, input: UpdateInvoice) -> CoreResult<Invoice> {
    update_as_of(store, id, input, types::today()).await
}

/// Update amount and payment state, stamping `today` if this is the first
/// time the invoice is marked paid.
pub async fn update_as_of(
    store: &dyn Store,
    id: DbId,
    input: UpdateInvoice,
    today: Date,
) -> CoreResult<Invoice> {
    let invoice = store
        .update_invoice_payment(id, &input, today)
        .await?
        .ok_or_else(|| CoreError::not_found_id(ENTITY, id))?;
    tracing::debug!(
        id,
        paid = invoice.paid,
        paid_date = ?invoice.paid_date,
        "Invoice payment updated"
    );
    Ok(invoice)
}

/// Delete an invoice by id.
pub async fn delete(store: &dyn Store, id: DbId) -> CoreResult<()> {
    if store.delete_invoice(id).await? {
        tracing::info!(id, "Invoice deleted");
        Ok(())
    } else {
        Err(CoreError::not_found_id(ENTITY, id))
    }
}
