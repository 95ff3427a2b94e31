//! Handlers for the `/invoices` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biztime_core::types::DbId;
use biztime_db::models::invoice::{CreateInvoice, Invoice, InvoiceDetail, UpdateInvoice};

use crate::error::AppResult;
use crate::response::{InvoiceResponse, InvoicesResponse, StatusResponse};
use crate::services::invoices;
use crate::state::AppState;

/// GET /invoices
pub async fn list(State(state): State<AppState>) -> AppResult<Json<InvoicesResponse<Vec<Invoice>>>> {
    let invoices = invoices::list(state.store.as_ref()).await?;
    Ok(Json(InvoicesResponse { invoices }))
}

/// GET /invoices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<InvoiceResponse<InvoiceDetail>>> {
    let Path(id) = path?;
    let invoice = invoices::get(state.store.as_ref(), id).await?;
    Ok(Json(InvoiceResponse { invoice }))
}

/// POST /invoices
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateInvoice>, JsonRejection>,
) -> AppResult<(StatusCode, Json<InvoiceResponse<Invoice>>)> {
    let Json(input) = body?;
    let invoice = invoices::create(state.store.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// PUT /invoices/{id}
///
/// An unknown id is a 404 even when the body is also unreadable.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<UpdateInvoice>, JsonRejection>,
) -> AppResult<Json<InvoiceResponse<Invoice>>> {
    let Path(id) = path?;
    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            invoices::ensure_exists(state.store.as_ref(), id).await?;
            return Err(rejection.into());
        }
    };
    let invoice = invoices::update(state.store.as_ref(), id, input).await?;
    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Path(id) = path?;
    invoices::delete(state.store.as_ref(), id).await?;
    Ok(Json(StatusResponse::deleted()))
}
