//! Handlers for the `/companies` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biztime_db::models::company::{Company, CompanyDetail, CreateCompany, UpdateCompany};

use crate::error::AppResult;
use crate::response::{CompaniesResponse, CompanyResponse, StatusResponse};
use crate::services::companies;
use crate::state::AppState;

/// GET /companies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CompaniesResponse<Vec<Company>>>> {
    let companies = companies::list(state.store.as_ref()).await?;
    Ok(Json(CompaniesResponse { companies }))
}

/// GET /companies/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<CompanyDetail>> {
    let company = companies::get(state.store.as_ref(), &code).await?;
    Ok(Json(company))
}

/// POST /companies
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateCompany>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CompanyResponse<Company>>)> {
    let Json(input) = body?;
    let company = companies::create(state.store.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PUT /companies/{code}
///
/// An unknown code is a 404 even when the body is also unreadable.
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    body: Result<Json<UpdateCompany>, JsonRejection>,
) -> AppResult<Json<CompanyResponse<Company>>> {
    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            companies::ensure_exists(state.store.as_ref(), &code).await?;
            return Err(rejection.into());
        }
    };
    let company = companies::update(state.store.as_ref(), &code, input).await?;
    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/{code}
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    companies::delete(state.store.as_ref(), &code).await?;
    Ok(Json(StatusResponse::deleted()))
}
