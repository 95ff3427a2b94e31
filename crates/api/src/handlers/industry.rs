//! Handlers for the `/industries` resource and company links.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biztime_db::models::industry::{CompanyIndustry, CreateIndustry, Industry, IndustryDetail};

use crate::error::AppResult;
use crate::response::{IndustriesResponse, IndustryResponse, ResultResponse};
use crate::services::industries;
use crate::state::AppState;

/// GET /industries
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<IndustriesResponse<Vec<Industry>>>> {
    let industries = industries::list(state.store.as_ref()).await?;
    Ok(Json(IndustriesResponse { industries }))
}

/// GET /industries/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<IndustryDetail>> {
    let industry = industries::get(state.store.as_ref(), &code).await?;
    Ok(Json(industry))
}

/// POST /industries
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateIndustry>, JsonRejection>,
) -> AppResult<(StatusCode, Json<IndustryResponse<Industry>>)> {
    let Json(input) = body?;
    let industry = industries::create(state.store.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(IndustryResponse { industry })))
}

/// POST /industries/{code}/company/{comp_code}
pub async fn link_company(
    State(state): State<AppState>,
    Path((ind_code, comp_code)): Path<(String, String)>,
) -> AppResult<(StatusCode, Json<ResultResponse<CompanyIndustry>>)> {
    let result = industries::link_company(state.store.as_ref(), &ind_code, &comp_code).await?;
    Ok((StatusCode::CREATED, Json(ResultResponse { result })))
}
