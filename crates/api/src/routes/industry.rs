//! Route definitions for the `/industries` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::industry;
use crate::state::AppState;

/// Routes mounted at `/industries`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /{code}                          -> get_by_code
/// POST   /{code}/company/{comp_code}      -> link_company
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(industry::list).post(industry::create))
        .route("/{code}", get(industry::get_by_code))
        .route("/{code}/company/{comp_code}", post(industry::link_company))
}
