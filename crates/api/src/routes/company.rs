//! Route definitions for the `/companies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::company;
use crate::state::AppState;

/// Routes mounted at `/companies`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /{code}      -> get_by_code
/// PUT    /{code}      -> update
/// DELETE /{code}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(company::list).post(company::create))
        .route(
            "/{code}",
            get(company::get_by_code)
                .put(company::update)
                .delete(company::delete),
        )
}
