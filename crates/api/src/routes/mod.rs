pub mod company;
pub mod health;
pub mod industry;
pub mod invoice;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /companies                                       list, create
/// /companies/{code}                                get, update, delete
///
/// /invoices                                        list, create
/// /invoices/{id}                                   get, update, delete
///
/// /industries                                      list, create
/// /industries/{code}                               get
/// /industries/{code}/company/{comp_code}           link company (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/companies", company::router())
        .nest("/invoices", invoice::router())
        .nest("/industries", industry::router())
}
