//! HTTP-level integration tests for the `/invoices` endpoints.

mod common;

use axum::http::{Method, StatusCode};
use biztime_db::MemoryStore;
use common::{body_json, delete, get, post_json, put_json, seed_ixl, send_raw};
use serde_json::json;

/// Seed IXL with one 100.00 invoice and return the invoice id.
async fn seed_invoice(app: &axum::Router) -> i64 {
    seed_ixl(app).await;
    let response = post_json(
        app.clone(),
        "/invoices",
        json!({"comp_code": "ixl", "amt": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["invoice"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn list_invoices() {
    let app = common::build_test_app(MemoryStore::new());
    let id = seed_invoice(&app).await;

    let response = get(app, "/invoices").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let invoices = json["invoices"].as_array().unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0]["id"], id);
    assert_eq!(invoices[0]["comp_code"], "ixl");
    assert_eq!(invoices[0]["amt"], 100.0);
    assert_eq!(invoices[0]["paid"], false);
    assert!(invoices[0]["add_date"].is_string());
    assert!(invoices[0]["paid_date"].is_null());
}

#[tokio::test]
async fn list_invoices_is_ordered_by_id() {
    let app = common::build_test_app(MemoryStore::new());
    seed_ixl(&app).await;
    for amt in [300, 100, 200] {
        post_json(
            app.clone(),
            "/invoices",
            json!({"comp_code": "ixl", "amt": amt}),
        )
        .await;
    }

    let json = body_json(get(app, "/invoices").await).await;
    let ids: Vec<i64> = json["invoices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|inv| inv["id"].as_i64().unwrap())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn get_invoice_nests_company() {
    let app = common::build_test_app(MemoryStore::new());
    let id = seed_invoice(&app).await;

    let response = get(app, &format!("/invoices/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let invoice = &json["invoice"];
    assert_eq!(invoice["id"], id);
    assert_eq!(
        invoice["company"],
        json!({"code": "ixl", "name": "IXL", "description": "educational"})
    );
    assert_eq!(invoice["amt"], 100.0);
    assert_eq!(invoice["paid"], false);
    assert!(invoice["add_date"].is_string());
    assert!(invoice["paid_date"].is_null());
    assert!(invoice.get("comp_code").is_none());
}

#[tokio::test]
async fn get_missing_invoice_returns_404() {
    let app = common::build_test_app(MemoryStore::new());
    let response = get(app, "/invoices/000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_invoice_id_is_a_server_fault() {
    let app = common::build_test_app(MemoryStore::new());
    let response = get(app, "/invoices/abc").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn create_invoice() {
    let app = common::build_test_app(MemoryStore::new());
    seed_ixl(&app).await;

    let response = post_json(
        app,
        "/invoices",
        json!({"comp_code": "ixl", "amt": 200}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let invoice = &json["invoice"];
    assert!(invoice["id"].is_number());
    assert_eq!(invoice["comp_code"], "ixl");
    assert_eq!(invoice["amt"], 200.0);
    assert_eq!(invoice["paid"], false);
    assert!(invoice["add_date"].is_string());
    assert!(invoice["paid_date"].is_null());
}

#[tokio::test]
async fn create_invoice_for_unknown_company_is_a_server_fault() {
    let app = common::build_test_app(MemoryStore::new());
    let response = post_json(
        app,
        "/invoices",
        json!({"comp_code": "nope", "amt": 200}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn create_invoice_with_malformed_json_is_a_server_fault() {
    let app = common::build_test_app(MemoryStore::new());
    let response = send_raw(app, Method::POST, "/invoices", "{\"comp_code\": ").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn paying_invoice_sets_paid_date() {
    let app = common::build_test_app(MemoryStore::new());
    let id = seed_invoice(&app).await;

    let response = put_json(
        app,
        &format!("/invoices/{id}"),
        json!({"amt": 500, "paid": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let invoice = &json["invoice"];
    assert_eq!(invoice["id"], id);
    assert_eq!(invoice["amt"], 500.0);
    assert_eq!(invoice["paid"], true);
    assert!(invoice["paid_date"].is_string());
}

#[tokio::test]
async fn paying_twice_keeps_first_paid_date() {
    let app = common::build_test_app(MemoryStore::new());
    let id = seed_invoice(&app).await;
    let uri = format!("/invoices/{id}");

    let first = body_json(put_json(app.clone(), &uri, json!({"amt": 500, "paid": true})).await).await;
    let second = body_json(put_json(app, &uri, json!({"amt": 600, "paid": true})).await).await;

    assert_eq!(first["invoice"]["paid_date"], second["invoice"]["paid_date"]);
    assert_eq!(second["invoice"]["amt"], 600.0);
}

#[tokio::test]
async fn unpaying_clears_paid_date() {
    let app = common::build_test_app(MemoryStore::new());
    let id = seed_invoice(&app).await;
    let uri = format!("/invoices/{id}");

    put_json(app.clone(), &uri, json!({"amt": 500, "paid": true})).await;
    let response = put_json(app, &uri, json!({"amt": 500, "paid": false})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["invoice"]["paid"], false);
    assert!(json["invoice"]["paid_date"].is_null());
}

#[tokio::test]
async fn update_missing_invoice_returns_404() {
    let app = common::build_test_app(MemoryStore::new());
    let response = put_json(app, "/invoices/42", json!({"amt": 500, "paid": true})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_invoice_with_partial_body_returns_404() {
    let app = common::build_test_app(MemoryStore::new());
    let response = put_json(app, "/invoices/000", json!({"amt": 1000})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "There is no invoice with id '0'");
}

#[tokio::test]
async fn update_missing_invoice_with_malformed_body_returns_404() {
    let app = common::build_test_app(MemoryStore::new());
    let response = send_raw(app, Method::PUT, "/invoices/42", "{not json").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_invoice_missing_fields_is_a_server_fault() {
    let app = common::build_test_app(MemoryStore::new());
    let id = seed_invoice(&app).await;
    let response = put_json(app, &format!("/invoices/{id}"), json!({"amt": 500})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn delete_invoice() {
    let app = common::build_test_app(MemoryStore::new());
    let id = seed_invoice(&app).await;
    let uri = format!("/invoices/{id}");

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "deleted"}));

    let response = get(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
