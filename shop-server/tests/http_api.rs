mod common;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::memory_state;
use shop_server::api::build_app;

async fn app() -> Router {
    build_app(memory_state().await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, uri: &str, body: Value) -> String {
    let (status, body) = send_json(app, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn root_says_hello() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hello World");
}

#[tokio::test]
async fn customer_round_trip() {
    let app = app().await;
    let id = create(
        &app,
        "/customer",
        json!({ "firstname": "Nic", "lastname": "Raboy", "creditcards": [] }),
    )
    .await;

    let (status, body) = send_json(&app, Method::GET, &format!("/customer/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": id,
            "type": "customer",
            "firstname": "Nic",
            "lastname": "Raboy",
            "creditcards": []
        })
    );

    let (status, body) = send_json(&app, Method::GET, "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], json!(id));
}

#[tokio::test]
async fn empty_lists_are_empty_arrays() {
    let app = app().await;
    assert_eq!(send_json(&app, Method::GET, "/customers", None).await.1, json!([]));
    assert_eq!(send_json(&app, Method::GET, "/products", None).await.1, json!([]));
}

#[tokio::test]
async fn credit_cards_are_echoed_and_listed() {
    let app = app().await;
    let id = create(&app, "/customer", json!({ "firstname": "A", "lastname": "B" })).await;
    let card = json!({ "brand": "Visa", "number": "4111", "expiration": "01/29" });

    let uri = format!("/customer/creditcard/{id}");
    let (status, body) = send_json(&app, Method::PUT, &uri, Some(card.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, card);

    let (status, body) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([card]));
}

#[tokio::test]
async fn order_creates_a_receipt_listed_under_the_customer() {
    let app = app().await;
    let customer = create(&app, "/customer", json!({ "firstname": "A", "lastname": "B" })).await;
    let pen = create(&app, "/product", json!({ "name": "Pen", "price": 10.0 })).await;
    let ink = create(&app, "/product", json!({ "name": "Ink", "price": 15.5 })).await;

    let (status, products) = send_json(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products.as_array().unwrap().len(), 2);

    let receipt_id = create(
        &app,
        "/order",
        json!({
            "customer": { "id": customer },
            "products": [{ "id": pen }, { "id": ink }]
        }),
    )
    .await;

    let (status, body) =
        send_json(&app, Method::GET, &format!("/customer/orders/{customer}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let receipts = body.as_array().unwrap();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0]["id"], json!(receipt_id));
    assert_eq!(receipts[0]["type"], json!("receipt"));
    assert_eq!(receipts[0]["total"], json!(25.5));
    assert_eq!(receipts[0]["customer"]["id"], json!(customer));
    assert_eq!(receipts[0]["products"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn failures_are_flat_500_with_a_message() {
    let app = app().await;

    let (status, body) = send_json(&app, Method::GET, "/customer/missing", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().starts_with("Not found"), "{body}");

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/order",
        Some(json!({ "customer": { "id": "missing" }, "products": [{ "id": "x" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/customer/creditcard/missing",
        Some(json!({ "brand": "Visa", "number": "1", "expiration": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn malformed_body_is_a_flat_500() {
    let app = app().await;
    let (status, body) = send_json(&app, Method::POST, "/product", Some(json!({ "name": 5 }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = app().await;
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
