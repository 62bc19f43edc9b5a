#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use loanbook::application::loan_service::LoanService;
use loanbook::infrastructure::in_memory::InMemoryLoanStore;
use loanbook::interfaces::http::{AppState, router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

pub fn service() -> LoanService {
    LoanService::new(Arc::new(InMemoryLoanStore::new()))
}

pub fn app() -> Router {
    app_with_prefix("")
}

pub fn app_with_prefix(prefix: &str) -> Router {
    router(AppState::new(service(), prefix))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Sends one request through the router. Non-JSON bodies come back as a
/// JSON string, empty bodies as `null`.
pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn loan_body(name: &str, funding: f64, repayment: f64) -> Value {
    json!({
        "borrowerName": name,
        "fundingAmount": funding,
        "repaymentAmount": repayment,
    })
}

/// Creates a loan through the API and returns the created record.
pub async fn create(app: &Router, name: &str, funding: f64, repayment: f64) -> Value {
    let response = send(app, post_json("/loans", &loan_body(name, funding, repayment))).await;
    assert_eq!(response.status, StatusCode::CREATED, "create failed: {}", response.body);
    response.body
}
