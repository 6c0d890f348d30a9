//! Route-level tests driving the full router with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    config::Config,
    error::AppError,
    integration::{mail::fake::RecordingMailer, payment::fake::FakePaymentGateway},
    router::router,
    state::AppState,
    util::token,
};
use test_utils::{builder::TestBuilder, factory};


fn app(db: &DatabaseConnection) -> Router {
    let state = AppState::new(
        db.clone(),
        Arc::new(Config::for_tests()),
        Arc::new(FakePaymentGateway::default()),
        None,
        Arc::new(RecordingMailer::default()),
    );

    router().with_state(state)
}

fn customer_token(user_id: i32) -> String {
    token::issue(&Config::for_tests().jwt_secret, user_id, "customer", 1).unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends one request through a fresh router and returns the status and parsed JSON body.
async fn send(db: &DatabaseConnection, request: Request<Body>) -> (StatusCode, Value) {
    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
