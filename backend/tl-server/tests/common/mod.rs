#![allow(dead_code)]

//! Test infrastructure for tl-server API tests

use tl_config::SessionConfig;
use tl_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const PASSWORD: &str = "correct-horse";

/// AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = tl_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, SessionConfig::default())
}

pub async fn create_test_app() -> (Router, AppState) {
    let state = create_test_app_state().await;
    (build_router(state.clone()), state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    /// `name=value` part of the Set-Cookie header, ready for a Cookie header
    pub fn cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

pub async fn register(app: &Router, username: &str) -> TestResponse {
    send(
        app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(json!({ "username": username, "password": PASSWORD })),
    )
    .await
}

/// Register and log in; returns the cookie to send on later requests
pub async fn register_and_login(app: &Router, username: &str) -> String {
    let registered = register(app, username).await;
    assert_eq!(registered.status, StatusCode::CREATED);

    login(app, username).await
}

/// Log an existing user in; returns the new session cookie
pub async fn login(app: &Router, username: &str) -> String {
    let logged_in = send(
        app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": username, "password": PASSWORD })),
    )
    .await;
    assert_eq!(logged_in.status, StatusCode::OK);

    logged_in.cookie().expect("login must set a cookie")
}

pub fn talent_body(name: &str, beauty: i32, cuteness: i32, talent: i32) -> Value {
    json!({
        "name": name,
        "beauty": beauty,
        "cuteness": cuteness,
        "talent": talent,
    })
}

/// Create a talent and return its id
pub async fn create_talent(app: &Router, cookie: &str, name: &str) -> i64 {
    let response = send(
        app,
        "POST",
        "/api/v1/talents",
        Some(cookie),
        Some(talent_body(name, 5, 5, 5)),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    response.json["talent"]["id"].as_i64().unwrap()
}
