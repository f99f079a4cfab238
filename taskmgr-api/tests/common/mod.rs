/// Common test utilities for integration tests
///
/// Builds the router over a fresh in-memory store and wraps request/response
/// plumbing so tests read as plain HTTP exchanges.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use taskmgr_api::app::{build_router, AppState};
use taskmgr_api::config::Config;
use tower::Service as _;

/// Test context holding a router over an empty store
pub struct TestContext {
    pub app: axum::Router,
}

impl TestContext {
    pub fn new() -> Self {
        let state = AppState::in_memory(Config::default());
        Self {
            app: build_router(state),
        }
    }

    /// Sends a request and returns the raw response
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        self.app
            .clone()
            .call(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    /// Sends a request and returns the status with the body parsed as JSON
    /// (`Value::Null` for an empty body)
    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.send(method, uri, body).await;
        let status = response.status();
        (status, read_json(response).await)
    }

    /// Creates a task through the API and returns its id
    pub async fn create_task(&self, payload: Value) -> i64 {
        let (status, body) = self.send_json("POST", "/tasks", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body["id"].as_i64().unwrap()
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

/// A valid task payload due tomorrow
pub fn task_payload(title: &str, assigned_user_id: Option<i32>) -> Value {
    json!({
        "title": title,
        "description": format!("{} description", title),
        "dueDate": days_from_now(1),
        "priority": "Medium",
        "status": "Pending",
        "assignedUserId": assigned_user_id,
    })
}
