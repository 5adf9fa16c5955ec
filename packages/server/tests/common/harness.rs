//! Test harness that drives the real router in-process.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use test_context::AsyncTestContext;
use tower::ServiceExt;
use triage_core::kernel::TestDependencies;
use triage_core::server::build_app;

use super::scripted_ai;

/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let (status, body) = ctx.get("/health").await;
/// }
/// ```
pub struct TestHarness {
    app: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new(TestDependencies::new().mock_ai(scripted_ai()))
    }
}

impl TestHarness {
    pub fn new(deps: TestDependencies) -> Self {
        Self {
            app: build_app(deps.into_server_deps(), &[]),
        }
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(path, &body.to_string()).await
    }

    pub async fn post_raw(&self, path: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    /// POST /api/analyze with the given messages, returning the results array.
    pub async fn analyze(&self, messages: &[&str]) -> (StatusCode, Value) {
        self.post_json("/api/analyze", &serde_json::json!({ "messages": messages }))
            .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON response body")
        };
        (status, body)
    }
}
