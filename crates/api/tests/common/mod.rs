//! Shared harness for the API integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderName, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use nrl_api::config::ServerConfig;
use nrl_api::routes;
use nrl_api::state::AppState;
use nrl_github::{Ledger, LedgerError};

/// In-memory [`Ledger`] double that records every appended line.
///
/// With `fail` set, every append returns a conflict-shaped
/// [`LedgerError::Api`] without recording anything, mimicking a stale
/// revision token rejection.
#[derive(Default)]
pub struct RecordingLedger {
    pub lines: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingLedger {
    pub fn failing() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Snapshot of the lines appended so far.
    pub fn appended(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[async_trait]
impl Ledger for RecordingLedger {
    async fn append_line(&self, line: &str) -> Result<(), LedgerError> {
        if self.fail {
            return Err(LedgerError::Api {
                status: 409,
                body: "merge conflict on refs/heads/main".to_string(),
            });
        }
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// The static directory points at the workspace-root `static/` so the
/// page routes serve the real landing assets.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: "../../static".to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given ledger (or none, to exercise the unconfigured path).
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(ledger: Option<Arc<dyn Ledger>>) -> Router {
    let config = test_config();

    let state = AppState {
        config: Arc::new(config.clone()),
        ledger,
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::pages::router(&config))
        .merge(routes::health::router())
        .merge(routes::orders::router())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a raw body through the router.
pub async fn post(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}
