#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use folio_core::catalog::Catalog;
use folio_core::relay::{EmailRelay, RelayError, RelayMessage};
use folio_core::submission::ContactForm;
use http_body_util::BodyExt;
use tokio::sync::Notify;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Relay double: counts calls, optionally fails, optionally blocks until
/// released.
#[derive(Default)]
pub struct StubRelay {
    calls: AtomicUsize,
    fail: bool,
    gate: Option<Notify>,
}

impl StubRelay {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self {
            gate: Some(Notify::new()),
            ..Default::default()
        })
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailRelay for StubRelay {
    async fn send(&self, _message: &RelayMessage) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail {
            Err(RelayError::Rejected {
                status: 400,
                body: "The Public Key is invalid".into(),
            })
        } else {
            Ok(())
        }
    }
}

/// Build the full application router over the fixture catalog, using the
/// same middleware stack as production.
pub fn build_test_app(relay: Arc<dyn EmailRelay>) -> Router {
    build_test_app_with_form(ContactForm::new(relay))
}

/// Like [`build_test_app`], but shares a caller-held form so tests can
/// inspect it directly.
pub fn build_test_app_with_form(contact: ContactForm) -> Router {
    let config = test_config();
    let state = AppState {
        catalog: Arc::new(Catalog::fixture()),
        contact,
        relay_configured: true,
    };
    build_app_router(state, &config)
}

/// Send a GET request and return the response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

/// Send a request with an optional JSON body and return the response.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
