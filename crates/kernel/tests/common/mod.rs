#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Builds the REAL kernel router over a registry supplied by each test,
//! with the built-in templates, and drives it with `oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use modulo_kernel::theme::ThemeEngine;
use modulo_kernel::{AppState, Config, ModuleRegistry, catalog, routes};

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Test application serving the built-in module catalog.
    pub fn new() -> Self {
        let mut registry = ModuleRegistry::new();
        catalog::register_all_modules(&mut registry);
        Self::with_registry(registry)
    }

    /// Test application serving the given registry with default config.
    pub fn with_registry(registry: ModuleRegistry) -> Self {
        Self::with_config(&Config::default(), registry)
    }

    /// Test application with explicit config.
    pub fn with_config(config: &Config, registry: ModuleRegistry) -> Self {
        let theme = ThemeEngine::builtin().expect("built-in templates parse");
        let state = AppState::with_theme(config, registry, theme);

        // Must match main.rs, minus the CORS and trace layers
        let router = routes::router().with_state(state.clone());

        Self { router, state }
    }

    /// Send a request to the app.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET a path and return status plus body text.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .request(Request::get(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        (status, body_string(response).await)
    }

    /// GET a path and parse the body as JSON.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        let json = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("invalid JSON from {uri}: {e}\n{body}"));
        (status, json)
    }
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
