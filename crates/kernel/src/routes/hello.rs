//! Backend connectivity probe used by the front-end "test backend" button.

use axum::extract::OriginalUri;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Probe response.
#[derive(Debug, Serialize)]
struct HelloResponse {
    message: &'static str,
    /// RFC 3339 timestamp of the response.
    timestamp: String,
    path: String,
}

async fn hello(OriginalUri(uri): OriginalUri) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "¡Hola desde el backend!",
        timestamp: Utc::now().to_rfc3339(),
        path: uri.path().to_string(),
    })
}

/// Create the probe router.
pub fn router() -> Router<AppState> {
    Router::new().route("/hello", get(hello))
}
