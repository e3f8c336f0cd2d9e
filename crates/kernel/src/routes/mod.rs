//! HTTP route handlers.

pub mod api;
pub mod health;
pub mod hello;
pub mod shell;

use axum::Router;

use crate::state::AppState;

/// Assemble every route. Paths not claimed here fall through to the
/// module page shell.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(hello::router())
        .merge(api::router())
        .fallback(shell::module_page)
}
