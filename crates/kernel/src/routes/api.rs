//! JSON views of the module registry.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::module::{NavigationNode, ResolvedPath, RouteEntry};
use crate::state::AppState;

/// Create the registry API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/navigation", get(navigation))
        .route("/api/routes", get(routes))
        .route("/api/resolve", get(resolve))
}

/// Sidebar navigation for the viewing user.
async fn navigation(State(state): State<AppState>) -> Json<Vec<NavigationNode>> {
    Json(state.navigation())
}

/// Route table in precedence order, limited to routes the viewer may open.
async fn routes(State(state): State<AppState>) -> Json<Vec<RouteEntry>> {
    let entries = state
        .routes()
        .entries()
        .iter()
        .filter(|entry| state.can_view(&entry.module_id))
        .cloned()
        .collect();
    Json(entries)
}

#[derive(Debug, Deserialize)]
struct ResolveQuery {
    path: String,
}

/// Resolve a path to its module or submodule, active or not.
async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> AppResult<Json<ResolvedPath>> {
    if !query.path.starts_with('/') {
        return Err(AppError::BadRequest("path must start with '/'".to_string()));
    }

    let resolved = state
        .registry()
        .resolve_by_path(&query.path)
        .map(|hit| hit.summary())
        .ok_or(AppError::NotFound)?;

    debug!(path = %query.path, ?resolved, "resolved path");
    Ok(Json(resolved))
}
