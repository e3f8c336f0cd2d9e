//! Page shell: sidebar plus the content of the module at the request path.

use std::borrow::Cow;

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use crate::catalog::html_escape;
use crate::error::AppResult;
use crate::state::AppState;

/// Render the module registered at the request path.
///
/// Installed as the router fallback so every path not claimed by another
/// route is looked up in the route table. Unknown paths and modules the
/// viewer may not open still get the sidebar.
pub async fn module_page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> AppResult<Response> {
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    // Registered paths are matched in decoded form
    let path = match urlencoding::decode(uri.path()) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!(path = uri.path(), error = %e, "request path is not valid UTF-8");
            Cow::Borrowed(uri.path())
        }
    };
    let path: &str = &path;

    let route = state.routes().match_path(path);
    let (status, title, content) = match route {
        Some(route) if state.can_view(&route.module_id) => {
            (StatusCode::OK, route.name.clone(), route.view.render())
        }
        Some(route) => {
            debug!(path, module = %route.module_id, "module not open to viewer");
            (
                StatusCode::FORBIDDEN,
                "Acceso denegado".to_string(),
                notice("Acceso denegado", "No tienes permiso para ver este módulo"),
            )
        }
        None => {
            debug!(path, "no module registered at path");
            (
                StatusCode::NOT_FOUND,
                "Módulo no encontrado".to_string(),
                notice("Módulo no encontrado", "Selecciona un módulo"),
            )
        }
    };

    let navigation = state.navigation();
    let active_parent = navigation
        .iter()
        .find(|node| node.path != path && node.contains_path(path))
        .map_or("", |node| node.id.as_str());

    let mut context = tera::Context::new();
    context.insert("site_name", state.site_name());
    context.insert("navigation", &navigation);
    context.insert("active_parent", active_parent);
    context.insert("found", &status.is_success());

    // Only served routes pick template suggestions; misses and denials use the base layout
    let route_path = route
        .filter(|_| status.is_success())
        .map(|route| route.path.as_str());

    let html = state
        .theme()
        .render_page(route_path, path, &title, &content, &mut context)?;

    Ok((status, Html(html)).into_response())
}

fn notice(heading: &str, hint: &str) -> String {
    format!(
        r#"<div class="notice"><h1>{}</h1><p>{}</p></div>"#,
        html_escape(heading),
        html_escape(hint)
    )
}
