#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the page shell, health check, and backend probe.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::TestApp;
use modulo_kernel::{Config, ModuleRegistry};
use modulo_test_utils::{assert, test_module, test_submodule};

#[tokio::test]
async fn test_dashboard_at_root() {
    let app = TestApp::new();

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert::contains(&body, "<title>Dashboard | Modulo</title>");
    assert::contains(&body, "Dashboard module content");
    assert::contains(&body, r#"data-id="dashboard" class="active""#);
}

#[tokio::test]
async fn test_module_page_renders_view_and_sidebar() {
    let app = TestApp::new();

    let (status, body) = app.get("/botones").await;
    assert_eq!(status, StatusCode::OK);
    assert::contains(&body, "Variantes de Color");
    assert::contains(&body, r#"data-id="botones" class="active""#);
    assert::not_contains(&body, r#"data-id="dashboard" class="active""#);

    // Every active module is listed in the sidebar
    for id in ["botones", "dashboard", "users", "products", "settings", "documentos", "tabla"] {
        assert::contains(&body, &format!(r#"data-id="{id}""#));
    }
}

#[tokio::test]
async fn test_submodule_page_marks_child_active() {
    let app = TestApp::new();

    let (status, body) = app.get("/users/create").await;
    assert_eq!(status, StatusCode::OK);
    assert::contains(&body, "Create user submodule content");
    assert::contains(&body, r#"data-id="user-create" class="active""#);
    assert::contains(&body, r#"data-id="user-list" href="#);
}

#[tokio::test]
async fn test_unknown_path_is_not_found_with_sidebar() {
    let app = TestApp::new();

    let (status, body) = app.get("/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert::contains(&body, "Módulo no encontrado");
    assert::contains(&body, "Selecciona un módulo");
    assert::contains(&body, r#"data-id="botones""#);
    assert::not_contains(&body, r#"class="active""#);
}

#[tokio::test]
async fn test_paths_are_not_normalized() {
    let app = TestApp::new();

    let (status, _) = app.get("/users/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inactive_module_is_not_served() {
    let mut registry = ModuleRegistry::new();
    registry.register_module(test_module("on", "/on").build());
    registry.register_module(
        test_module("off", "/off")
            .inactive()
            .with_submodule(test_submodule("child", "/child"))
            .build(),
    );
    let app = TestApp::with_registry(registry);

    let (status, body) = app.get("/on").await;
    assert_eq!(status, StatusCode::OK);
    assert::contains(&body, r#"data-marker="on""#);
    assert::not_contains(&body, r#"data-id="off""#);

    assert_eq!(app.get("/off").await.0, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/off/child").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_viewer_permission_filters_sidebar_and_pages() {
    let mut registry = ModuleRegistry::new();
    registry.register_module(test_module("public", "/public").build());
    registry.register_module(
        test_module("admin", "/admin")
            .with_permissions(&["admin"])
            .with_submodule(test_submodule("audit", "/audit"))
            .build(),
    );
    let config = Config {
        viewer_permission: Some("editor".to_string()),
        ..Config::default()
    };
    let app = TestApp::with_config(&config, registry);

    let (status, body) = app.get("/public").await;
    assert_eq!(status, StatusCode::OK);
    assert::not_contains(&body, r#"data-id="admin""#);

    let (status, body) = app.get("/admin/audit").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert::contains(&body, "Acceso denegado");
    assert::not_contains(&body, r#"data-marker="audit""#);
}

#[tokio::test]
async fn test_empty_registry_renders_hint() {
    let app = TestApp::with_registry(ModuleRegistry::new());

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert::contains(&body, "No hay módulos disponibles");

    let (status, json) = app.get_json("/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "unhealthy");
}

#[tokio::test]
async fn test_non_get_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            Request::builder()
                .method(Method::POST)
                .uri("/botones")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let (status, json) = app.get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["modules"], 7);
    assert_eq!(json["routes"], 9);
}

#[tokio::test]
async fn test_hello_probe() {
    let app = TestApp::new();

    let (status, json) = app.get_json("/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert::has_key(&json, "message");
    assert_eq!(json["path"], "/hello");

    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_unknown_paths_do_not_grow_template_cache() {
    let app = TestApp::new();

    for i in 0..200 {
        let (status, _) = app.get(&format!("/junk/{i}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    assert_eq!(app.state.theme().cache_len(), 0);

    // Served pages cache one resolution per route, however often requested
    for _ in 0..3 {
        app.get("/tabla").await;
        app.get("/users/list").await;
    }
    assert_eq!(app.state.theme().cache_len(), 2);
}

#[tokio::test]
async fn test_percent_encoded_path_is_served() {
    let mut registry = ModuleRegistry::new();
    registry.register_module(test_module("conf", "/configuración").build());
    let app = TestApp::with_registry(registry);

    let (status, body) = app.get("/configuraci%C3%B3n").await;
    assert_eq!(status, StatusCode::OK);
    assert::contains(&body, r#"data-marker="conf""#);
    assert::contains(&body, r#"data-id="conf" class="active""#);

    let (status, json) = app.get_json("/api/resolve?path=/configuraci%C3%B3n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "conf");
}

#[tokio::test]
async fn test_submodule_page_opens_parent() {
    let app = TestApp::new();

    let (_, body) = app.get("/users/list").await;
    assert::contains(&body, r#"data-id="users" class="open""#);
    assert::contains(&body, r#"data-id="user-list" class="active""#);

    let (_, body) = app.get("/users").await;
    assert::contains(&body, r#"data-id="users" class="active""#);
    assert::not_contains(&body, r#"class="open""#);
}
