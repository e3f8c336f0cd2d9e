#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for module registration, routing, and path resolution.

use modulo_kernel::module::{ModuleRegistry, PathMatch};
use modulo_test_utils::{test_module, test_submodule};

fn route_paths(registry: &ModuleRegistry) -> Vec<String> {
    registry.build_routes().into_iter().map(|r| r.path).collect()
}

#[test]
fn test_one_record_per_id_latest_wins() {
    let mut registry = ModuleRegistry::new();
    let sequence = [
        ("a", "/a1"),
        ("b", "/b1"),
        ("a", "/a2"),
        ("c", "/c1"),
        ("b", "/b2"),
        ("a", "/a3"),
    ];
    for (id, path) in sequence {
        registry.register_module(test_module(id, path).build());
    }

    let stored: Vec<_> = registry
        .modules()
        .iter()
        .map(|m| (m.id.as_str(), m.path.as_str()))
        .collect();
    assert_eq!(stored, [("a", "/a3"), ("b", "/b2"), ("c", "/c1")]);
}

#[test]
fn test_orphan_submodule_leaves_store_unchanged() {
    let mut registry = ModuleRegistry::new();
    registry.register_module(
        test_module("a", "/a")
            .with_submodule(test_submodule("a1", "/one"))
            .build(),
    );
    let before = format!("{:?}", registry.modules());

    assert!(!registry.register_submodule("ghost", test_submodule("x", "/x").build()));

    assert_eq!(format!("{:?}", registry.modules()), before);
}

#[test]
fn test_documented_example() {
    let mut registry = ModuleRegistry::new();
    registry.register_module(test_module("a", "/a").active().build());
    registry.register_submodule("a", test_submodule("a1", "/one").build());

    assert_eq!(route_paths(&registry), ["/a", "/a/one"]);

    match registry.resolve_by_path("/a/one") {
        Some(PathMatch::SubModule { parent, submodule }) => {
            assert_eq!(parent.id, "a");
            assert_eq!(submodule.id, "a1");
        }
        other => panic!("expected submodule match, got {other:?}"),
    }
    assert!(registry.resolve_by_path("/missing").is_none());

    // Overwriting without submodules wipes a1 along with the active flag
    registry.register_module(test_module("a", "/a").inactive().build());

    assert!(registry.active_modules().is_empty());
    assert!(route_paths(&registry).is_empty());
    assert!(registry.get_submodule("a", "a1").is_none());
    assert!(registry.resolve_by_path("/a/one").is_none());
}

#[test]
fn test_inactive_parent_hides_active_submodules() {
    let mut registry = ModuleRegistry::new();
    registry.register_module(test_module("on", "/on").build());
    registry.register_module(
        test_module("off", "/off")
            .inactive()
            .with_submodule(test_submodule("child", "/child"))
            .build(),
    );

    assert_eq!(route_paths(&registry), ["/on"]);
    let nav = registry.build_navigation();
    assert_eq!(nav.len(), 1);
    assert_eq!(nav[0].id, "on");

    // The resolver does not filter on the active flag
    let hit = registry.resolve_by_path("/off/child").unwrap();
    assert_eq!(hit.module().id, "off");
}

#[test]
fn test_routes_resolve_round_trip() {
    let mut registry = ModuleRegistry::new();
    registry.register_module(
        test_module("users", "/users")
            .with_submodule(test_submodule("list", "/list"))
            .with_submodule(test_submodule("create", "/create"))
            .build(),
    );
    registry.register_module(test_module("home", "/").build());
    registry.register_module(
        test_module("reports", "/reports")
            .with_submodule(test_submodule("daily", "/daily"))
            .with_submodule(test_submodule("old", "/old").inactive())
            .build(),
    );

    let routes = registry.build_routes();
    assert_eq!(
        routes.iter().map(|r| r.path.as_str()).collect::<Vec<_>>(),
        [
            "/users",
            "/",
            "/reports",
            "/users/list",
            "/users/create",
            "/reports/daily"
        ]
    );

    for route in &routes {
        let hit = registry.resolve_by_path(&route.path).unwrap();
        assert_eq!(hit.module().id, route.module_id);
        assert_eq!(hit.submodule().map(|s| s.id.as_str()), route.submodule_id.as_deref());
        assert_eq!(hit.view().render(), route.view.render());
        assert_eq!(hit.name(), route.name);
    }
}

#[test]
fn test_navigation_mirrors_routes() {
    let mut registry = ModuleRegistry::new();
    registry.register_module(
        test_module("users", "/users")
            .named("Users")
            .with_submodule(test_submodule("list", "/list").named("User List"))
            .with_submodule(test_submodule("hidden", "/hidden").inactive())
            .build(),
    );
    registry.register_module(test_module("admin", "/admin").with_permissions(&["admin"]).build());

    let nav = registry.build_navigation();
    assert_eq!(nav.len(), 2);
    assert_eq!(nav[0].name, "Users");
    assert_eq!(nav[0].children.len(), 1);
    assert_eq!(nav[0].children[0].path, "/users/list");
    assert_eq!(nav[0].children[0].name, "User List");

    let nav_for_guest = registry.build_navigation_for("guest");
    assert_eq!(nav_for_guest.len(), 1);
    assert_eq!(registry.modules_by_permission("admin").len(), 2);
}
