//! Route table derived from the module registry.

use serde::Serialize;
use tracing::debug;

use super::record::ViewRef;
use super::registry::ModuleRegistry;

/// A routable path and the view it renders.
#[derive(Clone, Serialize)]
pub struct RouteEntry {
    /// Absolute path; submodule paths are `module.path + submodule.path`.
    pub path: String,
    /// Display name of the module or submodule.
    pub name: String,
    /// Owning module id.
    pub module_id: String,
    /// Submodule id when the route belongs to a submodule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submodule_id: Option<String>,
    #[serde(skip)]
    pub view: ViewRef,
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("module_id", &self.module_id)
            .field("submodule_id", &self.submodule_id)
            .finish_non_exhaustive()
    }
}

impl ModuleRegistry {
    /// Build the route list for active modules.
    ///
    /// Every active module route comes first, then the routes of active
    /// submodules under active modules, each block in registration order.
    /// Consumers match first-wins, so a module path shadows a colliding
    /// submodule path.
    pub fn build_routes(&self) -> Vec<RouteEntry> {
        let active = self.active_modules();

        let module_routes = active.iter().map(|module| RouteEntry {
            path: module.path.clone(),
            name: module.name.clone(),
            module_id: module.id.clone(),
            submodule_id: None,
            view: module.view.clone(),
        });

        let submodule_routes = active.iter().flat_map(|module| {
            module.active_submodules().map(move |sub| RouteEntry {
                path: module.submodule_path(sub),
                name: sub.name.clone(),
                module_id: module.id.clone(),
                submodule_id: Some(sub.id.clone()),
                view: sub.view.clone(),
            })
        });

        module_routes.chain(submodule_routes).collect()
    }
}

/// Route table snapshot used by the page shell.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Snapshot the routes of a registry.
    pub fn from_registry(registry: &ModuleRegistry) -> Self {
        let entries = registry.build_routes();
        debug!(routes = entries.len(), "built route table");
        Self { entries }
    }

    /// Match a request path. Exact string comparison, first entry wins.
    pub fn match_path(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// All entries in precedence order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
