//! Path resolution back to registered modules.

use serde::Serialize;

use super::record::{ModuleRecord, SubModuleRecord, ViewRef};
use super::registry::ModuleRegistry;

/// Result of resolving a path against the registry.
#[derive(Debug, Clone, Copy)]
pub enum PathMatch<'a> {
    /// The path is a module's own path.
    Module(&'a ModuleRecord),
    /// The path is `parent.path + submodule.path`.
    SubModule {
        parent: &'a ModuleRecord,
        submodule: &'a SubModuleRecord,
    },
}

impl<'a> PathMatch<'a> {
    /// The matched module, or the parent of the matched submodule.
    pub fn module(&self) -> &'a ModuleRecord {
        match *self {
            PathMatch::Module(module) => module,
            PathMatch::SubModule { parent, .. } => parent,
        }
    }

    pub fn submodule(&self) -> Option<&'a SubModuleRecord> {
        match *self {
            PathMatch::Module(_) => None,
            PathMatch::SubModule { submodule, .. } => Some(submodule),
        }
    }

    /// Display name of the matched entry.
    pub fn name(&self) -> &'a str {
        match *self {
            PathMatch::Module(module) => &module.name,
            PathMatch::SubModule { submodule, .. } => &submodule.name,
        }
    }

    pub fn view(&self) -> &'a ViewRef {
        match *self {
            PathMatch::Module(module) => &module.view,
            PathMatch::SubModule { submodule, .. } => &submodule.view,
        }
    }

    /// Owned, serializable summary of the match.
    pub fn summary(&self) -> ResolvedPath {
        match self {
            PathMatch::Module(module) => ResolvedPath::Module {
                id: module.id.clone(),
                name: module.name.clone(),
                path: module.path.clone(),
                active: module.is_active(),
            },
            PathMatch::SubModule { parent, submodule } => ResolvedPath::Submodule {
                id: submodule.id.clone(),
                name: submodule.name.clone(),
                path: parent.submodule_path(submodule),
                active: parent.is_active() && submodule.is_active(),
                parent: parent.id.clone(),
            },
        }
    }
}

/// Serializable form of a [`PathMatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedPath {
    Module {
        id: String,
        name: String,
        path: String,
        active: bool,
    },
    Submodule {
        id: String,
        name: String,
        path: String,
        active: bool,
        parent: String,
    },
}

impl ModuleRegistry {
    /// Resolve a path to a module or a (parent, submodule) pair.
    ///
    /// Module paths are checked first across all modules, then submodule
    /// paths. Inactive entries are not filtered out. Matching is exact
    /// string equality with no pattern or trailing-slash handling.
    pub fn resolve_by_path(&self, path: &str) -> Option<PathMatch<'_>> {
        if let Some(module) = self.modules().iter().find(|m| m.path == path) {
            return Some(PathMatch::Module(module));
        }

        self.modules().iter().find_map(|parent| {
            parent
                .submodules()
                .iter()
                .find(|sub| parent.submodule_path(sub) == path)
                .map(|submodule| PathMatch::SubModule { parent, submodule })
        })
    }
}
