//! Navigation structure for the sidebar.

use serde::Serialize;

use super::record::ModuleRecord;
use super::registry::ModuleRegistry;

/// A top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationNode {
    pub id: String,
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Active submodules, with absolute paths.
    pub children: Vec<NavigationLeaf>,
}

/// A submodule entry under a [`NavigationNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationLeaf {
    pub id: String,
    pub name: String,
    /// Absolute path (`module.path + submodule.path`).
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NavigationNode {
    fn from_module(module: &ModuleRecord) -> Self {
        let children = module
            .active_submodules()
            .map(|sub| NavigationLeaf {
                id: sub.id.clone(),
                name: sub.name.clone(),
                path: module.submodule_path(sub),
                icon: sub.icon.clone(),
                description: sub.description.clone(),
            })
            .collect();

        Self {
            id: module.id.clone(),
            name: module.name.clone(),
            path: module.path.clone(),
            icon: module.icon.clone(),
            description: module.description.clone(),
            children,
        }
    }

    /// Whether this node or one of its children sits at `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.path == path || self.children.iter().any(|child| child.path == path)
    }
}

impl ModuleRegistry {
    /// Navigation tree of active modules and their active submodules.
    pub fn build_navigation(&self) -> Vec<NavigationNode> {
        self.active_modules()
            .into_iter()
            .map(NavigationNode::from_module)
            .collect()
    }

    /// Navigation tree restricted to modules visible to `permission`.
    pub fn build_navigation_for(&self, permission: &str) -> Vec<NavigationNode> {
        self.modules_by_permission(permission)
            .into_iter()
            .map(NavigationNode::from_module)
            .collect()
    }
}
