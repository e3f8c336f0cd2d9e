//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::module::{ModuleRegistry, NavigationNode, RouteTable};
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. The module registry is
/// populated before the state is built and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Registered modules.
    registry: ModuleRegistry,

    /// Route table snapshot taken from the registry.
    routes: RouteTable,

    /// Theme engine for page rendering.
    theme: ThemeEngine,

    /// Site name for page titles and the sidebar.
    site_name: String,

    /// Permission of the viewing user, if restricted.
    viewer_permission: Option<String>,
}

impl AppState {
    /// Build application state from a populated registry.
    pub fn new(config: &Config, registry: ModuleRegistry) -> Result<Self> {
        let theme = match &config.templates_dir {
            Some(dir) => ThemeEngine::new(dir)
                .with_context(|| format!("failed to load templates from {}", dir.display()))?,
            None => ThemeEngine::builtin()?,
        };

        Ok(Self::with_theme(config, registry, theme))
    }

    /// Build application state with an explicit theme engine.
    pub fn with_theme(config: &Config, registry: ModuleRegistry, theme: ThemeEngine) -> Self {
        let routes = RouteTable::from_registry(&registry);

        info!(
            modules = registry.len(),
            routes = routes.len(),
            viewer_permission = ?config.viewer_permission,
            "application state initialized"
        );

        Self {
            inner: Arc::new(AppStateInner {
                registry,
                routes,
                theme,
                site_name: config.site_name.clone(),
                viewer_permission: config.viewer_permission.clone(),
            }),
        }
    }

    /// Get the module registry.
    pub fn registry(&self) -> &ModuleRegistry {
        &self.inner.registry
    }

    /// Get the route table.
    pub fn routes(&self) -> &RouteTable {
        &self.inner.routes
    }

    /// Get the theme engine.
    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }

    pub fn site_name(&self) -> &str {
        &self.inner.site_name
    }

    pub fn viewer_permission(&self) -> Option<&str> {
        self.inner.viewer_permission.as_deref()
    }

    /// Sidebar navigation for the viewing user.
    pub fn navigation(&self) -> Vec<NavigationNode> {
        match self.viewer_permission() {
            Some(permission) => self.registry().build_navigation_for(permission),
            None => self.registry().build_navigation(),
        }
    }

    /// Whether the viewing user may open the given module.
    ///
    /// Unknown modules are refused.
    pub fn can_view(&self, module_id: &str) -> bool {
        let Some(module) = self.registry().get_module(module_id) else {
            return false;
        };
        self.viewer_permission()
            .is_none_or(|permission| module.allows(permission))
    }
}
