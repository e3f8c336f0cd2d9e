//! Module and submodule records.

use std::fmt;
use std::sync::Arc;

/// Produces the content-area fragment for a module or submodule.
///
/// The registry never inspects the output; it only stores the view and
/// hands it to whoever renders the page.
pub trait ModuleView: Send + Sync {
    /// Render the view as an HTML fragment.
    fn render(&self) -> String;
}

impl<F> ModuleView for F
where
    F: Fn() -> String + Send + Sync,
{
    fn render(&self) -> String {
        self()
    }
}

/// Shared handle to a view, cloned into derived route entries.
pub type ViewRef = Arc<dyn ModuleView>;

/// A top-level module.
#[derive(Clone)]
pub struct ModuleRecord {
    /// Unique identifier across the registry.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Absolute path (e.g., "/users").
    pub path: String,
    /// View rendered in the content area.
    pub view: ViewRef,
    pub icon: Option<String>,
    pub description: Option<String>,
    /// Permissions allowed to see this module (`None` = open to all).
    pub permissions: Option<Vec<String>>,
    /// Active flag; `None` counts as active.
    pub is_active: Option<bool>,
    /// Submodules in registration order.
    pub submodules: Option<Vec<SubModuleRecord>>,
}

/// A submodule nested under a module. Submodules do not nest further.
#[derive(Clone)]
pub struct SubModuleRecord {
    /// Identifier, unique within the parent module.
    pub id: String,
    pub name: String,
    /// Path relative to the parent (e.g., "/list").
    pub path: String,
    pub view: ViewRef,
    pub icon: Option<String>,
    pub description: Option<String>,
    /// Active flag; `None` counts as active.
    pub is_active: Option<bool>,
}

impl ModuleRecord {
    /// Create an active module with no submodules or permission list.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        view: impl ModuleView + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            view: Arc::new(view),
            icon: None,
            description: None,
            permissions: None,
            is_active: None,
            submodules: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict the module to the given permissions.
    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    pub fn with_submodules(mut self, submodules: Vec<SubModuleRecord>) -> Self {
        self.submodules = Some(submodules);
        self
    }

    /// Whether the module is active. An unset flag counts as active.
    pub fn is_active(&self) -> bool {
        self.is_active != Some(false)
    }

    /// Whether the module is visible to holders of `permission`.
    ///
    /// A module without a permission list is open to all.
    pub fn allows(&self, permission: &str) -> bool {
        self.permissions
            .as_ref()
            .is_none_or(|perms| perms.iter().any(|p| p == permission))
    }

    /// Registered submodules, empty if none were ever attached.
    pub fn submodules(&self) -> &[SubModuleRecord] {
        self.submodules.as_deref().unwrap_or(&[])
    }

    /// Active submodules in registration order.
    pub fn active_submodules(&self) -> impl Iterator<Item = &SubModuleRecord> {
        self.submodules().iter().filter(|sub| sub.is_active())
    }

    /// Absolute path of a submodule under this module.
    ///
    /// Plain concatenation: callers supply correctly joined segments.
    pub fn submodule_path(&self, submodule: &SubModuleRecord) -> String {
        format!("{}{}", self.path, submodule.path)
    }
}

impl SubModuleRecord {
    /// Create an active submodule.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        view: impl ModuleView + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            view: Arc::new(view),
            icon: None,
            description: None,
            is_active: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    /// Whether the submodule is active. An unset flag counts as active.
    pub fn is_active(&self) -> bool {
        self.is_active != Some(false)
    }
}

impl fmt::Debug for ModuleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("path", &self.path)
            .field("icon", &self.icon)
            .field("description", &self.description)
            .field("permissions", &self.permissions)
            .field("is_active", &self.is_active)
            .field("submodules", &self.submodules)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for SubModuleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubModuleRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("path", &self.path)
            .field("icon", &self.icon)
            .field("description", &self.description)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}
