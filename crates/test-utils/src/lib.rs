//! Modulo test utilities.
//!
//! Fixture builders for module records and assertion helpers for
//! integration testing of the registry and the page shell.

use modulo_kernel::module::{ModuleRecord, ModuleView, SubModuleRecord};

/// A view that renders a fixed marker, so tests can tell views apart.
pub fn marker_view(marker: &str) -> impl ModuleView + use<> {
    let html = format!("<p data-marker=\"{marker}\">{marker}</p>");
    move || html.clone()
}

/// Create a test module with default values.
///
/// The name is the id uppercased and the view renders the id as marker.
pub fn test_module(id: &str, path: &str) -> TestModule {
    TestModule {
        id: id.to_string(),
        name: id.to_uppercase(),
        path: path.to_string(),
        permissions: None,
        active: None,
        submodules: None,
    }
}

/// A test module builder.
#[derive(Debug, Clone)]
pub struct TestModule {
    pub id: String,
    pub name: String,
    pub path: String,
    pub permissions: Option<Vec<String>>,
    pub active: Option<bool>,
    pub submodules: Option<Vec<TestSubModule>>,
}

impl TestModule {
    /// Set a custom name.
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Mark as inactive.
    pub fn inactive(mut self) -> Self {
        self.active = Some(false);
        self
    }

    /// Mark as explicitly active.
    pub fn active(mut self) -> Self {
        self.active = Some(true);
        self
    }

    /// Restrict to the given permissions.
    pub fn with_permissions(mut self, permissions: &[&str]) -> Self {
        self.permissions = Some(permissions.iter().map(|p| p.to_string()).collect());
        self
    }

    /// Attach a submodule.
    pub fn with_submodule(mut self, submodule: TestSubModule) -> Self {
        self.submodules.get_or_insert_with(Vec::new).push(submodule);
        self
    }

    /// Build the registry record.
    pub fn build(self) -> ModuleRecord {
        let mut record = ModuleRecord::new(&self.id, self.name, self.path, marker_view(&self.id));
        record.permissions = self.permissions;
        record.is_active = self.active;
        record.submodules = self
            .submodules
            .map(|subs| subs.into_iter().map(TestSubModule::build).collect());
        record
    }
}

/// Create a test submodule with default values.
pub fn test_submodule(id: &str, path: &str) -> TestSubModule {
    TestSubModule {
        id: id.to_string(),
        name: id.to_uppercase(),
        path: path.to_string(),
        active: None,
    }
}

/// A test submodule builder.
#[derive(Debug, Clone)]
pub struct TestSubModule {
    pub id: String,
    pub name: String,
    pub path: String,
    pub active: Option<bool>,
}

impl TestSubModule {
    /// Set a custom name.
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Mark as inactive.
    pub fn inactive(mut self) -> Self {
        self.active = Some(false);
        self
    }

    /// Build the registry record.
    pub fn build(self) -> SubModuleRecord {
        let mut record =
            SubModuleRecord::new(&self.id, self.name, self.path, marker_view(&self.id));
        record.is_active = self.active;
        record
    }
}

/// Assertion helpers for responses.
pub mod assert {
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string NOT to contain '{needle}'\nActual: {haystack}"
        );
    }
}
