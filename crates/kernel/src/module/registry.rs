//! Module registry - holds every registered module in registration order.
//!
//! Populated once during bootstrap by explicit registration calls and then
//! shared read-only with the page shell.

use tracing::debug;

use super::record::{ModuleRecord, SubModuleRecord};

/// Ordered store of module records, unique by id.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: Vec<ModuleRecord>,
}

impl ModuleRegistry {
    /// Create an empty module registry.
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module.
    ///
    /// A module with the same id is overwritten in place, keeping its
    /// position. The whole record is replaced, so registering without
    /// submodules drops any submodules attached earlier.
    pub fn register_module(&mut self, record: ModuleRecord) {
        match self.modules.iter().position(|m| m.id == record.id) {
            Some(index) => {
                debug!(module = %record.id, index, "replacing registered module");
                self.modules[index] = record;
            }
            None => {
                debug!(module = %record.id, path = %record.path, "registered module");
                self.modules.push(record);
            }
        }
    }

    /// Register a submodule under `module_id`.
    ///
    /// Returns `false` and leaves the registry untouched when the parent
    /// is not registered. Replaces in place by id, otherwise appends.
    pub fn register_submodule(&mut self, module_id: &str, record: SubModuleRecord) -> bool {
        let Some(module) = self.modules.iter_mut().find(|m| m.id == module_id) else {
            debug!(
                module = module_id,
                submodule = %record.id,
                "parent module not registered, ignoring submodule"
            );
            return false;
        };

        let submodules = module.submodules.get_or_insert_with(Vec::new);
        match submodules.iter().position(|s| s.id == record.id) {
            Some(index) => {
                debug!(module = module_id, submodule = %record.id, "replacing submodule");
                submodules[index] = record;
            }
            None => {
                debug!(module = module_id, submodule = %record.id, "registered submodule");
                submodules.push(record);
            }
        }
        true
    }

    /// All modules, active or not, in registration order.
    pub fn modules(&self) -> &[ModuleRecord] {
        &self.modules
    }

    /// Get a module by id.
    pub fn get_module(&self, id: &str) -> Option<&ModuleRecord> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Get a submodule by parent id and submodule id.
    pub fn get_submodule(&self, module_id: &str, submodule_id: &str) -> Option<&SubModuleRecord> {
        self.get_module(module_id)?
            .submodules()
            .iter()
            .find(|s| s.id == submodule_id)
    }

    /// Active modules in registration order.
    pub fn active_modules(&self) -> Vec<&ModuleRecord> {
        self.modules.iter().filter(|m| m.is_active()).collect()
    }

    /// Active modules visible to holders of `permission`.
    ///
    /// Modules without a permission list are included for everyone.
    pub fn modules_by_permission(&self, permission: &str) -> Vec<&ModuleRecord> {
        self.modules
            .iter()
            .filter(|m| m.is_active() && m.allows(permission))
            .collect()
    }

    /// Get module count.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
