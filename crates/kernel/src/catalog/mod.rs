//! Built-in modules registered at startup.
//!
//! Each module supplies a view; the registry takes care of routing and
//! navigation.

mod buttons;
mod documents;
mod markup;
mod placeholder;
mod table;

pub use buttons::ButtonGallery;
pub use documents::{DocumentUpload, MockUpload, format_file_size};
pub use markup::html_escape;
pub use placeholder::Placeholder;
pub use table::{Align, Column, DataTable, sample_table};

use tracing::info;

use crate::module::{ModuleRecord, ModuleRegistry, SubModuleRecord};

/// Register every built-in module and submodule.
pub fn register_all_modules(registry: &mut ModuleRegistry) {
    registry.register_module(
        ModuleRecord::new("botones", "Botones", "/botones", ButtonGallery)
            .with_icon("🔘")
            .with_description("Módulo de demostración de botones")
            .with_active(true),
    );

    registry.register_module(
        ModuleRecord::new(
            "dashboard",
            "Dashboard",
            "/",
            Placeholder::new("Dashboard", "Dashboard module content"),
        )
        .with_icon("🏠")
        .with_description("Main dashboard view")
        .with_active(true),
    );

    registry.register_module(
        ModuleRecord::new(
            "users",
            "Users",
            "/users",
            Placeholder::new("Users", "Users module content"),
        )
        .with_icon("👥")
        .with_description("User management")
        .with_active(true)
        .with_submodules(Vec::new()),
    );

    registry.register_submodule(
        "users",
        SubModuleRecord::new(
            "user-list",
            "User List",
            "/list",
            Placeholder::new("User List", "User list submodule content"),
        )
        .with_icon("📋")
        .with_description("List all users")
        .with_active(true),
    );

    registry.register_submodule(
        "users",
        SubModuleRecord::new(
            "user-create",
            "Create User",
            "/create",
            Placeholder::new("Create User", "Create user submodule content"),
        )
        .with_icon("➕")
        .with_description("Create new user")
        .with_active(true),
    );

    registry.register_module(
        ModuleRecord::new(
            "products",
            "Products",
            "/products",
            Placeholder::new("Products", "Products module content"),
        )
        .with_icon("📦")
        .with_description("Product management")
        .with_active(true),
    );

    registry.register_module(
        ModuleRecord::new(
            "settings",
            "Settings",
            "/settings",
            Placeholder::new("Settings", "Application settings"),
        )
        .with_icon("⚙️")
        .with_description("Application settings")
        .with_active(true),
    );

    registry.register_module(
        ModuleRecord::new(
            "documentos",
            "Documentos",
            "/documentos",
            DocumentUpload::sample(),
        )
        .with_icon("📄")
        .with_description("Carga y gestión de documentos")
        .with_active(true),
    );

    registry.register_module(
        ModuleRecord::new("tabla", "Tabla", "/tabla", sample_table())
            .with_icon("📊")
            .with_description("Módulo de demostración de tablas")
            .with_active(true),
    );

    info!(modules = registry.len(), "built-in modules registered");
}
