//! Modulo Kernel Library
//!
//! Module registry, built-in module catalog, and the HTTP page shell.
//! The main entry point for running the server is the `modulo` binary.

pub mod catalog;
pub mod config;
pub mod error;
pub mod module;
pub mod routes;
pub mod state;
pub mod theme;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use module::ModuleRegistry;
pub use state::AppState;
