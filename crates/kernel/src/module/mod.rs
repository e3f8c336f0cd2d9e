//! Module registry for navigation and content routing.
//!
//! Modules are registered once at startup and provide:
//! - Route entries for the page shell
//! - Navigation structure for the sidebar
//! - Path resolution back to the owning module or submodule

mod navigation;
mod record;
mod registry;
mod resolve;
mod routes;

pub use navigation::{NavigationLeaf, NavigationNode};
pub use record::{ModuleRecord, ModuleView, SubModuleRecord, ViewRef};
pub use registry::ModuleRegistry;
pub use resolve::{PathMatch, ResolvedPath};
pub use routes::{RouteEntry, RouteTable};
