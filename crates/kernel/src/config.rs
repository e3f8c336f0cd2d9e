//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Directory of Tera templates. When None, the built-in templates are used.
    pub templates_dir: Option<PathBuf>,

    /// Permission of the viewing user. When set, the sidebar only lists
    /// modules open to this permission and other modules are refused.
    pub viewer_permission: Option<String>,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Site name shown in the sidebar and page titles (default: "Modulo").
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let templates_dir = env::var("TEMPLATES_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let viewer_permission = env::var("VIEWER_PERMISSION")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_list(&v))
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let site_name = env::var("SITE_NAME").unwrap_or_else(|_| "Modulo".to_string());

        Ok(Self {
            port,
            templates_dir,
            viewer_permission,
            cors_allowed_origins,
            site_name,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            templates_dir: None,
            viewer_permission: None,
            cors_allowed_origins: vec!["*".to_string()],
            site_name: "Modulo".to_string(),
        }
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
