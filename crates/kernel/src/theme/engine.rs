//! Theme engine with Tera templates and suggestion resolution.

use std::path::Path;

use anyhow::{Context, Result};
use dashmap::DashMap;
use tera::Tera;
use tracing::debug;

/// Templates compiled into the binary, used when no template directory
/// is configured.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("page.html", include_str!("../../templates/page.html")),
    (
        "partials/sidebar.html",
        include_str!("../../templates/partials/sidebar.html"),
    ),
];

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
    /// Cache mapping suggestion lists to resolved template names.
    suggestion_cache: DashMap<String, String>,
}

impl ThemeEngine {
    /// Create a new theme engine loading templates from the given directory.
    pub fn new(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;

        let template_names: Vec<_> = tera.get_template_names().collect();
        debug!(count = template_names.len(), dir = %template_dir.display(), "loaded templates");

        Ok(Self {
            tera,
            suggestion_cache: DashMap::new(),
        })
    }

    /// Create a theme engine from the built-in templates.
    pub fn builtin() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
            .context("failed to parse built-in templates")?;

        debug!(count = BUILTIN_TEMPLATES.len(), "loaded built-in templates");

        Ok(Self {
            tera,
            suggestion_cache: DashMap::new(),
        })
    }

    /// Resolve the best template from a list of suggestions.
    ///
    /// Templates are tried in order; the first one that exists is returned.
    /// Results are cached for performance.
    ///
    /// Example suggestions: `["page--users--list", "page--users", "page"]`
    pub fn resolve_template(&self, suggestions: &[&str]) -> Option<String> {
        if suggestions.is_empty() {
            return None;
        }

        let cache_key = suggestions.join("|");

        if let Some(cached) = self.suggestion_cache.get(&cache_key) {
            return Some(cached.clone());
        }

        for suggestion in suggestions {
            let template_name = format!("{suggestion}.html");
            if self.tera.get_template(&template_name).is_ok() {
                self.suggestion_cache
                    .insert(cache_key, template_name.clone());
                return Some(template_name);
            }
        }

        // Negative results are not cached
        None
    }

    /// Get page template suggestions based on path, most specific first.
    ///
    /// `/users/list` -> `page--users--list`, `page--users`, `page`.
    /// The root path suggests `page--front`.
    pub fn page_suggestions(path: &str) -> Vec<String> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut suggestions = Vec::with_capacity(segments.len() + 1);
        if segments.is_empty() {
            suggestions.push("page--front".to_string());
        }
        for end in (1..=segments.len()).rev() {
            suggestions.push(format!("page--{}", segments[..end].join("--")));
        }
        suggestions.push("page".to_string());

        suggestions
    }

    /// Number of cached suggestion resolutions.
    pub fn cache_len(&self) -> usize {
        self.suggestion_cache.len()
    }

    /// Render a full page with content.
    ///
    /// Template suggestions come from `route_path`, the registered path of
    /// the matched route, so the cache only grows with the route table.
    /// Pages without a route use `page.html`. `path` is the request path
    /// used for active-marking; `context` should already carry the sidebar
    /// navigation and site name.
    pub fn render_page(
        &self,
        route_path: Option<&str>,
        path: &str,
        title: &str,
        content: &str,
        context: &mut tera::Context,
    ) -> Result<String> {
        let template = route_path
            .and_then(|route_path| {
                let suggestions = Self::page_suggestions(route_path);
                let suggestion_refs: Vec<&str> =
                    suggestions.iter().map(|s| s.as_str()).collect();
                self.resolve_template(&suggestion_refs)
            })
            .unwrap_or_else(|| "page.html".to_string());

        context.insert("title", title);
        context.insert("content", content);
        context.insert("path", path);

        self.tera
            .render(&template, context)
            .context("failed to render page template")
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .field("cache_size", &self.suggestion_cache.len())
            .finish()
    }
}
