//! Button gallery: every colour variant and size of the shared button.

use std::fmt::Write;

use super::markup::{heading, html_escape};
use crate::module::ModuleView;

/// Colour variants and their CSS classes.
pub const VARIANTS: &[(&str, &str)] = &[
    ("primary", "btn-primary"),
    ("secondary", "btn-secondary"),
    ("outline", "btn-outline"),
    ("success", "btn-success"),
    ("warning", "btn-warning"),
    ("danger", "btn-danger"),
];

/// Sizes, their CSS classes and display labels.
pub const SIZES: &[(&str, &str, &str)] = &[
    ("sm", "btn-sm", "Pequeño"),
    ("md", "btn-md", "Mediano"),
    ("lg", "btn-lg", "Grande"),
];

/// Capitalize the first character of a variant name for display.
fn variant_label(variant: &str) -> String {
    let mut chars = variant.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn button(variant_class: &str, size_class: &str, label: &str, disabled: bool) -> String {
    format!(
        r#"<button type="button" class="btn {variant_class} {size_class}"{}>{}</button>"#,
        if disabled { " disabled" } else { "" },
        html_escape(label)
    )
}

/// The button gallery view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonGallery;

impl ModuleView for ButtonGallery {
    fn render(&self) -> String {
        let mut html = String::from(r#"<div class="module buttons">"#);
        html.push_str(&heading(
            "Botones",
            "Módulo de demostración del componente Button en diferentes estados",
        ));

        html.push_str(r#"<section><h2>Variantes de Color</h2><div class="button-row">"#);
        for (variant, class) in VARIANTS {
            html.push_str(&button(class, "btn-md", &variant_label(variant), false));
        }
        html.push_str("</div></section>");

        html.push_str(r#"<section><h2>Tamaños</h2><div class="button-row">"#);
        for (_, class, label) in SIZES {
            html.push_str(&button("btn-primary", class, label, false));
        }
        html.push_str("</div></section>");

        html.push_str(r#"<section><h2>Estados</h2><div class="button-row">"#);
        html.push_str(&button("btn-primary", "btn-md", "Normal", false));
        html.push_str(&button("btn-primary", "btn-md", "Deshabilitado", true));
        // SAFETY: write!() to String is infallible
        #[allow(clippy::unwrap_used)]
        write!(
            html,
            r#"<button type="button" class="btn btn-primary btn-md" disabled aria-busy="true">{}</button>"#,
            html_escape("Cargando...")
        )
        .unwrap();
        html.push_str("</div></section></div>");

        html
    }
}
