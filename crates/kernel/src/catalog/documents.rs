//! Document upload mock.
//!
//! Nothing is uploaded. The listed files and their progress are fixed
//! sample data so the page shows every upload state.

use std::fmt::Write;

use super::markup::{heading, html_escape};
use crate::module::ModuleView;

/// File extensions accepted by the upload form.
pub const ACCEPTED_TYPES: &str = ".pdf,.doc,.docx,.jpg,.jpeg,.png";

/// A fabricated upload entry.
#[derive(Debug, Clone)]
pub struct MockUpload {
    pub name: String,
    pub size_bytes: u64,
    /// Progress percentage, clamped to 100.
    pub progress: u8,
}

impl MockUpload {
    pub fn new(name: impl Into<String>, size_bytes: u64, progress: u8) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            progress: progress.min(100),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.progress >= 100
    }
}

/// Format a byte count as a short human-readable size ("1.5 MB").
///
/// Two decimal places at most, trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// The document upload view.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    max_size_mb: u32,
    files: Vec<MockUpload>,
}

impl DocumentUpload {
    pub fn new(max_size_mb: u32, files: Vec<MockUpload>) -> Self {
        Self { max_size_mb, files }
    }

    /// Sample listing with one finished and one in-flight upload.
    pub fn sample() -> Self {
        Self::new(
            10,
            vec![
                MockUpload::new("contrato.pdf", 1_572_864, 100),
                MockUpload::new("foto-perfil.png", 348_160, 40),
            ],
        )
    }

    fn render_file(&self, html: &mut String, file: &MockUpload) {
        // SAFETY: write!() to String is infallible
        #[allow(clippy::unwrap_used)]
        write!(
            html,
            r#"<li class="upload"><span class="upload-name">{}</span><span class="upload-size">{}</span>"#,
            html_escape(&file.name),
            format_file_size(file.size_bytes)
        )
        .unwrap();
        if file.is_completed() {
            html.push_str(r#"<span class="upload-status done">Completado</span>"#);
        } else {
            // SAFETY: write!() to String is infallible
            #[allow(clippy::unwrap_used)]
            write!(
                html,
                r#"<span class="upload-status">{p}%</span><div class="progress"><div class="progress-bar" style="width: {p}%"></div></div>"#,
                p = file.progress
            )
            .unwrap();
        }
        html.push_str("</li>");
    }
}

impl ModuleView for DocumentUpload {
    fn render(&self) -> String {
        let mut html = String::from(r#"<div class="module documents">"#);
        html.push_str(&heading(
            "Carga de Documento",
            "Módulo para cargar y gestionar documentos",
        ));

        // SAFETY: write!() to String is infallible
        #[allow(clippy::unwrap_used)]
        write!(
            html,
            r#"<section class="upload-form"><h2>Cargar Documentos</h2><input type="file" multiple accept="{ACCEPTED_TYPES}"><label>Tamaño máximo (MB) <input type="number" min="1" max="100" value="{}"></label></section>"#,
            self.max_size_mb
        )
        .unwrap();

        // SAFETY: write!() to String is infallible
        #[allow(clippy::unwrap_used)]
        write!(
            html,
            r#"<section class="upload-list"><h2>Archivos Cargados ({})</h2>"#,
            self.files.len()
        )
        .unwrap();
        if self.files.is_empty() {
            html.push_str(r#"<p class="empty">No hay archivos cargados</p>"#);
        } else {
            html.push_str("<ul>");
            for file in &self.files {
                self.render_file(&mut html, file);
            }
            html.push_str("</ul>");
        }
        html.push_str("</section></div>");

        html
    }
}
