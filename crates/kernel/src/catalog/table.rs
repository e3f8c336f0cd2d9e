//! Generic data table view.

use std::fmt::Write;

use super::markup::{heading, html_escape};
use crate::module::ModuleView;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    fn class(self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Center => "text-center",
            Align::Right => "text-right",
        }
    }
}

/// A table column. `cell` returns HTML, so it must escape any text it embeds.
pub struct Column<T> {
    pub header: &'static str,
    pub align: Align,
    pub cell: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, cell: fn(&T) -> String) -> Self {
        Self {
            header,
            align: Align::Left,
            cell,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Table over rows of `T`.
pub struct DataTable<T> {
    title: String,
    subtitle: String,
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    key: Option<fn(&T) -> String>,
    empty_message: String,
}

impl<T> DataTable<T> {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            key: None,
            empty_message: "No hay datos disponibles".to_string(),
        }
    }

    pub fn column(mut self, column: Column<T>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn rows(mut self, rows: Vec<T>) -> Self {
        self.rows = rows;
        self
    }

    /// Emit a `data-key` attribute per row.
    pub fn keyed(mut self, key: fn(&T) -> String) -> Self {
        self.key = Some(key);
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    fn render_table(&self, html: &mut String) {
        if self.rows.is_empty() {
            // SAFETY: write!() to String is infallible
            #[allow(clippy::unwrap_used)]
            write!(
                html,
                r#"<div class="table-empty">{}</div>"#,
                html_escape(&self.empty_message)
            )
            .unwrap();
            return;
        }

        html.push_str(r#"<table class="data-table"><thead><tr>"#);
        for column in &self.columns {
            // SAFETY: write!() to String is infallible
            #[allow(clippy::unwrap_used)]
            write!(
                html,
                r#"<th class="{}">{}</th>"#,
                column.align.class(),
                html_escape(column.header)
            )
            .unwrap();
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            match self.key {
                Some(key) => {
                    // SAFETY: write!() to String is infallible
                    #[allow(clippy::unwrap_used)]
                    write!(html, r#"<tr data-key="{}">"#, html_escape(&key(row))).unwrap();
                }
                None => html.push_str("<tr>"),
            }
            for column in &self.columns {
                // SAFETY: write!() to String is infallible
                #[allow(clippy::unwrap_used)]
                write!(
                    html,
                    r#"<td class="{}">{}</td>"#,
                    column.align.class(),
                    (column.cell)(row)
                )
                .unwrap();
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
    }
}

impl<T: Send + Sync> ModuleView for DataTable<T> {
    fn render(&self) -> String {
        let mut html = String::from(r#"<div class="module table">"#);
        html.push_str(&heading(&self.title, &self.subtitle));
        html.push_str(r#"<section class="table-wrapper">"#);
        self.render_table(&mut html);
        html.push_str("</section></div>");
        html
    }
}

/// Row type of the sample table.
#[derive(Debug, Clone)]
pub struct SampleRow {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub status: &'static str,
}

fn status_badge(row: &SampleRow) -> String {
    let class = if row.status == "Activo" {
        "badge-active"
    } else {
        "badge-inactive"
    };
    format!(r#"<span class="badge {class}">{}</span>"#, html_escape(row.status))
}

/// The sample table shown by the table module.
pub fn sample_table() -> DataTable<SampleRow> {
    DataTable::new("Tabla", "Módulo de demostración de componentes de tabla")
        .column(Column::new("Nombre", |r: &SampleRow| html_escape(r.name)))
        .column(Column::new("Email", |r: &SampleRow| html_escape(r.email)))
        .column(Column::new("Estado", status_badge).align(Align::Center))
        .keyed(|r: &SampleRow| r.id.to_string())
        .rows(vec![
            SampleRow {
                id: "1",
                name: "Ejemplo 1",
                email: "ejemplo1@email.com",
                status: "Activo",
            },
            SampleRow {
                id: "2",
                name: "Ejemplo 2",
                email: "ejemplo2@email.com",
                status: "Inactivo",
            },
        ])
}
