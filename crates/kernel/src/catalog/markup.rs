//! Small helpers shared by the built-in views.

/// HTML-escape a string for safe output.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Page heading block used at the top of every module view.
pub fn heading(title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="module-heading"><h1>{}</h1><p>{}</p></section>"#,
        html_escape(title),
        html_escape(subtitle)
    )
}
