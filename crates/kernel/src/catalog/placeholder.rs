//! Placeholder view for modules without dedicated content yet.

use super::markup::heading;
use crate::module::ModuleView;

/// Title and a single line of body text.
#[derive(Debug, Clone)]
pub struct Placeholder {
    title: String,
    body: String,
}

impl Placeholder {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl ModuleView for Placeholder {
    fn render(&self) -> String {
        format!(
            r#"<div class="module placeholder">{}</div>"#,
            heading(&self.title, &self.body)
        )
    }
}
