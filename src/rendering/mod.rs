//! Turning parsed documents into HTML

use serde::Serialize;
use std::fmt;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::language::Document;

mod html;

pub use html::render as render_html;

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body | unescaped}</body>
</html>
"#;

#[derive(Serialize)]
struct Context {
    title: String,
    body: String,
}

#[derive(Debug)]
pub struct RenderingError {
    pub problem: String,
    pub details: String,
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl std::error::Error for RenderingError {}

/// Render a document as a complete HTML page with the given title.
pub fn render_page(document: &Document, title: &str) -> Result<String, RenderingError> {
    let body = render_html(document);
    debug!("Rendered {} bytes of body", body.len());

    let mut tt = TinyTemplate::new();
    tt.add_formatter("unescaped", tinytemplate::format_unescaped);
    tt.add_template("page", TEMPLATE)
        .map_err(|error| RenderingError {
            problem: "Invalid page template".to_string(),
            details: error.to_string(),
        })?;

    let context = Context {
        title: title.to_string(),
        body,
    };

    tt.render("page", &context)
        .map_err(|error| RenderingError {
            problem: "Failed rendering page".to_string(),
            details: error.to_string(),
        })
}
