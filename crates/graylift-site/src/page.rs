// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page shell — explicit page configuration rendered to a standalone HTML
// document with the stylesheet inlined at render time.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use graylift_core::error::Result;
use graylift_core::human_errors::{Severity, humanize_error};
use graylift_core::GrayliftError;

/// Configuration for one page of the site.
///
/// Constructed explicitly by the caller and passed into [`render_page`] —
/// nothing here is global, and pages can be rendered in any order.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Browser tab title.
    pub title: String,
    /// Emoji icon shown next to the title.
    pub icon: String,
    /// Page heading.
    pub heading: String,
    /// Introductory description shown under the heading.
    pub description: String,
    /// Stylesheet to inline into the document, if any.
    pub stylesheet: Option<PathBuf>,
}

/// Render a page to a standalone HTML document.
///
/// The stylesheet, when configured, is read from disk on every render and
/// inlined in a `<style>` element; a missing file surfaces as
/// [`GrayliftError::Io`].
#[instrument(skip(config), fields(title = %config.title))]
pub fn render_page(config: &PageConfig) -> Result<String> {
    let css = match &config.stylesheet {
        Some(path) => {
            let css = std::fs::read_to_string(path)?;
            debug!(path = %path.display(), bytes = css.len(), "stylesheet loaded");
            css
        }
        None => String::new(),
    };

    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{icon} {title}</title>\n<style>{css}</style>\n</head>\n<body>\n\
         <h1>{heading}</h1>\n<p>{description}</p>\n</body>\n</html>\n",
        icon = escape_html(&config.icon),
        title = escape_html(&config.title),
        heading = escape_html(&config.heading),
        description = escape_html(&config.description),
    );

    info!(bytes = html.len(), "page rendered");
    Ok(html)
}

/// Render a failure panel for on-page display.
///
/// Uses the human-readable error mapping; the severity becomes a CSS class
/// (`error-transient`, `error-action`, `error-permanent`) the stylesheet can
/// colour.
pub fn render_error_panel(err: &GrayliftError) -> String {
    let human = humanize_error(err);
    let class = match human.severity {
        Severity::Transient => "error-transient",
        Severity::ActionRequired => "error-action",
        Severity::Permanent => "error-permanent",
    };
    format!(
        "<div class=\"{class}\">\n<h2>{message}</h2>\n<p>{suggestion}</p>\n</div>\n",
        message = escape_html(&human.message),
        suggestion = escape_html(&human.suggestion),
    )
}

/// Escape the characters HTML treats specially.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_without_stylesheet() -> PageConfig {
        PageConfig {
            title: "LAF Solutions | Computer Vision".into(),
            icon: "\u{1F4BB}".into(),
            heading: "Computer Vision".into(),
            description: "Image to text.".into(),
            stylesheet: None,
        }
    }

    #[test]
    fn renders_title_heading_and_description() {
        let html = render_page(&config_without_stylesheet()).unwrap();
        assert!(html.contains("LAF Solutions | Computer Vision"));
        assert!(html.contains("<h1>Computer Vision</h1>"));
        assert!(html.contains("<p>Image to text.</p>"));
    }

    #[test]
    fn stylesheet_is_inlined() {
        let mut css_file = tempfile::NamedTempFile::new().unwrap();
        write!(css_file, "body {{ background: #fafafa; }}").unwrap();

        let mut config = config_without_stylesheet();
        config.stylesheet = Some(css_file.path().to_path_buf());

        let html = render_page(&config).unwrap();
        assert!(html.contains("<style>body { background: #fafafa; }</style>"));
    }

    #[test]
    fn missing_stylesheet_is_an_io_error() {
        let mut config = config_without_stylesheet();
        config.stylesheet = Some(PathBuf::from("/nonexistent/styles/main.css"));
        let err = render_page(&config).unwrap_err();
        assert!(matches!(err, GrayliftError::Io(_)));
    }

    #[test]
    fn html_significant_characters_are_escaped() {
        let mut config = config_without_stylesheet();
        config.description = "<script>alert('x')</script> & friends".into();
        let html = render_page(&config).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; friends"));
    }

    #[test]
    fn error_panel_carries_severity_class() {
        let panel = render_error_panel(&GrayliftError::Network("refused".into()));
        assert!(panel.contains("error-transient"));
        assert!(panel.contains("refused"));

        let panel = render_error_panel(&GrayliftError::Decode("bad bytes".into()));
        assert!(panel.contains("error-action"));
    }
}
