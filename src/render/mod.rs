//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

use anyhow::{anyhow, Result};

use crate::model::{Catalogue, Entry};

/// Trait for rendering a Catalogue into a specific output format.
///
/// Rendering is pure: same input, same text, no side effects.
pub trait Renderer {
    fn render(&self, catalogue: &Catalogue) -> String;
    fn render_entry(&self, entry: &Entry) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, or json",
            format
        )),
    }
}
