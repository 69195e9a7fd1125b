//! Markdown renderer — reconstructs a readable catalogue with an index.
//!
//! Snippet sources are emitted verbatim, so inline expected-output
//! annotations already show where they were written.

use crate::model::{Catalogue, Entry, Snippet};
use crate::render::Renderer;
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, catalogue: &Catalogue) -> String {
        let mut out = String::new();

        if let Some(ref title) = catalogue.title {
            out.push_str(&format!("# {}\n\n", title));
        }
        if let Some(ref preamble) = catalogue.preamble {
            out.push_str(preamble.trim_end());
            out.push_str("\n\n");
        }

        if !catalogue.entries.is_empty() {
            out.push_str("## Index\n\n");
            for entry in &catalogue.entries {
                out.push_str(&toc::render_toc_item(&entry.title));
                out.push('\n');
            }
            out.push('\n');

            for (i, entry) in catalogue.entries.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&self.render_entry(entry));
            }
        }

        out
    }

    fn render_entry(&self, entry: &Entry) -> String {
        let mut out = String::new();
        out.push_str(&format!("## {}\n\n", entry.title));
        out.push_str(entry.explanation.trim_end());
        out.push('\n');
        for snippet in &entry.snippets {
            out.push('\n');
            out.push_str(&render_snippet(snippet));
        }
        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_snippet(snippet: &Snippet) -> String {
    let mut out = String::new();
    out.push_str(&format!("```{}\n", snippet.lang));
    if !snippet.source.is_empty() {
        out.push_str(&snippet.source);
        out.push('\n');
    }
    out.push_str("```\n");
    out
}
