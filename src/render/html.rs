//! HTML renderer — standalone HTML page with semantic markup.

use crate::model::{Catalogue, Entry, Snippet};
use crate::render::Renderer;
use crate::toc;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, catalogue: &Catalogue) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if let Some(ref title) = catalogue.title {
            out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("pre code { background: none; padding: 0; }\n");
        out.push_str(".expected { font-size: 0.9em; color: #555; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        if let Some(ref title) = catalogue.title {
            out.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));
        }
        if let Some(ref preamble) = catalogue.preamble {
            out.push_str(&format!("<p>{}</p>\n", html_escape(preamble)));
        }

        if !catalogue.entries.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for entry in &catalogue.entries {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(&toc::github_slug(&entry.title)),
                    html_escape(&entry.title)
                ));
            }
            out.push_str("</ul>\n");
        }

        for entry in &catalogue.entries {
            out.push_str(&self.render_entry(entry));
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_entry(&self, entry: &Entry) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<h2 id=\"{}\">{}</h2>\n",
            html_escape(&toc::github_slug(&entry.title)),
            html_escape(&entry.title)
        ));
        for paragraph in entry.explanation.split("\n\n") {
            out.push_str(&format!("<p>{}</p>\n", html_escape(paragraph)));
        }
        for snippet in &entry.snippets {
            out.push_str(&render_snippet_html(snippet));
        }
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_snippet_html(snippet: &Snippet) -> String {
    let mut out = String::new();
    let class = if snippet.lang.is_empty() {
        String::new()
    } else {
        format!(" class=\"language-{}\"", html_escape(&snippet.lang))
    };
    out.push_str(&format!(
        "<pre><code{}>{}</code></pre>\n",
        class,
        html_escape(&snippet.source)
    ));

    if !snippet.expectations.is_empty() {
        out.push_str("<ul class=\"expected\">\n");
        for exp in &snippet.expectations {
            out.push_str(&format!(
                "  <li>line {}: <code>{}</code></li>\n",
                exp.line + 1,
                html_escape(&exp.text)
            ));
        }
        out.push_str("</ul>\n");
    }
    out
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
