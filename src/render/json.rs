//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Catalogue model directly, expectations included.

use crate::model::{Catalogue, Entry};
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, catalogue: &Catalogue) -> String {
        let mut out = serde_json::to_string_pretty(catalogue)
            .expect("catalogue model serializes to JSON");
        out.push('\n');
        out
    }

    fn render_entry(&self, entry: &Entry) -> String {
        let mut out =
            serde_json::to_string_pretty(entry).expect("entry model serializes to JSON");
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use serde_json::Value;

    #[test]
    fn render_round_trips_through_serde() {
        let cat = parser::load("# G\n\nintro\n\n## A\nx\n```js\n1 // => 1\n```\n").unwrap();
        let out = JsonRenderer.render(&cat);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "G");
        assert_eq!(value["entries"][0]["title"], "A");
        assert_eq!(value["entries"][0]["explanation"], "x");
        assert_eq!(value["entries"][0]["snippets"][0]["lang"], "js");
        assert_eq!(
            value["entries"][0]["snippets"][0]["expectations"][0]["text"],
            "1"
        );
    }

    #[test]
    fn render_entry_is_self_contained() {
        let cat = parser::load("## A\nx\n").unwrap();
        let entry = cat.find_by_title("A").unwrap();
        let value: Value = serde_json::from_str(&JsonRenderer.render_entry(entry)).unwrap();
        assert_eq!(value["title"], "A");
        assert_eq!(value["snippets"], serde_json::json!([]));
    }
}
