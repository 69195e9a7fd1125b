//! Data model for a parsed catalogue — format-agnostic.

use serde::Serialize;

use crate::error::NotFoundError;

/// Complete parsed catalogue from a single source document.
///
/// Immutable after load: every accessor borrows, nothing mutates.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    /// Document heading (`# ...`), if the source has one.
    pub title: Option<String>,
    /// Prose before the first entry.
    pub preamble: Option<String>,
    /// Entries in document order.
    pub entries: Vec<Entry>,
}

/// One edge-case topic.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Unique within the catalogue.
    pub title: String,
    /// Free-form prose. Always non-empty in a loaded catalogue.
    pub explanation: String,
    /// Code examples in document order. May be empty.
    pub snippets: Vec<Snippet>,
}

/// A fenced code example.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Language tag from the fence info string. Empty when the fence has none.
    pub lang: String,
    /// Verbatim text between the fences, annotations included.
    pub source: String,
    /// Expected-output annotations extracted from inline comments.
    pub expectations: Vec<Expectation>,
}

/// Expected output noted in a snippet comment, e.g. `// => "banana"`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Expectation {
    /// Zero-based line within the snippet source.
    pub line: usize,
    /// Annotation text with the marker stripped.
    pub text: String,
}

impl Catalogue {
    /// Exact-match lookup by entry title.
    pub fn find_by_title(&self, title: &str) -> Result<&Entry, NotFoundError> {
        self.entries
            .iter()
            .find(|e| e.title == title)
            .ok_or_else(|| NotFoundError {
                title: title.to_string(),
            })
    }

    /// Entry titles in document order. Restartable, no side effects.
    pub fn list_titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalogue {
        Catalogue {
            title: None,
            preamble: None,
            entries: vec![
                Entry {
                    title: "Type Coercion".to_string(),
                    explanation: "The plus operator prefers strings.".to_string(),
                    snippets: Vec::new(),
                },
                Entry {
                    title: "Hoisting".to_string(),
                    explanation: "Declarations move, assignments stay.".to_string(),
                    snippets: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn find_returns_matching_entry() {
        let cat = sample();
        let entry = cat.find_by_title("Hoisting").unwrap();
        assert_eq!(entry.explanation, "Declarations move, assignments stay.");
    }

    #[test]
    fn find_round_trips_every_title() {
        let cat = sample();
        for title in cat.list_titles().map(String::from).collect::<Vec<_>>() {
            let entry = cat.find_by_title(&title).unwrap();
            assert_eq!(entry.title, title);
        }
    }

    #[test]
    fn find_missing_title_fails() {
        let cat = sample();
        let err = cat.find_by_title("Currying").unwrap_err();
        assert_eq!(err.title, "Currying");
        assert_eq!(err.to_string(), "no entry titled \"Currying\"");
    }

    #[test]
    fn titles_in_document_order() {
        let cat = sample();
        let titles: Vec<&str> = cat.list_titles().collect();
        assert_eq!(titles, vec!["Type Coercion", "Hoisting"]);
        // restartable
        let again: Vec<&str> = cat.list_titles().collect();
        assert_eq!(titles, again);
    }
}
