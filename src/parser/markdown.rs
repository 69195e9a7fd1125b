//! Markdown catalogue parser — line-by-line state machine.
//!
//! `## Title` headings at column zero delimit entries. Prose between
//! headings becomes the explanation; backtick fences become snippets.
//! Fence content is opaque: headings inside a fence never split entries.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::ParseError;
use crate::model::{Catalogue, Entry, Expectation, Snippet};

// -- Regex patterns -----------------------------------------------------------

static RE_ENTRY_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##(?:[ \t]+(.*))?$").unwrap());

static RE_DOC_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[ \t]+(.*))?$").unwrap());

static RE_FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(`{3,})[ \t]*([^`]*)$").unwrap());

static RE_FENCE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(`{3,})[ \t]*$").unwrap());

// Annotation tails, matched after the comment leader:
// `=> text`, `-> text`, and keyword forms like `throws TypeError`.
static RE_ARROW_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:=>|->|→)[ \t]*(.+)$").unwrap());

static RE_KEYWORD_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^((?:throws|logs|prints|output)\b:?[ \t]+.+)$").unwrap());

// -- Parser state -------------------------------------------------------------

#[derive(Default)]
struct ParserState {
    title: Option<String>,
    preamble_lines: Vec<String>,
    entries: Vec<Entry>,
    seen_titles: HashSet<String>,

    current: Option<EntryBuilder>,
    fence: Option<FenceState>,
}

struct EntryBuilder {
    title: String,
    heading_line: usize,
    prose: Vec<String>,
    snippets: Vec<Snippet>,
}

struct FenceState {
    marker_len: usize,
    lang: String,
    open_line: usize,
    lines: Vec<String>,
    /// Fences in the preamble stay prose; only entry fences become snippets.
    in_entry: bool,
}

// -- Public API ---------------------------------------------------------------

/// Parse a markdown catalogue into a Catalogue.
pub fn parse(input: &str) -> Result<Catalogue, ParseError> {
    let mut state = ParserState::default();

    for (idx, line) in input.lines().enumerate() {
        process_line(&mut state, idx + 1, line)?;
    }

    finalize(state)
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ParserState, line_no: usize, line: &str) -> Result<(), ParseError> {
    // 1. Inside a fence: everything is content until the closing marker.
    if let Some(mut fence) = s.fence.take() {
        let closes = RE_FENCE_CLOSE
            .captures(line)
            .map_or(false, |caps| caps[1].len() >= fence.marker_len);
        if closes {
            close_fence(s, fence, line);
        } else {
            if fence.in_entry {
                fence.lines.push(line.to_string());
            } else {
                s.preamble_lines.push(line.to_string());
            }
            s.fence = Some(fence);
        }
        return Ok(());
    }

    // 2. Fence opening.
    if let Some(caps) = RE_FENCE_OPEN.captures(line) {
        let marker_len = caps[1].len();
        let lang = caps[2]
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_string();
        let in_entry = s.current.is_some();
        if !in_entry {
            s.preamble_lines.push(line.to_string());
        }
        s.fence = Some(FenceState {
            marker_len,
            lang,
            open_line: line_no,
            lines: Vec::new(),
            in_entry,
        });
        return Ok(());
    }

    // 3. Entry heading.
    if let Some(caps) = RE_ENTRY_HEADING.captures(line) {
        let title = caps
            .get(1)
            .map(|m| m.as_str().trim())
            .unwrap_or("")
            .to_string();
        if title.is_empty() {
            return Err(ParseError::EmptyTitle { line: line_no });
        }
        if !s.seen_titles.insert(title.clone()) {
            return Err(ParseError::DuplicateTitle {
                title,
                line: line_no,
            });
        }
        finish_entry(s)?;
        s.current = Some(EntryBuilder {
            title,
            heading_line: line_no,
            prose: Vec::new(),
            snippets: Vec::new(),
        });
        return Ok(());
    }

    // 4. Document heading — only recognized before the first entry.
    if s.current.is_none() && s.title.is_none() {
        if let Some(caps) = RE_DOC_HEADING.captures(line) {
            let title = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            if !title.is_empty() {
                s.title = Some(title.to_string());
                return Ok(());
            }
        }
    }

    // 5. Prose.
    match s.current.as_mut() {
        Some(entry) => entry.prose.push(line.to_string()),
        None => s.preamble_lines.push(line.to_string()),
    }
    Ok(())
}

/// Turn a closed fence into a snippet, or keep it as preamble prose.
fn close_fence(s: &mut ParserState, fence: FenceState, close_line: &str) {
    if !fence.in_entry {
        s.preamble_lines.push(close_line.to_string());
        return;
    }
    let source = fence.lines.join("\n");
    let expectations = extract_expectations(&fence.lang, &fence.lines);
    if let Some(entry) = s.current.as_mut() {
        entry.snippets.push(Snippet {
            lang: fence.lang,
            source,
            expectations,
        });
    }
}

/// Seal the entry under construction, enforcing the explanation requirement.
fn finish_entry(s: &mut ParserState) -> Result<(), ParseError> {
    let Some(builder) = s.current.take() else {
        return Ok(());
    };
    let explanation = builder.prose.join("\n").trim().to_string();
    if explanation.is_empty() {
        return Err(ParseError::MissingExplanation {
            title: builder.title,
            line: builder.heading_line,
        });
    }
    s.entries.push(Entry {
        title: builder.title,
        explanation,
        snippets: builder.snippets,
    });
    Ok(())
}

fn finalize(mut s: ParserState) -> Result<Catalogue, ParseError> {
    if let Some(fence) = s.fence.take() {
        return Err(ParseError::UnterminatedFence {
            line: fence.open_line,
        });
    }
    finish_entry(&mut s)?;

    let preamble = s.preamble_lines.join("\n").trim().to_string();
    Ok(Catalogue {
        title: s.title,
        preamble: if preamble.is_empty() {
            None
        } else {
            Some(preamble)
        },
        entries: s.entries,
    })
}

// -- Expectation extraction ---------------------------------------------------

/// Comment leaders to probe for a given fence language tag.
fn comment_leaders(lang: &str) -> &'static [&'static str] {
    match lang.to_ascii_lowercase().as_str() {
        "js" | "jsx" | "javascript" | "ts" | "tsx" | "typescript" | "c" | "cpp" | "c++"
        | "java" | "rust" | "go" | "swift" | "kotlin" | "scala" | "php" => &["//"],
        "sh" | "bash" | "zsh" | "shell" | "console" | "python" | "py" | "ruby" | "rb"
        | "perl" | "yaml" | "toml" | "r" => &["#"],
        "sql" | "lua" | "haskell" | "elm" => &["--"],
        _ => &["//", "#"],
    }
}

fn extract_expectations(lang: &str, lines: &[String]) -> Vec<Expectation> {
    let leaders = comment_leaders(lang);
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            annotation_text(line, leaders).map(|text| Expectation { line: i, text })
        })
        .collect()
}

/// Extract the annotation from one source line, if any.
///
/// The last comment leader on the line wins, so code containing `//` in a
/// string (URLs, regexes) is skipped unless an annotation follows it.
fn annotation_text(line: &str, leaders: &[&str]) -> Option<String> {
    for leader in leaders {
        let Some(pos) = line.rfind(leader) else {
            continue;
        };
        let tail = line[pos + leader.len()..].trim();
        if let Some(caps) = RE_ARROW_TAIL.captures(tail) {
            return Some(caps[1].trim().to_string());
        }
        if let Some(caps) = RE_KEYWORD_TAIL.captures(tail) {
            return Some(caps[1].trim().to_string());
        }
    }
    None
}
