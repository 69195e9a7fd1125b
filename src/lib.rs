//! casebook — parse and render catalogues of language edge-case notes.
//!
//! A catalogue is a markdown document where every `## Title` heading opens
//! one topic: prose explanation plus fenced code snippets, with expected
//! output noted in inline comments (`// => ...`). Loading produces an
//! immutable [`Catalogue`] that can be queried by title, enumerated in
//! document order, and rendered as markdown, html, or json.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod toc;

pub use error::{NotFoundError, ParseError};
pub use model::{Catalogue, Entry, Expectation, Snippet};
pub use parser::load;
