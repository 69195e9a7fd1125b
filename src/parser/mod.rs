//! Parser module — catalogue loading entry point.

pub mod markdown;

use crate::error::ParseError;
use crate::model::Catalogue;

/// Parse a catalogue source document.
///
/// Atomic: returns either a complete catalogue or the first structural error.
/// An empty document is a valid, empty catalogue.
pub fn load(source: &str) -> Result<Catalogue, ParseError> {
    markdown::parse(source)
}
