//! Text segmentation
//!
//! Splits source text into the windows within which entities are
//! considered to co-occur.

use ng_core::{Result, Scope};

use crate::{EntityTagger, Segment};

/// Separator between paragraphs
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Split `text` into ordered segments at the given granularity.
///
/// Sentence boundaries come from the tagger; paragraphs are blank-line
/// separated blocks. Blank text yields no segments.
pub fn segment<'a>(text: &'a str, scope: Scope, tagger: &dyn EntityTagger) -> Result<Vec<Segment<'a>>> {
    match scope {
        Scope::Sentence => tagger.sentences(text),
        Scope::Paragraph => Ok(paragraphs(text)),
    }
}

/// Like [`segment`], with the scope given by name
pub fn segment_named<'a>(
    text: &'a str,
    scope: &str,
    tagger: &dyn EntityTagger,
) -> Result<Vec<Segment<'a>>> {
    segment(text, scope.parse()?, tagger)
}

fn paragraphs(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (idx, _) in text.match_indices(PARAGRAPH_DELIMITER) {
        segments.extend(Segment::trimmed(text, start, idx));
        start = idx + PARAGRAPH_DELIMITER.len();
    }
    segments.extend(Segment::trimmed(text, start, text.len()));

    segments
}
