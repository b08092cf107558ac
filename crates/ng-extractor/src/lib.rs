//! newsgraph Extractor - Entity co-occurrence extraction
//!
//! Splits article text into segments, tags named entities in each segment
//! and derives canonical co-occurrence triples for graph assembly.

use ng_core::Result;
use serde::{Deserialize, Serialize};

pub mod extract;
pub mod relation;
pub mod segment;
pub mod tagger;

pub use extract::{Extractor, NamedEntities};
pub use relation::{CoOccurrenceDeriver, OrderedSet, TripleSet};
pub use segment::segment;
pub use tagger::{GazetteerEntry, GazetteerTagger};

/// Category assigned to a tagged span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EntityCategory {
    Person,
    Organization,
    Place,
    Date,
    Misc,
}

impl EntityCategory {
    /// Map a recognizer label onto a category; unknown labels become `Misc`
    pub fn from_label(label: &str) -> Self {
        Self::parse_label(label).unwrap_or(Self::Misc)
    }

    /// Strict label lookup
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "PERSON" | "PER" => Some(Self::Person),
            "ORG" | "ORGANIZATION" => Some(Self::Organization),
            "GPE" | "LOC" | "PLACE" | "LOCATION" => Some(Self::Place),
            "DATE" | "TIME" => Some(Self::Date),
            "MISC" => Some(Self::Misc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Organization => "ORG",
            Self::Place => "PLACE",
            Self::Date => "DATE",
            Self::Misc => "MISC",
        }
    }

    /// Whether spans of this category take part in co-occurrence
    pub fn is_relational(&self) -> bool {
        matches!(self, Self::Person | Self::Organization | Self::Place)
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for EntityCategory {
    type Error = String;

    fn try_from(label: String) -> std::result::Result<Self, Self::Error> {
        Self::parse_label(&label).ok_or_else(|| format!("unknown entity category '{label}'"))
    }
}

impl From<EntityCategory> for String {
    fn from(category: EntityCategory) -> Self {
        category.as_str().to_string()
    }
}

/// Entity span produced by a tagger, scoped to the text it was tagged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSpan {
    pub text: String,
    pub category: EntityCategory,
    /// Byte offsets within the tagged text
    pub start: usize,
    pub end: usize,
}

/// Contiguous slice of source text used as a co-occurrence window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the source
    pub offset: usize,
}

impl<'a> Segment<'a> {
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Trimmed sub-slice of `source[start..end]`, or `None` if it is blank
    pub fn trimmed(source: &'a str, start: usize, end: usize) -> Option<Self> {
        let raw = &source[start..end];
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let leading = raw.len() - raw.trim_start().len();
        Some(Self::new(text, start + leading))
    }
}

/// Named entity recognizer capability.
///
/// Implementations are expected to be deterministic and to be shared
/// read-only across threads once constructed.
pub trait EntityTagger: Send + Sync {
    /// Tag entity spans in `text`
    fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>>;

    /// Split `text` into sentences
    fn sentences<'a>(&self, text: &'a str) -> Result<Vec<Segment<'a>>>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!(EntityCategory::from_label("PERSON"), EntityCategory::Person);
        assert_eq!(EntityCategory::from_label("org"), EntityCategory::Organization);
        assert_eq!(EntityCategory::from_label("GPE"), EntityCategory::Place);
        assert_eq!(EntityCategory::from_label("LOC"), EntityCategory::Place);
        assert_eq!(EntityCategory::from_label("DATE"), EntityCategory::Date);
        assert_eq!(EntityCategory::from_label("NORP"), EntityCategory::Misc);
    }

    #[test]
    fn test_category_deserialize_is_strict() {
        let parsed: EntityCategory = serde_yaml::from_str("gpe").unwrap();
        assert_eq!(parsed, EntityCategory::Place);
        let parsed: EntityCategory = serde_yaml::from_str("MISC").unwrap();
        assert_eq!(parsed, EntityCategory::Misc);

        let err = serde_yaml::from_str::<EntityCategory>("PERSN").unwrap_err();
        assert!(err.to_string().contains("unknown entity category 'PERSN'"));
    }

    #[test]
    fn test_relational_categories() {
        assert!(EntityCategory::Person.is_relational());
        assert!(EntityCategory::Organization.is_relational());
        assert!(EntityCategory::Place.is_relational());
        assert!(!EntityCategory::Date.is_relational());
        assert!(!EntityCategory::Misc.is_relational());
    }

    #[test]
    fn test_segment_trimmed_offsets() {
        let source = "  Alice met Bob.  ";
        let segment = Segment::trimmed(source, 0, source.len()).unwrap();
        assert_eq!(segment.text, "Alice met Bob.");
        assert_eq!(segment.offset, 2);
        assert!(Segment::trimmed(source, 16, 18).is_none());
    }
}
