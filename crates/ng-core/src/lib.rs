//! newsgraph Core - Domain models, errors and shared types
//!
//! This crate defines the abstractions shared across the newsgraph workspace:
//! - Error types
//! - Co-occurrence triples and segmentation scope
//! - Feed source and digest records exchanged with the I/O collaborators
//! - Configuration management

pub mod config;

pub use config::{
    AppConfig, ConfigError, DigestConfig, ExtractionConfig, FeedsConfig, LoggingConfig,
    PipelineConfig, ServerConfig,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for newsgraph operations
#[derive(Error, Debug)]
pub enum NgError {
    #[error("Unsupported segmentation scope: {0}")]
    UnsupportedScope(String),

    #[error("Tagger error: {0}")]
    Tagger(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConfigError> for NgError {
    fn from(err: ConfigError) -> Self {
        NgError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for NgError {
    fn from(err: serde_json::Error) -> Self {
        NgError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NgError>;

// ============================================================================
// Segmentation Scope
// ============================================================================

/// Granularity of the co-occurrence window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// One segment per sentence, as detected by the tagger
    #[default]
    Sentence,
    /// One segment per blank-line separated block
    Paragraph,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = NgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sentence" => Ok(Self::Sentence),
            "paragraph" => Ok(Self::Paragraph),
            _ => Err(NgError::UnsupportedScope(s.to_string())),
        }
    }
}

// ============================================================================
// Triples
// ============================================================================

/// Relation label used for plain co-occurrence
pub const CO_OCCURS_WITH: &str = "co_occurs_with";

/// A canonical, undirected relation between two entities.
///
/// The subject always sorts strictly before the object, so `(A, B)` and
/// `(B, A)` have a single representation. Fields are private; the only way
/// to build a triple is through the canonicalizing constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
pub struct Triple {
    /// Lexically smaller entity
    #[schema(example = "Alice")]
    subject: String,

    /// Relation label
    #[schema(example = "co_occurs_with")]
    relation: String,

    /// Lexically larger entity
    #[schema(example = "Bob")]
    object: String,
}

impl Triple {
    /// Build a triple for an unordered pair.
    ///
    /// Returns `None` when both sides are the same string.
    pub fn new(
        a: impl Into<String>,
        relation: impl Into<String>,
        b: impl Into<String>,
    ) -> Option<Self> {
        let (a, b) = (a.into(), b.into());
        let (subject, object) = match a.cmp(&b) {
            std::cmp::Ordering::Less => (a, b),
            std::cmp::Ordering::Greater => (b, a),
            std::cmp::Ordering::Equal => return None,
        };

        Some(Self {
            subject,
            relation: relation.into(),
            object,
        })
    }

    /// Build a `co_occurs_with` triple
    pub fn co_occurrence(a: impl Into<String>, b: impl Into<String>) -> Option<Self> {
        Self::new(a, CO_OCCURS_WITH, b)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    /// The normalized pair this triple relates
    pub fn pair(&self) -> (&str, &str) {
        (&self.subject, &self.object)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.relation, self.object)
    }
}

// ============================================================================
// Collaborator Records
// ============================================================================

/// A configured news feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedSource {
    /// Unique display name
    #[schema(example = "Le Monde")]
    pub name: String,

    /// Feed kind (e.g. "rss")
    #[serde(rename = "type")]
    #[schema(example = "rss")]
    pub source_type: String,

    /// Feed URL, unique across the store
    #[schema(example = "https://www.lemonde.fr/rss/une.xml")]
    pub url: String,

    /// Language code of the articles
    #[serde(default)]
    #[schema(example = "fr")]
    pub lang: String,

    /// Editorial diversity weighting
    #[serde(default)]
    pub diversity_score: f64,

    /// Editorial perspective
    #[serde(default)]
    pub perspective: String,

    /// Geographic region covered
    #[serde(default)]
    pub region: String,
}

impl FeedSource {
    /// Check required fields
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NgError::Config("feed name cannot be empty".to_string()));
        }
        if self.url.trim().is_empty() {
            return Err(NgError::Config("feed url cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// One summarized article in a digest artifact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct DigestRecord {
    pub title: String,
    pub source: String,
    pub summary: String,
    pub url: String,
    pub published: String,
}

// ============================================================================
// Tests
// ============================================================================
