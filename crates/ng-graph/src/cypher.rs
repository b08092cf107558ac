//! Graph-creation statement export
//!
//! Emits one Cypher `MERGE` statement per triple. Each statement upserts
//! both entity nodes and the relationship between them, so replaying the
//! output against a property-graph store is idempotent.

use ng_core::{ExtractionConfig, Triple};

/// Relationship type used when a relation has no usable identifier characters
const FALLBACK_TYPE: &str = "RELATED_TO";

/// Turns triples into Cypher `MERGE` statements
#[derive(Debug, Clone)]
pub struct StatementExporter {
    node_label: String,
    escape: bool,
}

impl StatementExporter {
    /// Exporter for `Entity` nodes with escaping enabled
    pub fn new() -> Self {
        Self {
            node_label: "Entity".to_string(),
            escape: true,
        }
    }

    /// Exporter using the configured node label and escaping mode
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_node_label(config.node_label.clone())
            .with_escaping(config.escape_statements)
    }

    pub fn with_node_label(mut self, label: impl Into<String>) -> Self {
        self.node_label = label.into();
        self
    }

    /// Toggle escaping of entity text and identifier sanitizing.
    ///
    /// With escaping off, entity text is embedded verbatim; a quote in an
    /// entity name then produces a malformed statement.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn escapes(&self) -> bool {
        self.escape
    }

    /// Statement for a single triple
    pub fn statement(&self, triple: &Triple) -> String {
        let label = self.identifier(&self.node_label);
        let rel_type = self.identifier(&triple.relation().to_uppercase());
        let subject = self.literal(triple.subject());
        let object = self.literal(triple.object());

        format!(
            "MERGE (a:{label} {{name: '{subject}'}}) MERGE (b:{label} {{name: '{object}'}}) MERGE (a)-[:{rel_type}]->(b)"
        )
    }

    /// One statement per triple, in input order
    pub fn statements<'a>(&self, triples: impl IntoIterator<Item = &'a Triple>) -> Vec<String> {
        triples.into_iter().map(|t| self.statement(t)).collect()
    }

    fn literal(&self, text: &str) -> String {
        if !self.escape {
            return text.to_string();
        }
        text.replace('\\', "\\\\").replace('\'', "\\'")
    }

    fn identifier(&self, name: &str) -> String {
        if !self.escape {
            return name.to_string();
        }
        let cleaned: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        if cleaned.trim_matches('_').is_empty() {
            FALLBACK_TYPE.to_string()
        } else {
            cleaned
        }
    }
}

impl Default for StatementExporter {
    fn default() -> Self {
        Self::new()
    }
}
