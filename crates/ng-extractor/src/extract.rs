//! Extraction facade
//!
//! Wires a shared tagger to segmentation and relation derivation.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::relation::{CoOccurrenceDeriver, OrderedSet, TripleSet};
use crate::segment::segment;
use crate::{EntityCategory, EntityTagger};
use ng_core::{ExtractionConfig, Result, Scope, CO_OCCURS_WITH};

/// Named entities of a text grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamedEntities {
    pub people: Vec<String>,
    pub organizations: Vec<String>,
    pub locations: Vec<String>,
}

impl NamedEntities {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.organizations.is_empty() && self.locations.is_empty()
    }
}

/// Text-to-triples pipeline over a shared tagger
#[derive(Clone)]
pub struct Extractor {
    tagger: Arc<dyn EntityTagger>,
    scope: Scope,
    relation: String,
}

impl Extractor {
    /// Create an extractor with sentence scope and `co_occurs_with` triples
    pub fn new(tagger: Arc<dyn EntityTagger>) -> Self {
        Self {
            tagger,
            scope: Scope::Sentence,
            relation: CO_OCCURS_WITH.to_string(),
        }
    }

    /// Create an extractor using the configured scope and relation
    pub fn from_config(tagger: Arc<dyn EntityTagger>, config: &ExtractionConfig) -> Self {
        Self::new(tagger)
            .with_scope(config.scope)
            .with_relation(config.relation.clone())
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = relation.into();
        self
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn tagger(&self) -> &Arc<dyn EntityTagger> {
        &self.tagger
    }

    /// Extract triples using the default scope
    pub fn extract(&self, text: &str) -> Result<TripleSet> {
        self.extract_with_scope(text, self.scope)
    }

    /// Extract triples using an explicit scope
    pub fn extract_with_scope(&self, text: &str, scope: Scope) -> Result<TripleSet> {
        let segments = segment(text, scope, self.tagger.as_ref())?;
        let triples = CoOccurrenceDeriver::new(self.tagger.as_ref())
            .with_relation(self.relation.as_str())
            .derive(&segments)?;

        debug!(
            scope = %scope,
            segments = segments.len(),
            triples = triples.len(),
            "extracted entity relationships"
        );
        Ok(triples)
    }

    /// Group the relational entities of `text` by category
    pub fn named_entities(&self, text: &str) -> Result<NamedEntities> {
        let mut people = OrderedSet::new();
        let mut organizations = OrderedSet::new();
        let mut locations = OrderedSet::new();

        for span in self.tagger.tag(text)? {
            match span.category {
                EntityCategory::Person => people.insert(span.text),
                EntityCategory::Organization => organizations.insert(span.text),
                EntityCategory::Place => locations.insert(span.text),
                EntityCategory::Date | EntityCategory::Misc => false,
            };
        }

        Ok(NamedEntities {
            people: people.into_vec(),
            organizations: organizations.into_vec(),
            locations: locations.into_vec(),
        })
    }
}
