//! Co-occurrence relation derivation
//!
//! Reduces the tagged spans of each segment to a duplicate-free entity list
//! and emits one canonical triple per unordered entity pair. Triples are
//! accumulated into a document-wide set, so a pair observed in several
//! segments contributes a single triple.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::debug;

use crate::{EntityTagger, Segment, TaggedSpan};
use ng_core::{Result, Triple, CO_OCCURS_WITH};

// ============================================================================
// Ordered set
// ============================================================================

/// Insertion-ordered set: a sequence plus a membership index.
///
/// Equality is set equality; iteration follows first insertion.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    members: HashSet<T>,
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Append `item` unless already present; returns whether it was added
    pub fn insert(&mut self, item: T) -> bool {
        if self.members.contains(&item) {
            return false;
        }
        self.members.insert(item.clone());
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &T) -> bool {
        self.members.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Eq + Hash + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<T: Eq + Hash + Clone> Eq for OrderedSet<T> {}

impl<T: Eq + Hash + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Document-wide set of canonical triples
pub type TripleSet = OrderedSet<Triple>;

// ============================================================================
// Derivation steps
// ============================================================================

/// Relational entity strings of one segment, first-seen order, no duplicates
pub fn segment_entities(spans: &[TaggedSpan]) -> Vec<String> {
    spans
        .iter()
        .filter(|span| span.category.is_relational())
        .map(|span| span.text.clone())
        .collect::<OrderedSet<String>>()
        .into_vec()
}

/// Canonical triples for every pair of distinct positions `i < j`
pub fn pair_triples<'a>(entities: &'a [String], relation: &'a str) -> impl Iterator<Item = Triple> + 'a {
    entities.iter().enumerate().flat_map(move |(i, a)| {
        entities[i + 1..]
            .iter()
            .filter_map(move |b| Triple::new(a.as_str(), relation, b.as_str()))
    })
}

// ============================================================================
// Deriver
// ============================================================================

/// Derives co-occurrence triples from segmented text
pub struct CoOccurrenceDeriver<'t> {
    tagger: &'t dyn EntityTagger,
    relation: String,
}

impl<'t> CoOccurrenceDeriver<'t> {
    /// Create a deriver emitting `co_occurs_with` triples
    pub fn new(tagger: &'t dyn EntityTagger) -> Self {
        Self {
            tagger,
            relation: CO_OCCURS_WITH.to_string(),
        }
    }

    /// Use a different relation label
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = relation.into();
        self
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Tag each segment and accumulate the pairwise triples
    pub fn derive(&self, segments: &[Segment<'_>]) -> Result<TripleSet> {
        let mut triples = TripleSet::new();

        for (index, segment) in segments.iter().enumerate() {
            let spans = self.tagger.tag(segment.text)?;
            let entities = segment_entities(&spans);
            let before = triples.len();
            triples.extend(pair_triples(&entities, &self.relation));

            debug!(
                segment = index,
                spans = spans.len(),
                entities = entities.len(),
                new_triples = triples.len() - before,
                "derived segment relations"
            );
        }

        Ok(triples)
    }
}

// ============================================================================
// Tests
// ============================================================================
