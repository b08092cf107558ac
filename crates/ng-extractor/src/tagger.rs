//! Rule-based entity tagger
//!
//! Combines a gazetteer of known names with regex patterns, and provides
//! the sentence boundary detection used for sentence-scoped segmentation.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::{EntityCategory, EntityTagger, Segment, TaggedSpan};
use ng_core::{NgError, Result};

/// Abbreviations whose period never ends a sentence
const TITLE_ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Mt", "Gen", "Gov", "Sen", "Rep", "Col",
    "Lt", "Sgt", "Capt", "No", "vs", "etc", "approx",
];

/// Abbreviations that end a sentence when a capitalized word follows
const SUFFIX_ABBREVIATIONS: &[&str] = &["Inc", "Corp", "Ltd", "Co"];

/// Capitalized words that never open a suffix-pattern name
const LEADING_STOPWORDS: &[&str] = &[
    "The", "A", "An", "On", "In", "At", "By", "For", "From", "Of", "To", "With", "And", "But",
    "Or", "As", "After", "Before", "During", "Since", "Last", "Next", "This", "That", "When",
    "While", "Yesterday", "Today", "Tomorrow", "Monday", "Tuesday", "Wednesday", "Thursday",
    "Friday", "Saturday", "Sunday", "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Closing punctuation that stays attached to the sentence it ends
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201D}', '\u{2019}'];

// ============================================================================
// Gazetteer
// ============================================================================

/// A known name and its surface variants
#[derive(Debug, Clone, Deserialize)]
pub struct GazetteerEntry {
    pub term: String,
    pub category: EntityCategory,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GazetteerFile {
    entries: Vec<GazetteerEntry>,
}

/// How a candidate span was found; dictionary spans win any overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchSource {
    Dictionary,
    Pattern,
}

#[derive(Debug)]
struct Candidate {
    start: usize,
    end: usize,
    category: EntityCategory,
    source: MatchSource,
}

/// Regex rule; `strip_leading` drops stopwords opening a match and
/// requires at least two words to remain
struct PatternRule {
    regex: Regex,
    category: EntityCategory,
    strip_leading: bool,
}

/// How a period after a word affects sentence splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PeriodKind {
    Terminal,
    /// Titles and single-letter initials
    Title,
    /// Corporate suffixes and dotted initialisms such as "U.S."
    Ambiguous,
}

/// Rule-based tagger using a gazetteer and regex patterns.
///
/// Construction compiles every pattern and builds the term index once;
/// the tagger is immutable afterwards and can be shared behind an `Arc`.
pub struct GazetteerTagger {
    /// Pattern rules; capture group 1 marks the span when present
    patterns: Vec<PatternRule>,
    /// Surface form -> category
    terms: HashMap<String, EntityCategory>,
}

impl GazetteerTagger {
    /// Create a tagger with the built-in news gazetteer and patterns
    pub fn new() -> Self {
        let mut tagger = Self::empty();
        tagger.init_news_patterns();
        tagger.init_news_gazetteer();
        tagger
    }

    /// Create a tagger with no rules at all
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            terms: HashMap::new(),
        }
    }

    /// Built-in tagger extended with entries from a YAML gazetteer file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file: GazetteerFile = serde_yaml::from_str(&content).map_err(|e| {
            NgError::Config(format!("invalid gazetteer {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), entries = file.entries.len(), "loaded gazetteer");
        Ok(Self::new().with_entries(file.entries))
    }

    /// Add gazetteer entries; later entries override earlier categories
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = GazetteerEntry>) -> Self {
        for entry in entries {
            let aliases: Vec<&str> = entry.aliases.iter().map(String::as_str).collect();
            self.add_term(&entry.term, entry.category, aliases);
        }
        self
    }

    /// Add a pattern rule; invalid expressions are rejected
    pub fn with_pattern(mut self, pattern: &str, category: EntityCategory) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| NgError::Config(format!("invalid pattern {pattern:?}: {e}")))?;
        self.patterns.push(PatternRule {
            regex,
            category,
            strip_leading: false,
        });
        Ok(self)
    }

    /// Number of surface forms known to the gazetteer
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    fn init_news_patterns(&mut self) {
        // Titles followed by a capitalized name
        self.add_pattern(
            r"\b(?:President|Prime Minister|Chancellor|Senator|Governor|Minister|Secretary|CEO|Judge|Mr\.|Mrs\.|Ms\.|Dr\.)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,2})",
            EntityCategory::Person,
            false,
        );

        // Capitalized names with a corporate or institutional suffix
        self.add_pattern(
            r"\b((?:[A-Z][A-Za-z&]+\s+){1,3}(?:Inc|Corp|Corporation|Ltd|LLC|Group|Bank|University|Institute|Agency|Ministry|Council|Party)\b)",
            EntityCategory::Organization,
            true,
        );

        // Dates
        self.add_pattern(r"\b\d{4}-\d{2}-\d{2}\b", EntityCategory::Date, false);
        self.add_pattern(
            r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?",
            EntityCategory::Date,
            false,
        );
        self.add_pattern(
            r"\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b",
            EntityCategory::Date,
            false,
        );
    }

    fn init_news_gazetteer(&mut self) {
        use EntityCategory::{Organization, Person, Place};

        // People
        self.add_term("Joe Biden", Person, vec![]);
        self.add_term("Kamala Harris", Person, vec![]);
        self.add_term("Donald Trump", Person, vec![]);
        self.add_term("Elon Musk", Person, vec![]);
        self.add_term("Bill Gates", Person, vec![]);
        self.add_term("Tim Cook", Person, vec![]);
        self.add_term("Sundar Pichai", Person, vec![]);
        self.add_term("Emmanuel Macron", Person, vec![]);
        self.add_term("Olaf Scholz", Person, vec![]);
        self.add_term("Xi Jinping", Person, vec![]);
        self.add_term("Vladimir Putin", Person, vec![]);
        self.add_term("Volodymyr Zelensky", Person, vec![]);
        self.add_term("Narendra Modi", Person, vec![]);

        // Organizations
        self.add_term("Apple", Organization, vec![]);
        self.add_term("Google", Organization, vec!["Alphabet"]);
        self.add_term("Microsoft", Organization, vec![]);
        self.add_term("Amazon", Organization, vec![]);
        self.add_term("Meta", Organization, vec!["Facebook"]);
        self.add_term("Tesla", Organization, vec![]);
        self.add_term("OpenAI", Organization, vec![]);
        self.add_term("NATO", Organization, vec![]);
        self.add_term("United Nations", Organization, vec!["UN"]);
        self.add_term("European Union", Organization, vec!["EU"]);
        self.add_term("World Health Organization", Organization, vec!["WHO"]);
        self.add_term("Federal Reserve", Organization, vec!["the Fed"]);
        self.add_term("International Monetary Fund", Organization, vec!["IMF"]);
        self.add_term("World Bank", Organization, vec![]);
        self.add_term("Reuters", Organization, vec![]);

        // Places
        self.add_term("Washington D.C.", Place, vec!["Washington, D.C."]);
        self.add_term("Washington", Place, vec![]);
        self.add_term("New York", Place, vec![]);
        self.add_term("London", Place, vec![]);
        self.add_term("Paris", Place, vec![]);
        self.add_term("Berlin", Place, vec![]);
        self.add_term("Brussels", Place, vec![]);
        self.add_term("Geneva", Place, vec![]);
        self.add_term("Moscow", Place, vec![]);
        self.add_term("Kyiv", Place, vec![]);
        self.add_term("Beijing", Place, vec![]);
        self.add_term("Tokyo", Place, vec![]);
        self.add_term("United States", Place, vec!["U.S.", "USA"]);
        self.add_term("United Kingdom", Place, vec!["UK", "Britain"]);
        self.add_term("China", Place, vec![]);
        self.add_term("Russia", Place, vec![]);
        self.add_term("Ukraine", Place, vec![]);
        self.add_term("France", Place, vec![]);
        self.add_term("Germany", Place, vec![]);
        self.add_term("India", Place, vec![]);
        self.add_term("Japan", Place, vec![]);
        self.add_term("Europe", Place, vec![]);
    }

    /// Add a regex pattern
    fn add_pattern(&mut self, pattern: &str, category: EntityCategory, strip_leading: bool) {
        if let Ok(regex) = Regex::new(pattern) {
            self.patterns.push(PatternRule {
                regex,
                category,
                strip_leading,
            });
        }
    }

    /// Add a gazetteer term and its aliases
    fn add_term(&mut self, term: &str, category: EntityCategory, aliases: Vec<&str>) {
        for surface in std::iter::once(term).chain(aliases) {
            let surface = surface.trim();
            if !surface.is_empty() {
                self.terms.insert(surface.to_string(), category);
            }
        }
    }

    fn match_patterns(&self, text: &str, out: &mut Vec<Candidate>) {
        for rule in &self.patterns {
            for caps in rule.regex.captures_iter(text) {
                let Some(mat) = caps.get(1).or_else(|| caps.get(0)) else {
                    continue;
                };
                let mut start = mat.start();
                if rule.strip_leading {
                    match leading_stopword_offset(mat.as_str()) {
                        Some(offset) => start += offset,
                        None => continue,
                    }
                }
                if start == mat.end() {
                    continue;
                }
                out.push(Candidate {
                    start,
                    end: mat.end(),
                    category: rule.category,
                    source: MatchSource::Pattern,
                });
            }
        }
    }

    fn match_dictionary(&self, text: &str, out: &mut Vec<Candidate>) {
        for (term, category) in &self.terms {
            for (start, _) in text.match_indices(term.as_str()) {
                let end = start + term.len();
                if is_word_boundary(text, start, end) {
                    out.push(Candidate {
                        start,
                        end,
                        category: *category,
                        source: MatchSource::Dictionary,
                    });
                }
            }
        }
    }

    /// Dictionary spans first, then pattern spans that overlap none of them;
    /// each group keeps its leftmost-longest non-overlapping candidates
    fn resolve_overlaps(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let (dictionary, patterns): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|c| c.source == MatchSource::Dictionary);

        let mut result = leftmost_longest(dictionary);
        let patterns = patterns
            .into_iter()
            .filter(|p| !result.iter().any(|d| p.start < d.end && d.start < p.end))
            .collect();
        result.extend(leftmost_longest(patterns));
        result.sort_by_key(|c| c.start);
        result
    }

    /// Classify the period that follows the last word of `before`
    fn classify_period(&self, before: &str) -> PeriodKind {
        let word = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        if word.is_empty() {
            return PeriodKind::Terminal;
        }
        if TITLE_ABBREVIATIONS.contains(&word) {
            return PeriodKind::Title;
        }
        if SUFFIX_ABBREVIATIONS.contains(&word) || word.contains('.') {
            return PeriodKind::Ambiguous;
        }
        // Single-letter initial such as "J."
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_uppercase() => PeriodKind::Title,
            _ => PeriodKind::Terminal,
        }
    }

    /// Whether a known term covers both the period at `period` and the
    /// text resuming at `resume`
    fn term_spans_break(&self, text: &str, period: usize, resume: usize) -> bool {
        self.terms
            .keys()
            .filter(|term| term.contains(". "))
            .any(|term| {
                text.match_indices(term.as_str()).any(|(start, _)| {
                    let end = start + term.len();
                    start <= period && end > resume && is_word_boundary(text, start, end)
                })
            })
    }
}

impl Default for GazetteerTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityTagger for GazetteerTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>> {
        let mut candidates = Vec::new();
        self.match_dictionary(text, &mut candidates);
        self.match_patterns(text, &mut candidates);

        let spans = self
            .resolve_overlaps(candidates)
            .into_iter()
            .map(|c| TaggedSpan {
                text: text[c.start..c.end].to_string(),
                category: c.category,
                start: c.start,
                end: c.end,
            })
            .collect();

        Ok(spans)
    }

    fn sentences<'a>(&self, text: &'a str) -> Result<Vec<Segment<'a>>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut segments = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            if !matches!(ch, '.' | '!' | '?') {
                i += 1;
                continue;
            }

            // Absorb runs like "?!" or '."' into the sentence they end
            let mut j = i + 1;
            while j < chars.len() && (matches!(chars[j].1, '.' | '!' | '?') || CLOSERS.contains(&chars[j].1)) {
                j += 1;
            }
            let end = chars.get(j).map(|(p, _)| *p).unwrap_or(text.len());
            let at_gap = chars.get(j).map(|(_, c)| c.is_whitespace()).unwrap_or(true);

            let rest = &text[end..];
            let held_by_period = ch == '.'
                && match self.classify_period(&text[start..pos]) {
                    PeriodKind::Terminal => false,
                    PeriodKind::Title => true,
                    PeriodKind::Ambiguous => {
                        !next_word_is_capitalized(rest) || self.term_spans_break(text, pos, end)
                    }
                };

            let is_break = at_gap && !held_by_period && !next_word_is_lowercase(rest);

            if is_break {
                segments.extend(Segment::trimmed(text, start, end));
                start = end;
            }
            i = j;
        }

        segments.extend(Segment::trimmed(text, start, text.len()));
        Ok(segments)
    }
}

/// Whether `text[start..end]` is delimited by non-alphanumeric characters
fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

fn next_word_is_lowercase(rest: &str) -> bool {
    rest.trim_start()
        .chars()
        .next()
        .is_some_and(char::is_lowercase)
}

fn next_word_is_capitalized(rest: &str) -> bool {
    rest.trim_start()
        .chars()
        .next()
        .is_some_and(char::is_uppercase)
}

/// Sort by start, longer spans first, and drop anything overlapping an earlier pick
fn leftmost_longest(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then((b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut covered_until = 0;
    let mut result = Vec::new();
    for candidate in candidates {
        if candidate.start < covered_until {
            continue;
        }
        covered_until = candidate.end;
        result.push(candidate);
    }
    result
}

/// Byte offset of the first word of `span` that is not a leading stopword,
/// or `None` when fewer than two words remain from there
fn leading_stopword_offset(span: &str) -> Option<usize> {
    let mut rest = span.trim_start();
    loop {
        let word = rest.split_whitespace().next()?;
        if !LEADING_STOPWORDS.contains(&word) {
            break;
        }
        rest = rest[word.len()..].trim_start();
    }
    (rest.split_whitespace().count() >= 2).then(|| span.len() - rest.len())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn texts(spans: &[TaggedSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_tag_news_sample() {
        let tagger = GazetteerTagger::new();
        let text = "President Joe Biden met with executives from Apple and Google in Washington D.C. on Monday.";
        let spans = tagger.tag(text).unwrap();

        assert_eq!(
            texts(&spans),
            vec!["Joe Biden", "Apple", "Google", "Washington D.C.", "Monday"]
        );
        assert_eq!(spans[0].category, EntityCategory::Person);
        assert_eq!(spans[1].category, EntityCategory::Organization);
        assert_eq!(spans[3].category, EntityCategory::Place);
        assert_eq!(spans[4].category, EntityCategory::Date);
    }

    #[test]
    fn test_tag_offsets_match_text() {
        let tagger = GazetteerTagger::new();
        let text = "Elon Musk and Bill Gates also attended the event.";
        for span in tagger.tag(text).unwrap() {
            assert_eq!(&text[span.start..span.end], span.text);
        }
    }

    #[test]
    fn test_tag_respects_word_boundaries() {
        let tagger = GazetteerTagger::new();
        let spans = tagger.tag("Pineapple growers met in Parisian cafes.").unwrap();
        assert!(spans.is_empty(), "unexpected spans: {:?}", spans);
    }

    #[test]
    fn test_title_pattern_tags_unknown_person() {
        let tagger = GazetteerTagger::new();
        let spans = tagger.tag("Senator Maria Lopez spoke in Berlin.").unwrap();

        assert_eq!(texts(&spans), vec!["Maria Lopez", "Berlin"]);
        assert_eq!(spans[0].category, EntityCategory::Person);
    }

    #[test]
    fn test_suffix_pattern_tags_organization() {
        let tagger = GazetteerTagger::new();
        let spans = tagger.tag("Shares of Northwind Trading Corp fell.").unwrap();

        assert_eq!(texts(&spans), vec!["Northwind Trading Corp"]);
        assert_eq!(spans[0].category, EntityCategory::Organization);
    }

    #[test]
    fn test_suffix_pattern_skips_leading_stopwords() {
        let tagger = GazetteerTagger::new();

        let spans = tagger.tag("On Monday Northwind Trading Corp hired Tim Cook.").unwrap();
        assert_eq!(texts(&spans), vec!["Monday", "Northwind Trading Corp", "Tim Cook"]);
        assert_eq!(spans[1].category, EntityCategory::Organization);

        let spans = tagger.tag("The Bank raised rates.").unwrap();
        assert!(spans.is_empty(), "unexpected spans: {:?}", spans);
    }

    #[test]
    fn test_dictionary_terms_win_over_patterns() {
        let tagger = GazetteerTagger::new();

        let spans = tagger.tag("The World Bank met NATO in Geneva.").unwrap();
        assert_eq!(texts(&spans), vec!["World Bank", "NATO", "Geneva"]);
        assert_eq!(spans[0].category, EntityCategory::Organization);

        let spans = tagger.tag("Reuters Federal Reserve Bank officials met.").unwrap();
        assert_eq!(texts(&spans), vec!["Reuters", "Federal Reserve"]);
    }

    #[test]
    fn test_custom_entries_and_patterns() {
        let tagger = GazetteerTagger::empty()
            .with_entries(vec![GazetteerEntry {
                term: "Alice".to_string(),
                category: EntityCategory::Person,
                aliases: vec!["Ally".to_string()],
            }])
            .with_pattern(r"\bAcme\b", EntityCategory::Organization)
            .unwrap();

        let spans = tagger.tag("Ally joined Acme.").unwrap();
        assert_eq!(texts(&spans), vec!["Ally", "Acme"]);
        assert_eq!(tagger.term_count(), 2);

        assert!(GazetteerTagger::empty().with_pattern("(", EntityCategory::Misc).is_err());
    }

    #[test]
    fn test_gazetteer_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "entries:\n  - term: Carol Danvers\n    category: PERSON\n  - term: Gotham\n    category: GPE\n    aliases: [\"Gotham City\"]"
        )
        .unwrap();

        let tagger = GazetteerTagger::from_yaml_file(file.path()).unwrap();
        let spans = tagger.tag("Carol Danvers flew over Gotham City and Paris.").unwrap();

        assert_eq!(texts(&spans), vec!["Carol Danvers", "Gotham City", "Paris"]);
        assert_eq!(spans[1].category, EntityCategory::Place);
    }

    #[test]
    fn test_gazetteer_yaml_rejects_unknown_category() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "entries:\n  - term: Carol Danvers\n    category: PERSN").unwrap();

        let err = GazetteerTagger::from_yaml_file(file.path()).err().unwrap();
        match err {
            NgError::Config(message) => assert!(message.contains("PERSN"), "{message}"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_gazetteer_yaml_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "entries: [[[").unwrap();
        let err = GazetteerTagger::from_yaml_file(file.path()).err().unwrap();
        assert!(matches!(err, NgError::Config(_)));
    }

    #[test]
    fn test_sentences_basic() {
        let tagger = GazetteerTagger::new();
        let sentences = tagger
            .sentences("Alice met Bob in Paris. Bob called Carol.")
            .unwrap();

        let texts: Vec<&str> = sentences.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["Alice met Bob in Paris.", "Bob called Carol."]);
        assert_eq!(sentences[1].offset, 24);
    }

    #[test]
    fn test_sentences_abbreviations_and_decimals() {
        let tagger = GazetteerTagger::new();
        let text = "Dr. Smith flew to Washington D.C. on Monday. Rates rose 3.5 percent! Did J. Doe agree?";
        let texts: Vec<&str> = tagger.sentences(text).unwrap().iter().map(|s| s.text).collect();

        assert_eq!(
            texts,
            vec![
                "Dr. Smith flew to Washington D.C. on Monday.",
                "Rates rose 3.5 percent!",
                "Did J. Doe agree?",
            ]
        );
    }

    #[test]
    fn test_sentences_end_after_corporate_suffix() {
        let tagger = GazetteerTagger::new();
        let text = "Tim Cook runs Apple Inc. Elon Musk runs Tesla.";
        let texts: Vec<&str> = tagger.sentences(text).unwrap().iter().map(|s| s.text).collect();

        assert_eq!(texts, vec!["Tim Cook runs Apple Inc.", "Elon Musk runs Tesla."]);

        let text = "Shares of Acme Corp. rose 4 percent.";
        assert_eq!(tagger.sentences(text).unwrap().len(), 1);
    }

    #[test]
    fn test_sentences_end_after_dotted_initialism() {
        let tagger = GazetteerTagger::new();
        let text = "Tim Cook flew to the U.S. Elon Musk stayed in Berlin.";
        let texts: Vec<&str> = tagger.sentences(text).unwrap().iter().map(|s| s.text).collect();

        assert_eq!(
            texts,
            vec!["Tim Cook flew to the U.S.", "Elon Musk stayed in Berlin."]
        );
    }

    #[test]
    fn test_sentences_keep_terms_spanning_a_period() {
        let tagger = GazetteerTagger::new().with_entries(vec![GazetteerEntry {
            term: "U.S. Steel".to_string(),
            category: EntityCategory::Organization,
            aliases: vec![],
        }]);
        let text = "Workers at U.S. Steel went on strike. Tim Cook stayed home.";
        let texts: Vec<&str> = tagger.sentences(text).unwrap().iter().map(|s| s.text).collect();

        assert_eq!(
            texts,
            vec!["Workers at U.S. Steel went on strike.", "Tim Cook stayed home."]
        );
    }

    #[test]
    fn test_sentences_closing_quotes_and_no_terminator() {
        let tagger = GazetteerTagger::new();
        let text = "He said \"stop.\" Then he left\n\nwithout a word";
        let texts: Vec<&str> = tagger.sentences(text).unwrap().iter().map(|s| s.text).collect();

        assert_eq!(texts, vec!["He said \"stop.\"", "Then he left\n\nwithout a word"]);
    }

    #[test]
    fn test_sentences_empty() {
        let tagger = GazetteerTagger::new();
        assert!(tagger.sentences("").unwrap().is_empty());
        assert!(tagger.sentences("   \n ").unwrap().is_empty());
    }
}
