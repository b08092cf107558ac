//! Feed source store
//!
//! Feeds live in a YAML document of the form:
//!
//! ```yaml
//! feeds:
//!   - name: Le Monde
//!     type: rss
//!     url: https://www.lemonde.fr/rss/une.xml
//!     lang: fr
//!     diversity_score: 0.8
//!     perspective: centre-left
//!     region: europe
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use ng_core::{FeedSource, NgError, Result};

#[derive(Debug, Default, Serialize, Deserialize)]
struct FeedDocument {
    #[serde(default)]
    feeds: Vec<FeedSource>,
}

/// File-backed list of feed sources.
///
/// Every call reads the file afresh, so edits made by the batch pipeline or
/// by hand are picked up without a restart. Callers serialize writers.
#[derive(Debug, Clone)]
pub struct FeedStore {
    path: PathBuf,
}

impl FeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All feeds in file order; a missing file is an empty store
    pub fn list(&self) -> Result<Vec<FeedSource>> {
        Ok(self.read()?.feeds)
    }

    /// Append a feed; its name and url must both be unused
    pub fn add(&self, feed: FeedSource) -> Result<FeedSource> {
        feed.validate()?;
        let mut doc = self.read()?;

        if doc.feeds.iter().any(|f| f.name == feed.name) {
            return Err(NgError::Conflict(format!(
                "feed '{}' already exists",
                feed.name
            )));
        }
        if doc.feeds.iter().any(|f| f.url == feed.url) {
            return Err(NgError::Conflict(format!(
                "feed url '{}' already registered",
                feed.url
            )));
        }

        doc.feeds.push(feed.clone());
        self.write(&doc)?;

        info!(name = %feed.name, url = %feed.url, "added feed source");
        Ok(feed)
    }

    /// Remove the feed called `name`, returning it
    pub fn remove(&self, name: &str) -> Result<FeedSource> {
        let mut doc = self.read()?;
        let position = doc
            .feeds
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| NgError::NotFound(format!("feed '{name}'")))?;

        let removed = doc.feeds.remove(position);
        self.write(&doc)?;

        info!(name = %removed.name, "removed feed source");
        Ok(removed)
    }

    fn read(&self) -> Result<FeedDocument> {
        if !self.path.exists() {
            return Ok(FeedDocument::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(FeedDocument::default());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            NgError::Config(format!(
                "invalid feed file {}: {e}",
                self.path.display()
            ))
        })
    }

    fn write(&self, doc: &FeedDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content =
            serde_yaml::to_string(doc).map_err(|e| NgError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn feed(name: &str, url: &str) -> FeedSource {
        FeedSource {
            name: name.to_string(),
            source_type: "rss".to_string(),
            url: url.to_string(),
            lang: "en".to_string(),
            diversity_score: 0.5,
            perspective: "neutral".to_string(),
            region: "global".to_string(),
        }
    }

    fn store(dir: &TempDir) -> FeedStore {
        FeedStore::new(dir.path().join("config").join("feeds.yaml"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).list().unwrap().is_empty());
    }

    #[test]
    fn test_add_creates_file_and_lists() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.add(feed("BBC", "https://bbc.test/rss")).unwrap();
        store.add(feed("NHK", "https://nhk.test/rss")).unwrap();

        assert!(store.path().exists());
        let names: Vec<String> = store.list().unwrap().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["BBC", "NHK"]);

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("feeds:"));
        assert!(content.contains("type: rss"));
    }

    #[test]
    fn test_add_conflicts() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.add(feed("BBC", "https://bbc.test/rss")).unwrap();

        let same_name = store.add(feed("BBC", "https://other.test/rss"));
        assert!(matches!(same_name, Err(NgError::Conflict(_))));

        let same_url = store.add(feed("BBC World", "https://bbc.test/rss"));
        assert!(matches!(same_url, Err(NgError::Conflict(_))));

        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_feed() {
        let dir = TempDir::new().unwrap();
        let result = store(&dir).add(feed("", "https://x.test"));
        assert!(matches!(result, Err(NgError::Config(_))));
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.add(feed("BBC", "https://bbc.test/rss")).unwrap();
        store.add(feed("NHK", "https://nhk.test/rss")).unwrap();

        let removed = store.remove("BBC").unwrap();
        assert_eq!(removed.url, "https://bbc.test/rss");
        assert_eq!(store.list().unwrap().len(), 1);

        assert!(matches!(store.remove("BBC"), Err(NgError::NotFound(_))));
    }

    #[test]
    fn test_reads_hand_written_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feeds.yaml");
        std::fs::write(
            &path,
            "feeds:\n  - name: Le Monde\n    type: rss\n    url: https://lemonde.test/une.xml\n    lang: fr\n",
        )
        .unwrap();

        let feeds = FeedStore::new(&path).list().unwrap();
        assert_eq!(feeds.len(), 1);
        assert_eq!(feeds[0].lang, "fr");
        assert_eq!(feeds[0].diversity_score, 0.0);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feeds.yaml");
        std::fs::write(&path, "feeds: [unclosed").unwrap();

        let result = FeedStore::new(&path).list();
        assert!(matches!(result, Err(NgError::Config(_))));
    }
}
