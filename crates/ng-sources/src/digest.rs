//! Digest artifacts
//!
//! The batch pipeline writes one JSON array of [`DigestRecord`]s per run,
//! named `<prefix>YYYY-MM-DD.json`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use ng_core::{DigestConfig, DigestRecord, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only view over a directory of dated digest files
#[derive(Debug, Clone)]
pub struct DigestStore {
    dir: PathBuf,
    prefix: String,
}

impl DigestStore {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &DigestConfig) -> Self {
        Self::new(config.output_dir.clone(), config.file_prefix.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Artifact path for a run date
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}{}.json", self.prefix, date.format(DATE_FORMAT)))
    }

    /// Records of the digest for `date`; empty when no run happened that day
    pub fn load(&self, date: NaiveDate) -> Result<Vec<DigestRecord>> {
        let path = self.path_for(date);
        if !path.exists() {
            debug!(path = %path.display(), "no digest for date");
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Date of the newest digest file in the directory
    pub fn latest_date(&self) -> Result<Option<NaiveDate>> {
        if !self.dir.is_dir() {
            return Ok(None);
        }

        let mut latest = None;
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(date) = name.to_str().and_then(|n| self.parse_file_name(n)) else {
                continue;
            };
            if latest.map_or(true, |current| date > current) {
                latest = Some(date);
            }
        }
        Ok(latest)
    }

    /// Newest digest with its date, if any digest exists
    pub fn latest(&self) -> Result<Option<(NaiveDate, Vec<DigestRecord>)>> {
        match self.latest_date()? {
            Some(date) => Ok(Some((date, self.load(date)?))),
            None => Ok(None),
        }
    }

    /// Records for `date`, or for the newest digest when no date is given
    pub fn load_or_latest(&self, date: Option<NaiveDate>) -> Result<Vec<DigestRecord>> {
        match date {
            Some(date) => self.load(date),
            None => Ok(self.latest()?.map(|(_, records)| records).unwrap_or_default()),
        }
    }

    fn parse_file_name(&self, name: &str) -> Option<NaiveDate> {
        let stem = name.strip_prefix(self.prefix.as_str())?.strip_suffix(".json")?;
        match NaiveDate::parse_from_str(stem, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                warn!(file = name, "ignoring digest file with malformed date");
                None
            }
        }
    }
}

/// Summary of the first record: the text the graph view is built from
pub fn lead_summary(records: &[DigestRecord]) -> Option<&str> {
    records
        .first()
        .map(|record| record.summary.as_str())
        .filter(|summary| !summary.trim().is_empty())
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn write_digest(dir: &Path, name: &str, summary: &str) {
        let records = serde_json::json!([
            {
                "title": "Summit",
                "source": "Wire",
                "summary": summary,
                "url": "https://news.test/1",
                "published": "Mon, 03 Jun 2024 10:00:00 GMT"
            },
            {"title": "Second", "summary": "Other story."}
        ]);
        std::fs::write(dir.join(name), records.to_string()).unwrap();
    }

    #[test]
    fn test_path_for() {
        let store = DigestStore::new("/data/output", "news_digest_");
        assert_eq!(
            store.path_for(date("2024-06-03")),
            PathBuf::from("/data/output/news_digest_2024-06-03.json")
        );
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = DigestStore::new(dir.path(), "news_digest_");
        assert!(store.load(date("2024-06-03")).unwrap().is_empty());
        assert!(store.latest().unwrap().is_none());
        assert!(store.load_or_latest(None).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_has_no_latest() {
        let store = DigestStore::new("/nonexistent/digests", "news_digest_");
        assert_eq!(store.latest_date().unwrap(), None);
    }

    #[test]
    fn test_latest_picks_newest_date() {
        let dir = TempDir::new().unwrap();
        write_digest(dir.path(), "news_digest_2024-06-01.json", "Old news.");
        write_digest(dir.path(), "news_digest_2024-06-03.json", "Alice met Bob in Paris.");
        write_digest(dir.path(), "news_digest_latest.json", "Ignored.");
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let store = DigestStore::new(dir.path(), "news_digest_");
        let (day, records) = store.latest().unwrap().unwrap();

        assert_eq!(day, date("2024-06-03"));
        assert_eq!(records.len(), 2);
        assert_eq!(lead_summary(&records), Some("Alice met Bob in Paris."));
        assert_eq!(records[1].url, "");
    }

    #[test]
    fn test_load_or_latest_with_date() {
        let dir = TempDir::new().unwrap();
        write_digest(dir.path(), "news_digest_2024-06-01.json", "Old news.");
        write_digest(dir.path(), "news_digest_2024-06-03.json", "New news.");
        let store = DigestStore::new(dir.path(), "news_digest_");

        let records = store.load_or_latest(Some(date("2024-06-01"))).unwrap();
        assert_eq!(lead_summary(&records), Some("Old news."));
    }

    #[test]
    fn test_malformed_digest_is_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("news_digest_2024-06-03.json"), "{not json").unwrap();
        let store = DigestStore::new(dir.path(), "news_digest_");
        assert!(store.load(date("2024-06-03")).is_err());
    }

    #[test]
    fn test_lead_summary_edge_cases() {
        assert_eq!(lead_summary(&[]), None);
        let blank = DigestRecord {
            summary: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(lead_summary(&[blank]), None);
        assert!(parse_date("June 3").is_none());
    }
}
