use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::{GitChangelogError, Result};

/// Message and tagger timestamp carried by an annotated tag object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// A tag as enumerated from the repository, annotated or lightweight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// Short name (e.g. "v1.2.0")
    pub name: String,
    /// Commit id the tag resolves to after peeling
    pub target_id: String,
    /// `None` for lightweight tags
    pub annotation: Option<Annotation>,
}

impl TagRecord {
    /// Create a lightweight tag record
    pub fn lightweight(name: impl Into<String>, target_id: impl Into<String>) -> Self {
        TagRecord {
            name: name.into(),
            target_id: target_id.into(),
            annotation: None,
        }
    }

    /// Create an annotated tag record
    pub fn annotated(
        name: impl Into<String>,
        target_id: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        TagRecord {
            name: name.into(),
            target_id: target_id.into(),
            annotation: Some(Annotation {
                message: message.into(),
                timestamp,
            }),
        }
    }

    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }
}

/// An annotated tag eligible to become a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub name: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub target_id: String,
}

impl ReleaseTag {
    /// Convert a tag record, dropping lightweight tags
    pub fn from_record(record: TagRecord) -> Option<Self> {
        let annotation = record.annotation?;
        Some(ReleaseTag {
            name: record.name,
            message: annotation.message,
            timestamp: annotation.timestamp,
            target_id: record.target_id,
        })
    }

    /// Pre-release identifiers embed a hyphen (e.g. "v1.0.0-beta")
    pub fn is_prerelease(&self) -> bool {
        self.name.contains('-')
    }

    /// Annotation date in `YYYY-MM-DD` form (UTC)
    pub fn date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }
}

/// Releases ordered by annotation timestamp, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSet {
    releases: Vec<ReleaseTag>,
}

impl ReleaseSet {
    /// Build a set from arbitrary tags, sorting newest first.
    ///
    /// Later duplicates of a name are dropped. The sort is stable, so tags
    /// sharing a timestamp keep their input order.
    pub fn new(tags: impl IntoIterator<Item = ReleaseTag>) -> Self {
        let mut releases: Vec<ReleaseTag> = Vec::new();
        for tag in tags {
            if !releases.iter().any(|existing| existing.name == tag.name) {
                releases.push(tag);
            }
        }
        releases.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        ReleaseSet { releases }
    }

    pub fn as_slice(&self) -> &[ReleaseTag] {
        &self.releases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReleaseTag> {
        self.releases.iter()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Releases in chronological order, oldest first
    pub fn oldest_first(&self) -> Vec<ReleaseTag> {
        self.releases.iter().rev().cloned().collect()
    }
}

/// Regular expression matched against tag short names
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    /// Compile a tag pattern
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| GitChangelogError::pattern(format!("'{}': {}", pattern, e)))?;
        Ok(TagPattern { regex })
    }

    /// True if the pattern occurs anywhere in the tag name
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
