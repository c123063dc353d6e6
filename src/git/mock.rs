use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::domain::TagRecord;
use crate::error::Result;
use crate::git::TagRepository;

/// In-memory repository for testing without a git checkout
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    commits: HashSet<String>,
    tags: BTreeMap<String, TagRecord>,
    remotes: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a commit id as reachable from the heads
    pub fn add_commit(&mut self, id: impl Into<String>) {
        self.commits.insert(id.into());
    }

    /// Add an annotated tag
    pub fn add_annotated_tag(
        &mut self,
        name: &str,
        target_id: &str,
        message: &str,
        timestamp: DateTime<Utc>,
    ) {
        self.tags.insert(
            name.to_string(),
            TagRecord::annotated(name, target_id, message, timestamp),
        );
    }

    /// Add a lightweight tag
    pub fn add_lightweight_tag(&mut self, name: &str, target_id: &str) {
        self.tags
            .insert(name.to_string(), TagRecord::lightweight(name, target_id));
    }

    /// Configure a remote URL
    pub fn add_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remotes.insert(name.into(), url.into());
    }
}

impl TagRepository for MockRepository {
    fn reachable_commits(&self) -> Result<HashSet<String>> {
        Ok(self.commits.clone())
    }

    fn tags(&self) -> Result<Vec<TagRecord>> {
        Ok(self.tags.values().cloned().collect())
    }

    fn find_tag(&self, name: &str) -> Result<Option<TagRecord>> {
        Ok(self.tags.get(name).cloned())
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        Ok(self.remotes.get(remote).cloned())
    }
}
