use std::collections::HashSet;
use std::path::Path;

use chrono::{TimeZone, Utc};
use git2::{ErrorCode, Reference, Repository as Git2Repo};
use tracing::debug;

use crate::domain::{Annotation, TagRecord};
use crate::error::{GitChangelogError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open a repository at `path` (a `.git` directory or a work tree)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open(path).map_err(|e| {
            GitChangelogError::repository(format!("{}: {}", path.display(), e.message()))
        })?;

        Ok(Git2Repository { repo })
    }

    fn record_for(&self, name: &str, reference: &Reference<'_>) -> Option<TagRecord> {
        let target_id = match reference.peel_to_commit() {
            Ok(commit) => commit.id().to_string(),
            Err(e) => {
                debug!(tag = name, error = %e, "Tag does not resolve to a commit");
                return None;
            }
        };

        // Lightweight tags point straight at a commit and cannot peel to a tag object
        let annotation = reference.peel_to_tag().ok().and_then(|tag| {
            let tagger = tag.tagger()?;
            let seconds = tagger.when().seconds();
            let Some(timestamp) = Utc.timestamp_opt(seconds, 0).single() else {
                debug!(tag = name, seconds, "Tagger time out of range, treating as lightweight");
                return None;
            };
            Some(Annotation {
                message: String::from_utf8_lossy(tag.message_bytes().unwrap_or_default())
                    .into_owned(),
                timestamp,
            })
        });

        Some(TagRecord {
            name: name.to_string(),
            target_id,
            annotation,
        })
    }
}

impl super::TagRepository for Git2Repository {
    fn reachable_commits(&self) -> Result<HashSet<String>> {
        let mut revwalk = self.repo.revwalk()?;

        match self.repo.head() {
            Ok(head) => {
                if let Some(oid) = head.target() {
                    revwalk.push(oid)?;
                }
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                debug!("HEAD is unborn, walking branch heads only");
            }
            Err(e) => return Err(e.into()),
        }
        revwalk.push_glob("heads")?;

        let mut commits = HashSet::new();
        for oid in revwalk {
            commits.insert(oid?.to_string());
        }

        Ok(commits)
    }

    fn tags(&self) -> Result<Vec<TagRecord>> {
        let names = self.repo.tag_names(None)?;

        let mut records = Vec::new();
        for name in names.iter().flatten() {
            if let Some(record) = self.find_tag(name)? {
                records.push(record);
            }
        }

        Ok(records)
    }

    fn find_tag(&self, name: &str) -> Result<Option<TagRecord>> {
        let reference_name = format!("refs/tags/{}", name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => Ok(self.record_for(name, &reference)),
            Err(e) if e.code() == ErrorCode::NotFound || e.code() == ErrorCode::InvalidSpec => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        match self.repo.find_remote(remote) {
            Ok(found) => Ok(found.url().map(str::to_string)),
            Err(e) if e.code() == ErrorCode::NotFound || e.code() == ErrorCode::InvalidSpec => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
