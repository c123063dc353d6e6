use std::sync::Mutex;

use async_trait::async_trait;

use super::ReleaseService;
use crate::domain::{HostedRelease, NewRelease, ReleaseUpdate};
use crate::error::{GitChangelogError, Result};

/// In-memory release service that records every mutation
#[derive(Debug, Default)]
pub struct MockReleaseService {
    releases: Vec<HostedRelease>,
    fail_on: Option<String>,
    created: Mutex<Vec<NewRelease>>,
    edited: Mutex<Vec<(u64, ReleaseUpdate)>>,
}

impl MockReleaseService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing release
    pub fn add_release(&mut self, id: u64, tag_name: &str, body: Option<&str>) {
        self.releases.push(HostedRelease {
            id,
            tag_name: tag_name.to_string(),
            name: Some(tag_name.to_string()),
            body: body.map(str::to_string),
            draft: false,
            prerelease: false,
        });
    }

    /// Make create/edit calls for this tag name fail
    pub fn fail_on(&mut self, tag_name: &str) {
        self.fail_on = Some(tag_name.to_string());
    }

    /// Releases created so far, in call order
    pub fn created(&self) -> Vec<NewRelease> {
        self.created.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Edits made so far, in call order
    pub fn edited(&self) -> Vec<(u64, ReleaseUpdate)> {
        self.edited.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn check(&self, tag_name: &str) -> Result<()> {
        match &self.fail_on {
            Some(failing) if failing == tag_name => Err(GitChangelogError::hosting(format!(
                "simulated failure for {}",
                tag_name
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ReleaseService for MockReleaseService {
    async fn list_releases(&self, _owner: &str, _name: &str) -> Result<Vec<HostedRelease>> {
        Ok(self.releases.clone())
    }

    async fn create_release(&self, _owner: &str, _name: &str, release: &NewRelease) -> Result<()> {
        self.check(&release.tag_name)?;
        if let Ok(mut created) = self.created.lock() {
            created.push(release.clone());
        }
        Ok(())
    }

    async fn edit_release(
        &self,
        _owner: &str,
        _name: &str,
        release_id: u64,
        update: &ReleaseUpdate,
    ) -> Result<()> {
        self.check(&update.name)?;
        if let Ok(mut edited) = self.edited.lock() {
            edited.push((release_id, update.clone()));
        }
        Ok(())
    }
}
