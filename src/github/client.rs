use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

use super::{Credentials, ReleaseService};
use crate::domain::{HostedRelease, NewRelease, ReleaseUpdate};
use crate::error::{GitChangelogError, Result};

/// GitHub Releases access through an authenticated octocrab client.
///
/// The client is built once and reused for every call.
pub struct GitHubReleaseService {
    client: Octocrab,
}

impl GitHubReleaseService {
    /// Exchange credentials for an authenticated client
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let builder = Octocrab::builder();
        let builder = match credentials {
            Credentials::Token(token) => builder.personal_token(token.clone()),
            Credentials::Basic { username, password } => {
                builder.basic_auth(username.clone(), password.clone())
            }
        };

        let client = builder.build().map_err(hosting_error)?;
        Ok(GitHubReleaseService { client })
    }
}

fn hosting_error(e: octocrab::Error) -> GitChangelogError {
    GitChangelogError::hosting(e.to_string())
}

fn to_hosted(release: octocrab::models::repos::Release) -> HostedRelease {
    HostedRelease {
        id: release.id.0,
        tag_name: release.tag_name,
        name: release.name,
        body: release.body,
        draft: release.draft,
        prerelease: release.prerelease,
    }
}

#[async_trait]
impl ReleaseService for GitHubReleaseService {
    async fn list_releases(&self, owner: &str, name: &str) -> Result<Vec<HostedRelease>> {
        let first = self
            .client
            .repos(owner, name)
            .releases()
            .list()
            .per_page(100)
            .send()
            .await
            .map_err(hosting_error)?;

        let releases = self.client.all_pages(first).await.map_err(hosting_error)?;
        debug!(owner, repo = name, count = releases.len(), "Listed releases");

        Ok(releases.into_iter().map(to_hosted).collect())
    }

    async fn create_release(&self, owner: &str, name: &str, release: &NewRelease) -> Result<()> {
        self.client
            .repos(owner, name)
            .releases()
            .create(&release.tag_name)
            .name(&release.name)
            .body(&release.body)
            .draft(release.draft)
            .prerelease(release.prerelease)
            .send()
            .await
            .map_err(hosting_error)?;

        Ok(())
    }

    async fn edit_release(
        &self,
        owner: &str,
        name: &str,
        release_id: u64,
        update: &ReleaseUpdate,
    ) -> Result<()> {
        self.client
            .repos(owner, name)
            .releases()
            .update(release_id)
            .name(&update.name)
            .body(&update.body)
            .prerelease(update.prerelease)
            .send()
            .await
            .map_err(hosting_error)?;

        Ok(())
    }
}
