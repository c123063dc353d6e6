//! GitHub integration: origin resolution and release synchronization.
//!
//! The hosting service is reached through the [ReleaseService] trait:
//!
//! - [client::GitHubReleaseService]: octocrab-backed implementation
//! - [mock::MockReleaseService]: in-memory implementation for testing

pub mod client;
pub mod mock;
pub mod sync;

pub use client::GitHubReleaseService;
pub use mock::MockReleaseService;
pub use sync::{
    create_github_releases, plan_missing_releases, plan_release_updates, sync_github_releases,
    PlannedUpdate,
};

use async_trait::async_trait;

use crate::domain::{HostedRelease, HostingOrigin, NewRelease, ReleaseUpdate};
use crate::error::{GitChangelogError, Result};
use crate::git::TagRepository;

/// Credentials exchanged for an authenticated client
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Personal access token
    Token(String),
    /// Username and password
    Basic { username: String, password: String },
}

impl Credentials {
    /// Pick credentials from optional command-line values.
    ///
    /// An explicit username and password pair wins, since the token may come
    /// from `GITHUB_TOKEN` in the environment. Otherwise a non-empty token is
    /// required.
    pub fn from_parts(
        token: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        match (token, username, password) {
            (_, Some(username), Some(password)) => Ok(Credentials::Basic { username, password }),
            (Some(token), _, _) if !token.is_empty() => Ok(Credentials::Token(token)),
            _ => Err(GitChangelogError::authentication(
                "provide --token, or --username together with --password",
            )),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Token(_) => f.write_str("Credentials::Token(***)"),
            Credentials::Basic { username, .. } => {
                write!(f, "Credentials::Basic {{ username: {:?} }}", username)
            }
        }
    }
}

/// Release operations on a hosted repository
#[async_trait]
pub trait ReleaseService: Send + Sync {
    /// Every release of `owner/name`, across all pages
    async fn list_releases(&self, owner: &str, name: &str) -> Result<Vec<HostedRelease>>;

    /// Create a release
    async fn create_release(&self, owner: &str, name: &str, release: &NewRelease) -> Result<()>;

    /// Edit the release with the given id
    async fn edit_release(
        &self,
        owner: &str,
        name: &str,
        release_id: u64,
        update: &ReleaseUpdate,
    ) -> Result<()>;
}

/// Resolve the GitHub origin from a configured remote.
///
/// # Returns
/// * `Ok(Some(HostingOrigin))` - The remote's URL is a GitHub HTTPS or SSH URL
/// * `Ok(None)` - If the remote is missing or not hosted on GitHub
/// * `Err` - If the remote configuration cannot be read
pub fn find_github_origin<R: TagRepository + ?Sized>(
    repo: &R,
    remote: &str,
) -> Result<Option<HostingOrigin>> {
    Ok(repo
        .remote_url(remote)?
        .and_then(|url| HostingOrigin::parse(&url)))
}
