//! Creating and updating GitHub releases from annotated tags.
//!
//! Every network call is awaited before the next one starts. The first
//! failure aborts the remaining work; nothing is retried.

use tracing::{debug, info};

use super::ReleaseService;
use crate::domain::{HostedRelease, NewRelease, ReleaseTag, ReleaseUpdate, TagPattern};
use crate::error::Result;
use crate::git::TagRepository;
use crate::selector::find_release_tags;

/// An edit to apply to an existing release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUpdate {
    pub release_id: u64,
    pub update: ReleaseUpdate,
}

/// Releases to create for tags that have none yet.
///
/// `tags` should be oldest first; the returned payloads keep that order.
pub fn plan_missing_releases(
    tags: &[ReleaseTag],
    existing: &[HostedRelease],
    draft: bool,
) -> Vec<NewRelease> {
    tags.iter()
        .filter(|tag| existing.iter().all(|release| release.tag_name != tag.name))
        .map(|tag| NewRelease::from_tag(tag, draft))
        .collect()
}

/// Edits needed to bring existing releases in line with their tags.
///
/// Releases without a local annotated tag are skipped. Without `force`, a
/// release is only touched when its body is blank and the tag message is not.
pub fn plan_release_updates<R: TagRepository + ?Sized>(
    repo: &R,
    existing: &[HostedRelease],
    force: bool,
) -> Result<Vec<PlannedUpdate>> {
    let mut updates = Vec::new();

    for release in existing {
        let tag = match repo.find_tag(&release.tag_name)?.and_then(ReleaseTag::from_record) {
            Some(tag) => tag,
            None => {
                debug!(tag = %release.tag_name, "No local annotated tag for release");
                continue;
            }
        };

        let has_content_to_sync = !tag.message.trim().is_empty() && release.has_blank_body();
        if force || has_content_to_sync {
            updates.push(PlannedUpdate {
                release_id: release.id,
                update: ReleaseUpdate::from_tag(&tag),
            });
        }
    }

    Ok(updates)
}

/// Create a GitHub release for every matching tag that lacks one.
///
/// Releases are created oldest first so the hosting UI lists them in
/// chronological order.
///
/// # Returns
/// * `Ok(Vec<String>)` - Tag names of the releases created
/// * `Err` - On the first repository or GitHub failure
pub async fn create_github_releases<R, S>(
    repo: &R,
    service: &S,
    owner: &str,
    name: &str,
    pattern: &TagPattern,
    draft: bool,
) -> Result<Vec<String>>
where
    R: TagRepository + ?Sized,
    S: ReleaseService + ?Sized,
{
    let tags = find_release_tags(pattern, repo)?.oldest_first();
    let existing = service.list_releases(owner, name).await?;

    let mut created = Vec::new();
    for release in plan_missing_releases(&tags, &existing, draft) {
        info!(owner, repo = name, tag = %release.tag_name, "Creating release");
        service.create_release(owner, name, &release).await?;
        created.push(release.tag_name);
    }

    Ok(created)
}

/// Copy tag annotations into existing GitHub releases.
///
/// # Returns
/// * `Ok(Vec<String>)` - Names of the releases edited
/// * `Err` - On the first repository or GitHub failure
pub async fn sync_github_releases<R, S>(
    repo: &R,
    service: &S,
    owner: &str,
    name: &str,
    force: bool,
) -> Result<Vec<String>>
where
    R: TagRepository + ?Sized,
    S: ReleaseService + ?Sized,
{
    let existing = service.list_releases(owner, name).await?;

    let mut edited = Vec::new();
    for planned in plan_release_updates(repo, &existing, force)? {
        info!(owner, repo = name, release = %planned.update.name, "Updating release");
        service
            .edit_release(owner, name, planned.release_id, &planned.update)
            .await?;
        edited.push(planned.update.name);
    }

    Ok(edited)
}
