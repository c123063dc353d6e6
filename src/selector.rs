//! Selection of release tags from a repository.

use tracing::debug;

use crate::domain::{ReleaseSet, ReleaseTag, TagPattern};
use crate::error::Result;
use crate::git::TagRepository;

/// Find the annotated tags that name releases.
///
/// A tag qualifies when it is annotated, its short name matches `pattern`,
/// and the commit it peels to is reachable from the repository heads. The
/// result is ordered by annotation timestamp, newest first.
///
/// # Returns
/// * `Ok(ReleaseSet)` - Qualifying tags; empty if none qualify
/// * `Err` - If the repository cannot be read
pub fn find_release_tags<R: TagRepository + ?Sized>(
    pattern: &TagPattern,
    repo: &R,
) -> Result<ReleaseSet> {
    let reachable = repo.reachable_commits()?;

    let tags = repo
        .tags()?
        .into_iter()
        .filter_map(ReleaseTag::from_record)
        .filter(|tag| pattern.matches(&tag.name))
        .filter(|tag| {
            let keep = reachable.contains(&tag.target_id);
            if !keep {
                debug!(tag = %tag.name, target = %tag.target_id, "Skipping unreachable tag");
            }
            keep
        });

    let releases = ReleaseSet::new(tags);
    debug!(
        pattern = pattern.as_str(),
        count = releases.len(),
        "Selected release tags"
    );

    Ok(releases)
}
