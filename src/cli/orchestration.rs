//! Command workflows
//!
//! Each command merges its arguments over the loaded configuration, opens
//! the repository for the duration of the call, and drives the selector,
//! formatter, and synchronizer. The functions here are independent of clap
//! parsing so they can be called programmatically and from tests.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::changelog::{create_changelog, Changelog, ChangelogOptions};
use crate::cli::{CollectArgs, ReleaseArgs, RepoSettings, SyncArgs};
use crate::config::Config;
use crate::domain::{HostingOrigin, TagPattern};
use crate::error::{GitChangelogError, Result};
use crate::git::{Git2Repository, TagRepository};
use crate::github::{
    create_github_releases, find_github_origin, plan_missing_releases, plan_release_updates,
    sync_github_releases, Credentials, GitHubReleaseService, ReleaseService,
};
use crate::selector::find_release_tags;
use crate::ui;

/// Result of the collect workflow
#[derive(Debug, Clone, PartialEq)]
pub struct CollectResult {
    /// Rendered Markdown
    pub changelog: String,

    /// File written, `None` when printing to stdout
    pub output: Option<PathBuf>,

    /// Number of releases in the changelog
    pub release_count: usize,
}

/// Result of a release or release-sync workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Tag names created or updated (or that would be, in a dry run)
    pub tags: Vec<String>,

    /// Whether hosted releases were left untouched
    pub dry_run: bool,
}

/// Determine the GitHub origin for a repository.
///
/// An explicit owner and name are used as given. Otherwise the configured
/// remote is parsed, with either explicit value replacing the parsed one.
///
/// # Returns
/// * `Ok(HostingOrigin)` - The resolved origin
/// * `Err(OriginResolution)` - If the remote is missing or not on GitHub and
///   no explicit owner/name pair was given
pub fn resolve_origin<R: TagRepository + ?Sized>(
    repo: &R,
    settings: &RepoSettings,
) -> Result<HostingOrigin> {
    if let (Some(owner), Some(name)) = (&settings.owner, &settings.name) {
        return Ok(HostingOrigin::new(owner.as_str(), name.as_str()));
    }

    let origin = find_github_origin(repo, &settings.remote)?.ok_or_else(|| {
        GitChangelogError::origin(format!(
            "remote '{}' is missing or not a GitHub URL; pass --owner and --name",
            settings.remote
        ))
    })?;

    if settings.owner.is_none() && settings.name.is_none() {
        return Ok(origin);
    }

    Ok(HostingOrigin::new(
        settings.owner.clone().unwrap_or(origin.owner),
        settings.name.clone().unwrap_or(origin.name),
    ))
}

/// Render the changelog for `repo` and write it out.
///
/// The origin is only resolved when source or compare links are requested;
/// failing to resolve it then aborts the command.
pub fn collect_changelog<R: TagRepository + ?Sized>(
    repo: &R,
    repo_settings: &RepoSettings,
    options: &ChangelogOptions,
    to_stdout: bool,
) -> Result<CollectResult> {
    let base_url = if options.wants_links() {
        Some(resolve_origin(repo, repo_settings)?.base_url)
    } else {
        None
    };

    let Changelog {
        markdown: changelog,
        release_count,
    } = create_changelog(repo, options, base_url.as_deref())?;
    if release_count == 0 {
        ui::display_boundary_warning(&BoundaryWarning::NoReleaseTags {
            pattern: options.tag_pattern.as_str().to_string(),
        });
    }

    let output = if to_stdout {
        None
    } else {
        fs::write(&options.output, &changelog)?;
        info!(path = %options.output.display(), releases = release_count, "Wrote changelog");
        Some(options.output.clone())
    };

    Ok(CollectResult {
        changelog,
        output,
        release_count,
    })
}

/// The `collect` command
pub fn run_collect(args: &CollectArgs, config: &Config) -> Result<CollectResult> {
    let repo_settings = args.repo.resolve(&config.repository);
    let settings = args.resolve(&config.collect);

    let options = ChangelogOptions {
        header: settings.header,
        source_links: settings.source_links,
        compare_links: settings.compare_links,
        tag_pattern: TagPattern::new(&settings.tag_format)?,
        output: settings.output,
    };

    let repo = Git2Repository::open(&repo_settings.path)?;
    collect_changelog(&repo, &repo_settings, &options, args.stdout)
}

/// Create missing releases, or only plan them when `dry_run` is set
pub async fn publish_releases<R, S>(
    repo: &R,
    service: &S,
    origin: &HostingOrigin,
    pattern: &TagPattern,
    draft: bool,
    dry_run: bool,
) -> Result<WorkflowResult>
where
    R: TagRepository + ?Sized,
    S: ReleaseService + ?Sized,
{
    let tags = if dry_run {
        let tags = find_release_tags(pattern, repo)?.oldest_first();
        let existing = service.list_releases(&origin.owner, &origin.name).await?;
        plan_missing_releases(&tags, &existing, draft)
            .into_iter()
            .map(|release| release.tag_name)
            .collect()
    } else {
        create_github_releases(repo, service, &origin.owner, &origin.name, pattern, draft).await?
    };

    if tags.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NothingToRelease {
            owner: origin.owner.clone(),
            name: origin.name.clone(),
        });
    }

    Ok(WorkflowResult { tags, dry_run })
}

/// Update release descriptions, or only plan them when `dry_run` is set
pub async fn synchronize_releases<R, S>(
    repo: &R,
    service: &S,
    origin: &HostingOrigin,
    force: bool,
    dry_run: bool,
) -> Result<WorkflowResult>
where
    R: TagRepository + ?Sized,
    S: ReleaseService + ?Sized,
{
    let tags = if dry_run {
        let existing = service.list_releases(&origin.owner, &origin.name).await?;
        plan_release_updates(repo, &existing, force)?
            .into_iter()
            .map(|planned| planned.update.name)
            .collect()
    } else {
        sync_github_releases(repo, service, &origin.owner, &origin.name, force).await?
    };

    Ok(WorkflowResult { tags, dry_run })
}

/// The `release` command
///
/// Credentials are checked before the repository is opened, so a missing
/// token never leads to any network traffic.
pub async fn run_release(args: &ReleaseArgs, config: &Config) -> Result<WorkflowResult> {
    let credentials = Credentials::from_parts(
        args.auth.token.clone(),
        args.auth.username.clone(),
        args.auth.password.clone(),
    )?;
    let repo_settings = args.repo.resolve(&config.repository);
    let pattern = TagPattern::new(
        args.tag_format
            .as_deref()
            .unwrap_or(&config.collect.tag_format),
    )?;

    let repo = Git2Repository::open(&repo_settings.path)?;
    let origin = resolve_origin(&repo, &repo_settings)?;
    debug!(owner = %origin.owner, repo = %origin.name, ?credentials, "Resolved origin");

    ui::display_status(&format!("Checking releases on {}/{}", origin.owner, origin.name));
    let service = GitHubReleaseService::new(&credentials)?;
    publish_releases(
        &repo,
        &service,
        &origin,
        &pattern,
        args.draft || config.release.draft,
        args.dry_run,
    )
    .await
}

/// The `release-sync` command
pub async fn run_release_sync(args: &SyncArgs, config: &Config) -> Result<WorkflowResult> {
    let credentials = Credentials::from_parts(
        args.auth.token.clone(),
        args.auth.username.clone(),
        args.auth.password.clone(),
    )?;
    let repo_settings = args.repo.resolve(&config.repository);

    let repo = Git2Repository::open(&repo_settings.path)?;
    let origin = resolve_origin(&repo, &repo_settings)?;
    debug!(owner = %origin.owner, repo = %origin.name, ?credentials, "Resolved origin");

    ui::display_status(&format!("Syncing releases on {}/{}", origin.owner, origin.name));
    let service = GitHubReleaseService::new(&credentials)?;
    synchronize_releases(&repo, &service, &origin, args.force, args.dry_run).await
}
