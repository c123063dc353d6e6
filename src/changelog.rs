//! Markdown rendering of release tags.
//!
//! Each release becomes a level-2 heading with its annotation date, an
//! optional comparison link against the next-older release, and the tag
//! message with any self-titling first line removed.

use std::path::PathBuf;

use regex::RegexBuilder;

use crate::domain::{ReleaseTag, TagPattern};
use crate::error::Result;
use crate::git::TagRepository;
use crate::selector::find_release_tags;

/// Presentation settings for a changelog
#[derive(Debug, Clone)]
pub struct ChangelogOptions {
    pub header: Option<String>,
    pub source_links: bool,
    pub compare_links: bool,
    pub tag_pattern: TagPattern,
    pub output: PathBuf,
}

impl ChangelogOptions {
    /// True if any option needs a repository base URL
    pub fn wants_links(&self) -> bool {
        self.source_links || self.compare_links
    }
}

/// Render releases (newest first) as Markdown.
///
/// Links are only emitted when `base_url` is present. The comparison link
/// for a release points at the entry after it in `releases`, i.e. the
/// chronologically closest older release.
pub fn format_changelog(
    header: Option<&str>,
    releases: &[ReleaseTag],
    base_url: Option<&str>,
    source_links: bool,
    compare_links: bool,
) -> String {
    let mut notes = String::new();

    if let Some(header) = header.filter(|h| !h.is_empty()) {
        notes.push_str(header);
        notes.push_str("\n\n");
    }

    let base_url = base_url.filter(|url| !url.is_empty());

    for (i, release) in releases.iter().enumerate() {
        let body = strip_title(&release.name, &release.message);

        match base_url {
            Some(url) if source_links => notes.push_str(&format!(
                "## [{}]({}/tree/{}) ({})\n",
                release.name,
                url,
                release.target_id,
                release.date()
            )),
            _ => notes.push_str(&format!("## {} ({})\n", release.name, release.date())),
        }

        if let (Some(url), true, Some(previous)) = (base_url, compare_links, releases.get(i + 1)) {
            notes.push_str(&format!(
                "[Compare with {}]({}/compare/{}...{})\n",
                previous.name, url, previous.target_id, release.target_id
            ));
        }

        notes.push('\n');
        notes.push_str(body.trim());
        notes.push_str("\n\n");
    }

    notes.trim().to_string()
}

/// Remove a first line that just repeats the release name.
///
/// A message whose first non-blank line looks like `# v1.2.0`, `[v1.2.0] ...`
/// or `v1.2.0 - summary` (case-insensitive) loses that line. The name is
/// matched literally. Messages without such a line come back unchanged.
pub fn strip_title<'a>(name: &str, message: &'a str) -> &'a str {
    let title = RegexBuilder::new(&format!(r"^#*\s*\[?{}", regex::escape(name)))
        .case_insensitive(true)
        .build();

    match title {
        Ok(re) if re.is_match(message) => {
            let trimmed = message.trim_start();
            match trimmed.find('\n') {
                Some(newline) => &trimmed[newline + 1..],
                None => trimmed,
            }
        }
        _ => message,
    }
}

/// Rendered changelog and the number of releases it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    pub markdown: String,
    pub release_count: usize,
}

/// Select release tags from `repo` and render them in one step
pub fn create_changelog<R: TagRepository + ?Sized>(
    repo: &R,
    options: &ChangelogOptions,
    base_url: Option<&str>,
) -> Result<Changelog> {
    let releases = find_release_tags(&options.tag_pattern, repo)?;

    let markdown = format_changelog(
        options.header.as_deref(),
        releases.as_slice(),
        base_url,
        options.source_links,
        options.compare_links,
    );

    Ok(Changelog {
        markdown,
        release_count: releases.len(),
    })
}
