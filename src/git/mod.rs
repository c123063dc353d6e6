//! Git access abstraction layer
//!
//! This module provides a trait-based abstraction over the repository reads
//! git-changelog needs, allowing the tag selection and release logic to run
//! against real repositories and in-memory fakes alike.
//!
//! # Overview
//!
//! The primary abstraction is the [TagRepository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use git_changelog::git::TagRepository;
//! # fn example<R: TagRepository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let reachable = repo.reachable_commits()?;
//! let annotated = repo.tags()?.into_iter().filter(|t| t.is_annotated()).count();
//! println!("{} commits, {} annotated tags", reachable.len(), annotated);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::collections::HashSet;

use crate::domain::TagRecord;
use crate::error::Result;

/// Read-only repository operations used by git-changelog
///
/// ## Error Handling
///
/// Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::GitChangelogError] variants. Absence (no such tag, no such
/// remote) is reported as `Ok(None)`, never as an error.
pub trait TagRepository {
    /// Ids of every commit reachable from HEAD and the local branch heads
    ///
    /// # Returns
    /// * `Ok(HashSet<String>)` - Hex commit ids; empty for an unborn repository
    /// * `Err` - If history cannot be walked
    fn reachable_commits(&self) -> Result<HashSet<String>>;

    /// All tags that peel to a commit, sorted by name
    ///
    /// Lightweight tags are included with `annotation: None`. Tags that do
    /// not resolve to a commit (e.g. tags of trees) are omitted.
    fn tags(&self) -> Result<Vec<TagRecord>>;

    /// Look up one tag by short name
    ///
    /// # Returns
    /// * `Ok(Some(TagRecord))` - The tag, annotated or lightweight
    /// * `Ok(None)` - If no such tag exists
    /// * `Err` - If there's a Git error
    fn find_tag(&self, name: &str) -> Result<Option<TagRecord>>;

    /// Configured URL of a remote, `None` if the remote does not exist
    ///
    /// # Example
    /// ```rust
    /// # use git_changelog::git::TagRepository;
    /// # fn example<R: TagRepository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.remote_url("origin")? {
    ///     Some(url) => println!("origin is {}", url),
    ///     None => println!("no origin remote"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn remote_url(&self, remote: &str) -> Result<Option<String>>;
}
