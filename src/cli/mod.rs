//! Command-line surface: argument definitions and workflow orchestration.

pub mod orchestration;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{CollectConfig, RepositoryConfig};

#[derive(Parser, Debug)]
#[command(
    name = "git-changelog",
    version,
    about = "Generate a changelog from annotated git tags and sync GitHub releases"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a Markdown changelog from release tags
    Collect(CollectArgs),
    /// Create GitHub releases for tags that have none
    Release(ReleaseArgs),
    /// Copy tag annotations into existing GitHub release descriptions
    #[command(name = "release-sync")]
    ReleaseSync(SyncArgs),
}

/// Repository location and hosting overrides shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct RepoArgs {
    #[arg(short, long, help = "Path to the git repository [default: .git]")]
    pub repo: Option<String>,

    #[arg(long, help = "Remote used to find the GitHub origin [default: origin]")]
    pub remote: Option<String>,

    #[arg(long, help = "GitHub repository owner")]
    pub owner: Option<String>,

    #[arg(long, help = "GitHub repository name")]
    pub name: Option<String>,
}

/// Repository settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct RepoSettings {
    pub path: PathBuf,
    pub remote: String,
    pub owner: Option<String>,
    pub name: Option<String>,
}

impl RepoArgs {
    pub fn resolve(&self, config: &RepositoryConfig) -> RepoSettings {
        RepoSettings {
            path: PathBuf::from(self.repo.as_deref().unwrap_or(&config.path)),
            remote: self.remote.clone().unwrap_or_else(|| config.remote.clone()),
            owner: self.owner.clone().or_else(|| config.owner.clone()),
            name: self.name.clone().or_else(|| config.name.clone()),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct AuthArgs {
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub personal access token")]
    pub token: Option<String>,

    #[arg(short, long, help = "GitHub username")]
    pub username: Option<String>,

    #[arg(short, long, help = "GitHub password")]
    pub password: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CollectArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    #[arg(
        short,
        long,
        help = r"Regex format for release tags [default: [vV]\d\.\d(\.\d){0,2}]"
    )]
    pub tag_format: Option<String>,

    #[arg(short, long, help = "Output changelog file [default: CHANGELOG.md]")]
    pub output: Option<String>,

    #[arg(long, help = "Text placed above the first release")]
    pub header: Option<String>,

    #[arg(long, help = "Link release headings to the source tree")]
    pub source_links: bool,

    #[arg(long, help = "Add a comparison link against the previous release")]
    pub compare_links: bool,

    #[arg(long, help = "Print the changelog instead of writing the output file")]
    pub stdout: bool,
}

/// Collect settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct CollectSettings {
    pub tag_format: String,
    pub output: PathBuf,
    pub header: Option<String>,
    pub source_links: bool,
    pub compare_links: bool,
}

impl CollectArgs {
    pub fn resolve(&self, config: &CollectConfig) -> CollectSettings {
        CollectSettings {
            tag_format: self
                .tag_format
                .clone()
                .unwrap_or_else(|| config.tag_format.clone()),
            output: PathBuf::from(self.output.as_deref().unwrap_or(&config.output)),
            header: self.header.clone().or_else(|| config.header.clone()),
            source_links: self.source_links || config.source_links,
            compare_links: self.compare_links || config.compare_links,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReleaseArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[arg(short, long, help = "Regex format for release tags")]
    pub tag_format: Option<String>,

    #[arg(long, help = "Create releases as drafts")]
    pub draft: bool,

    #[arg(long, help = "Show the releases that would be created")]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SyncArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[arg(short, long, help = "Overwrite release descriptions that are already set")]
    pub force: bool,

    #[arg(long, help = "Show the releases that would be updated")]
    pub dry_run: bool,
}
