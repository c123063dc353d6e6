pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod github;
pub mod selector;
pub mod ui;

pub use error::{GitChangelogError, Result};
