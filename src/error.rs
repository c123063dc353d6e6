use thiserror::Error;

/// Unified error type for git-changelog operations
#[derive(Error, Debug)]
pub enum GitChangelogError {
    #[error("Cannot access repository: {0}")]
    RepositoryAccess(String),

    #[error("Cannot resolve GitHub origin: {0}")]
    OriginResolution(String),

    #[error("Authentication missing: {0}")]
    AuthenticationMissing(String),

    #[error("GitHub request failed: {0}")]
    Hosting(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid tag pattern: {0}")]
    Pattern(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, GitChangelogError>;

impl GitChangelogError {
    /// Create a repository access error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        GitChangelogError::RepositoryAccess(msg.into())
    }

    /// Create an origin resolution error with context
    pub fn origin(msg: impl Into<String>) -> Self {
        GitChangelogError::OriginResolution(msg.into())
    }

    /// Create a missing-credentials error with context
    pub fn authentication(msg: impl Into<String>) -> Self {
        GitChangelogError::AuthenticationMissing(msg.into())
    }

    /// Create a hosting service error with context
    pub fn hosting(msg: impl Into<String>) -> Self {
        GitChangelogError::Hosting(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitChangelogError::Config(msg.into())
    }

    /// Create a tag pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        GitChangelogError::Pattern(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitChangelogError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GitChangelogError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git2() {
        let git_err = git2::Error::from_str("object not found");
        let err: GitChangelogError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GitChangelogError::repository("x"), "Cannot access repository"),
            (GitChangelogError::origin("x"), "Cannot resolve GitHub origin"),
            (GitChangelogError::authentication("x"), "Authentication missing"),
            (GitChangelogError::hosting("x"), "GitHub request failed"),
            (GitChangelogError::config("x"), "Configuration error"),
            (GitChangelogError::pattern("x"), "Invalid tag pattern"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with 'quotes'",
            "message with \\ backslash",
            "[vV]\\d\\.\\d(",
        ];

        for msg in special_chars {
            let err = GitChangelogError::pattern(msg);
            assert!(err.to_string().contains(msg));
        }
    }
}
