use std::fmt;

/// Non-fatal conditions at the edges of a run that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No reachable annotated tag matched the tag format
    NoReleaseTags { pattern: String },
    /// Every matching tag already has a hosted release
    NothingToRelease { owner: String, name: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReleaseTags { pattern } => {
                write!(f, "No reachable annotated tags match '{}'", pattern)
            }
            BoundaryWarning::NothingToRelease { owner, name } => {
                write!(f, "Every release tag already has a release on {}/{}", owner, name)
            }
        }
    }
}
