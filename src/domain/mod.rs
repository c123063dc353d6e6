//! Domain logic - pure value types independent of git and GitHub access

pub mod origin;
pub mod release;
pub mod tag;

pub use origin::HostingOrigin;
pub use release::{HostedRelease, NewRelease, ReleaseUpdate};
pub use tag::{Annotation, ReleaseSet, ReleaseTag, TagPattern, TagRecord};
