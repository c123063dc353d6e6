use crate::domain::ReleaseTag;

/// A release as reported by the hosting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedRelease {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
}

impl HostedRelease {
    /// Missing and whitespace-only bodies both count as blank
    pub fn has_blank_body(&self) -> bool {
        self.body.as_deref().map_or(true, |b| b.trim().is_empty())
    }
}

/// Payload for creating a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRelease {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl NewRelease {
    /// Release for a tag; the body is the raw annotation message
    pub fn from_tag(tag: &ReleaseTag, draft: bool) -> Self {
        NewRelease {
            tag_name: tag.name.clone(),
            name: tag.name.clone(),
            body: tag.message.clone(),
            draft,
            prerelease: tag.is_prerelease(),
        }
    }
}

/// Payload for editing an existing release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseUpdate {
    pub name: String,
    pub body: String,
    pub prerelease: bool,
}

impl ReleaseUpdate {
    pub fn from_tag(tag: &ReleaseTag) -> Self {
        ReleaseUpdate {
            name: tag.name.clone(),
            body: tag.message.clone(),
            prerelease: tag.is_prerelease(),
        }
    }
}
