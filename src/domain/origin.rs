use regex::Regex;

const HTTPS_REMOTE: &str =
    r"(?P<base>https://github\.com/(?P<owner>[^/]+)/(?P<name>[^/]+))\.git";
const SSH_REMOTE: &str = r"git@github\.com:(?P<owner>[^/]+)/(?P<name>[^/]+)\.git";

/// Where a repository is hosted on GitHub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingOrigin {
    /// Web URL of the repository, without a `.git` suffix
    pub base_url: String,
    pub owner: String,
    pub name: String,
}

impl HostingOrigin {
    /// Build an origin from an explicit owner and repository name
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = owner.into();
        let name = name.into();
        HostingOrigin {
            base_url: format!("https://github.com/{}/{}", owner, name),
            owner,
            name,
        }
    }

    /// Parse a remote URL in HTTPS or SSH form.
    ///
    /// Returns `None` for anything that is not a GitHub remote ending in `.git`.
    /// Host casing and trailing slashes are not normalized.
    pub fn parse(url: &str) -> Option<Self> {
        if let Some(caps) = Regex::new(HTTPS_REMOTE).ok()?.captures(url) {
            return Some(HostingOrigin {
                base_url: caps["base"].to_string(),
                owner: caps["owner"].to_string(),
                name: caps["name"].to_string(),
            });
        }

        let caps = Regex::new(SSH_REMOTE).ok()?.captures(url)?;
        Some(HostingOrigin::new(&caps["owner"], &caps["name"]))
    }
}
