/// Minimum git version the crate is exercised against
const MIN_GIT_VERSION: (u32, u32) = (2, 20);

/// Extract a dotted three-part version from free text
///
/// Version banners vary across git builds ("git version 2.39.2",
/// "git version 2.39.2.windows.1"); when no dotted numeric triple is
/// present the trimmed raw text is returned unchanged rather than an
/// error.
pub fn parse_version(raw: &str) -> String {
    for token in raw.split_whitespace() {
        let nums: Vec<&str> = token.split('.').collect();
        if nums.len() >= 3
            && nums[..3]
                .iter()
                .all(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        {
            return nums[..3].join(".");
        }
    }

    raw.trim().to_string()
}

/// Represents a git version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GitVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl GitVersion {
    /// Parse a dotted version string like "2.39.2"
    pub fn parse(version: &str) -> Option<Self> {
        let mut nums = version.trim().split('.');
        let major = nums.next()?.parse().ok()?;
        let minor = nums.next()?.parse().ok()?;
        let patch = nums.next().and_then(|n| n.parse().ok()).unwrap_or(0);

        Some(GitVersion {
            major,
            minor,
            patch,
        })
    }

    /// Check if this version meets minimum requirements
    pub fn is_supported(&self) -> bool {
        self.major > MIN_GIT_VERSION.0
            || (self.major == MIN_GIT_VERSION.0 && self.minor >= MIN_GIT_VERSION.1)
    }
}

impl std::fmt::Display for GitVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
