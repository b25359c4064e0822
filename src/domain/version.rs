use crate::domain::prerelease::{PreRelease, PreReleaseToken};
use crate::error::{NextVersionError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Semantic version: major.minor.patch with an optional pre-release descriptor
///
/// Ordering follows semver precedence, so `1.0.0-rc.1 < 1.0.0`. Build
/// metadata is not represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<PreRelease>,
}

impl Version {
    /// Create a new final version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Same base numbers with the given pre-release descriptor
    pub fn with_pre(&self, pre: PreRelease) -> Self {
        Version {
            pre: Some(pre),
            ..self.clone()
        }
    }

    /// Parse a bare semantic version (no tag prefix), e.g. "0.3.0-rc.2"
    pub fn parse(s: &str) -> Result<Self> {
        let parsed = semver::Version::parse(s).map_err(|e| {
            NextVersionError::version(format!("Invalid semantic version '{}': {}", s, e))
        })?;

        let pre = if parsed.pre.is_empty() {
            None
        } else {
            Some(PreRelease::parse(parsed.pre.as_str())?)
        };

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            pre,
        })
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// Strip the pre-release descriptor, keeping major.minor.patch
    pub fn finalize(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Bump a numeric component of the finalized version
    ///
    /// Fails when the component is already at `u64::MAX`.
    pub fn bump(&self, bump_type: &VersionBump) -> Result<Self> {
        let overflow = || {
            NextVersionError::version(format!(
                "Cannot apply a {} bump to {}: component out of range",
                bump_type, self
            ))
        };

        Ok(match bump_type {
            VersionBump::Major => {
                Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            VersionBump::Minor => Version::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            VersionBump::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        })
    }

    /// Next version in the `token` series on the same base numbers
    ///
    /// Continues the counter when this version is already in that series,
    /// otherwise starts the series at `.1`.
    pub fn next_prerelease(&self, token: &PreReleaseToken) -> Result<Self> {
        let pre = match &self.pre {
            Some(current) if current.token == *token => current.increment()?,
            _ => PreRelease::first(token.clone()),
        };
        Ok(self.with_pre(pre))
    }

    fn to_semver(&self) -> semver::Version {
        let mut version = semver::Version::new(self.major, self.minor, self.patch);
        if let Some(pre) = &self.pre {
            // Descriptors only come from parsed tags or known tokens, so they are valid identifiers.
            version.pre = semver::Prerelease::new(&pre.to_string()).unwrap_or(semver::Prerelease::EMPTY);
        }
        version
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_semver().cmp(&other.to_semver())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

/// Numeric component to increment for a final release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}
