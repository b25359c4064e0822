use crate::domain::prerelease::PreReleaseToken;
use crate::domain::version::VersionBump;
use crate::error::{NextVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Requested transition from the latest tag to the next one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpType {
    /// Continue or start an alpha/beta/rc series
    PreRelease(PreReleaseToken),
    /// Strip the pre-release descriptor of the latest version
    PromoteToFinal,
    /// Increment a numeric component of the finalized latest version
    Release(VersionBump),
}

impl BumpType {
    /// Accepted spellings, in the order they are documented
    pub const NAMES: [&'static str; 7] = [
        "alpha",
        "beta",
        "rc",
        "promote_to_final",
        "patch",
        "minor",
        "major",
    ];

    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Whether the version produced by this bump carries a pre-release descriptor
    pub fn is_prerelease(&self) -> bool {
        matches!(self, BumpType::PreRelease(_))
    }
}

impl FromStr for BumpType {
    type Err = NextVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(BumpType::PreRelease(PreReleaseToken::Alpha)),
            "beta" => Ok(BumpType::PreRelease(PreReleaseToken::Beta)),
            "rc" => Ok(BumpType::PreRelease(PreReleaseToken::ReleaseCandidate)),
            "promote_to_final" => Ok(BumpType::PromoteToFinal),
            "patch" => Ok(BumpType::Release(VersionBump::Patch)),
            "minor" => Ok(BumpType::Release(VersionBump::Minor)),
            "major" => Ok(BumpType::Release(VersionBump::Major)),
            other => Err(NextVersionError::config(format!(
                "Unknown BUMP_TYPE '{}' (expected one of: {})",
                other,
                BumpType::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpType::PreRelease(token) => write!(f, "{}", token),
            BumpType::PromoteToFinal => write!(f, "promote_to_final"),
            BumpType::Release(increment) => write!(f, "{}", increment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for name in BumpType::NAMES {
            let bump = BumpType::parse(name).unwrap();
            assert_eq!(bump.to_string(), name);
        }
    }

    #[test]
    fn test_parse_prerelease_tokens() {
        assert_eq!(
            BumpType::parse("rc").unwrap(),
            BumpType::PreRelease(PreReleaseToken::ReleaseCandidate)
        );
        assert!(BumpType::parse("beta").unwrap().is_prerelease());
    }

    #[test]
    fn test_final_bumps_are_not_prerelease() {
        for name in ["promote_to_final", "patch", "minor", "major"] {
            assert!(!BumpType::parse(name).unwrap().is_prerelease());
        }
    }

    #[test]
    fn test_parse_unknown_is_config_error() {
        let err = BumpType::parse("hotfix").unwrap_err();
        assert!(matches!(err, NextVersionError::Config(_)));
        assert!(err.to_string().contains("'hotfix'"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(BumpType::parse("Patch").is_err());
        assert!(BumpType::parse(" patch").is_err());
        assert!(BumpType::parse("").is_err());
    }
}
