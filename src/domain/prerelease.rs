//! Pre-release descriptors for semantic versions
//!
//! Release pipelines move through `alpha`, `beta` and `rc` series, each with a
//! numeric counter (`alpha.1`, `alpha.2`, ...). Labels of any other shape found
//! on existing tags are kept verbatim so they still order correctly.
//! According to semver.org: https://semver.org/#spec-item-9

use crate::error::{NextVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release series token (alpha, beta, rc, or a foreign label)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreReleaseToken {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
    /// Any other label, kept verbatim (e.g. "dev.3.x")
    Custom(String),
}

impl PreReleaseToken {
    /// Parse one of the known series tokens
    ///
    /// Matching is exact: "Alpha" or "a" are not the alpha series.
    ///
    /// # Returns
    /// * `Ok(PreReleaseToken)` - One of `Alpha`, `Beta`, `ReleaseCandidate`
    /// * `Err` - If the string is not a known series token
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for PreReleaseToken {
    type Err = NextVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(PreReleaseToken::Alpha),
            "beta" => Ok(PreReleaseToken::Beta),
            "rc" => Ok(PreReleaseToken::ReleaseCandidate),
            other => Err(NextVersionError::version(format!(
                "Unknown pre-release token: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PreReleaseToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseToken::Alpha => write!(f, "alpha"),
            PreReleaseToken::Beta => write!(f, "beta"),
            PreReleaseToken::ReleaseCandidate => write!(f, "rc"),
            PreReleaseToken::Custom(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release descriptor: a token with an optional counter
///
/// # Examples
/// - "alpha.1" -> PreRelease { token: Alpha, number: Some(1) }
/// - "rc" -> PreRelease { token: ReleaseCandidate, number: None }
/// - "dev.x" -> PreRelease { token: Custom("dev.x"), number: None }
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    pub token: PreReleaseToken,
    pub number: Option<u64>,
}

impl PreRelease {
    pub fn new(token: PreReleaseToken, number: Option<u64>) -> Self {
        PreRelease { token, number }
    }

    /// The first member of a series, e.g. "beta.1"
    pub fn first(token: PreReleaseToken) -> Self {
        PreRelease::new(token, Some(1))
    }

    /// Parse a pre-release label as it appears after the `-` of a version
    ///
    /// Labels of the form `<token>` or `<token>.<n>` with a known token become
    /// counted descriptors; anything else becomes a `Custom` token holding the
    /// whole label.
    ///
    /// # Returns
    /// * `Ok(PreRelease)` - Parsed descriptor
    /// * `Err` - If the label is empty
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(NextVersionError::version("Empty pre-release label"));
        }

        let (head, tail) = match s.split_once('.') {
            Some((head, tail)) => (head, Some(tail)),
            None => (s, None),
        };

        let known = match PreReleaseToken::parse(head) {
            Ok(token) => token,
            Err(_) => return Ok(PreRelease::new(PreReleaseToken::Custom(s.to_string()), None)),
        };

        match tail {
            None => Ok(PreRelease::new(known, None)),
            // Only canonical decimals count; "alpha.01" is kept verbatim.
            Some(n) => match n.parse::<u64>() {
                Ok(number) if number.to_string() == n => Ok(PreRelease::new(known, Some(number))),
                _ => Ok(PreRelease::new(PreReleaseToken::Custom(s.to_string()), None)),
            },
        }
    }

    /// Next member of the same series
    ///
    /// A label without a counter starts counting at 1.
    pub fn increment(&self) -> Result<Self> {
        let number = match self.number {
            Some(n) => n.checked_add(1).ok_or_else(|| {
                NextVersionError::version(format!(
                    "Pre-release counter of '{}' cannot be incremented",
                    self
                ))
            })?,
            None => 1,
        };

        Ok(PreRelease {
            token: self.token.clone(),
            number: Some(number),
        })
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)?;
        if let Some(n) = self.number {
            write!(f, ".{}", n)?;
        }
        Ok(())
    }
}
