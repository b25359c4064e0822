use std::fmt;

/// Warnings that occur while reading tags or resolving the next version.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag matches the pattern but the version part is not a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Tag doesn't match the configured pattern
    TagMismatchPattern { tag: String, pattern: String },
    /// A new pre-release series kept the latest version's base numbers,
    /// so the computed tag sorts below the latest tag
    PrereleaseBelowLatest { candidate: String, latest: String },
}

impl BoundaryWarning {
    /// Whether this warning only concerns a tag that was skipped
    pub fn is_ignored_tag(&self) -> bool {
        matches!(
            self,
            BoundaryWarning::UnparsableTag { .. } | BoundaryWarning::TagMismatchPattern { .. }
        )
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Ignoring tag '{}': {}", tag, reason)
            }
            BoundaryWarning::TagMismatchPattern { tag, pattern } => {
                write!(f, "Ignoring tag '{}': does not match pattern '{}'", tag, pattern)
            }
            BoundaryWarning::PrereleaseBelowLatest { candidate, latest } => {
                write!(
                    f,
                    "Next tag '{}' sorts below the latest tag '{}'",
                    candidate, latest
                )
            }
        }
    }
}
