use thiserror::Error;

/// Unified error type for next-version operations
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bootstrap error: {0}")]
    Bootstrap(String),

    #[error("State error: {0}")]
    State(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(msg.into())
    }

    /// Create a bootstrap error (no tags yet, wrong first bump)
    pub fn bootstrap(msg: impl Into<String>) -> Self {
        NextVersionError::Bootstrap(msg.into())
    }

    /// Create a state error (bump not valid for the latest version)
    pub fn state(msg: impl Into<String>) -> Self {
        NextVersionError::State(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        NextVersionError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        NextVersionError::Tag(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NextVersionError::config("BUMP_TYPE environment variable not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: BUMP_TYPE environment variable not set"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NextVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git2() {
        let git_err = git2::Error::from_str("could not find repository");
        let err: NextVersionError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (NextVersionError::config("x"), "Configuration error"),
            (NextVersionError::bootstrap("x"), "Bootstrap error"),
            (NextVersionError::state("x"), "State error"),
            (NextVersionError::version("x"), "Version parsing error"),
            (NextVersionError::tag("x"), "Tag error"),
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
    fn test_error_empty_messages() {
        let errors = vec![
            NextVersionError::config(""),
            NextVersionError::bootstrap(""),
            NextVersionError::state(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let err = NextVersionError::state("Version 'v1.0.0' is already final");
        assert!(err.to_string().contains("'v1.0.0'"));
    }
}
