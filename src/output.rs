//! Publishing the resolved values to the CI system
//!
//! Two values are emitted: `next_version` (the full tag) and `is_prerelease`
//! (`"true"` or `"false"`).

use crate::error::Result;
use crate::resolver::Resolution;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable naming the GitHub Actions step output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Where and how the output values are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `$GITHUB_OUTPUT` file when set, else `::set-output` workflow commands
    #[default]
    Github,
    /// `key=value` lines on stdout
    Plain,
}

/// Ordered key/value pairs for a resolution
pub fn output_pairs(resolution: &Resolution) -> [(&'static str, String); 2] {
    [
        ("next_version", resolution.tag.clone()),
        ("is_prerelease", resolution.is_prerelease.to_string()),
    ]
}

/// The step output file announced by the runner, if any
pub fn github_output_path() -> Option<PathBuf> {
    std::env::var_os(GITHUB_OUTPUT_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Write the output values in the requested format
///
/// # Arguments
/// * `github_output` - Step output file; only used by [OutputFormat::Github]
/// * `stdout` - Destination for everything not written to a file
pub fn write_outputs<W: Write>(
    resolution: &Resolution,
    format: OutputFormat,
    github_output: Option<&Path>,
    stdout: &mut W,
) -> Result<()> {
    let pairs = output_pairs(resolution);

    match (format, github_output) {
        (OutputFormat::Github, Some(path)) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            for (key, value) in &pairs {
                writeln!(file, "{}={}", key, value)?;
            }
            log::debug!("Appended outputs to {}", path.display());
        }
        (OutputFormat::Github, None) => {
            for (key, value) in &pairs {
                writeln!(stdout, "::set-output name={}::{}", key, value)?;
            }
        }
        (OutputFormat::Plain, _) => {
            for (key, value) in &pairs {
                writeln!(stdout, "{}={}", key, value)?;
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;

    fn resolution(tag: &str, is_prerelease: bool) -> Resolution {
        Resolution {
            tag: tag.to_string(),
            version: Version::parse(tag.trim_start_matches('v')).unwrap(),
            is_prerelease,
            previous: None,
            previous_tag: None,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_plain_output() {
        let mut out = Vec::new();
        write_outputs(&resolution("v0.3.0", false), OutputFormat::Plain, None, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "next_version=v0.3.0\nis_prerelease=false\n"
        );
    }

    #[test]
    fn test_github_legacy_commands_without_output_file() {
        let mut out = Vec::new();
        write_outputs(
            &resolution("v0.2.0-alpha.1", true),
            OutputFormat::Github,
            None,
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "::set-output name=next_version::v0.2.0-alpha.1\n::set-output name=is_prerelease::true\n"
        );
    }

    #[test]
    fn test_github_output_file_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "earlier=value\n").unwrap();

        let mut out = Vec::new();
        write_outputs(
            &resolution("v1.4.0", false),
            OutputFormat::Github,
            Some(&path),
            &mut out,
        )
        .unwrap();

        assert!(out.is_empty());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "earlier=value\nnext_version=v1.4.0\nis_prerelease=false\n"
        );
    }

    #[test]
    fn test_plain_ignores_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");

        let mut out = Vec::new();
        write_outputs(&resolution("v1.4.0", false), OutputFormat::Plain, Some(&path), &mut out)
            .unwrap();

        assert!(!path.exists());
        assert!(!out.is_empty());
    }
}
