use crate::boundary::BoundaryWarning;
use crate::domain::version::Version;
use crate::error::{NextVersionError, Result};
use regex::Regex;
use std::collections::HashSet;

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Create a tag pattern; it must contain `{version}` exactly once
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches(PLACEHOLDER).count() != 1 {
            return Err(NextVersionError::tag(format!(
                "Pattern '{}' must contain the {{version}} placeholder exactly once",
                pattern
            )));
        }

        // Escape everything, then swap the placeholder for a capture group
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(?P<version>.+)");
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| NextVersionError::tag(format!("Invalid pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    /// Extract the version part of a tag, if the tag follows this pattern
    pub fn extract<'a>(&self, tag: &'a str) -> Option<&'a str> {
        self.matcher
            .captures(tag)
            .and_then(|caps| caps.name("version"))
            .map(|m| m.as_str())
    }

    /// Glob selecting candidate tags in git, e.g. "v*"
    pub fn glob(&self) -> String {
        self.pattern.replace(PLACEHOLDER, "*")
    }
}

/// Existing tags: a membership oracle plus the versions that parsed
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    names: HashSet<String>,
    versions: Vec<Version>,
    ignored: Vec<BoundaryWarning>,
}

impl TagSet {
    /// Build a tag set, skipping tags that don't carry a semantic version
    pub fn from_names<I, S>(names: I, pattern: &TagPattern) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = TagSet::default();

        for name in names {
            let name = name.as_ref();
            if name.is_empty() {
                continue;
            }

            match pattern.extract(name) {
                Some(version_part) => match Version::parse(version_part) {
                    Ok(version) => set.versions.push(version),
                    Err(e) => {
                        log::debug!("Skipping tag '{}': {}", name, e);
                        set.ignored.push(BoundaryWarning::UnparsableTag {
                            tag: name.to_string(),
                            reason: e.to_string(),
                        });
                    }
                },
                None => {
                    log::debug!("Skipping tag '{}': pattern mismatch", name);
                    set.ignored.push(BoundaryWarning::TagMismatchPattern {
                        tag: name.to_string(),
                        pattern: pattern.as_str().to_string(),
                    });
                }
            }

            set.names.insert(name.to_string());
        }

        set
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.names.contains(tag)
    }

    /// Overall latest version by semver precedence
    pub fn latest(&self) -> Option<&Version> {
        self.versions.iter().max()
    }

    /// Warnings for tags that were skipped
    pub fn ignored(&self) -> &[BoundaryWarning] {
        &self.ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v_pattern() -> TagPattern {
        TagPattern::new("v{version}").unwrap()
    }

    #[test]
    fn test_pattern_format() {
        let version = Version::parse("0.2.0-alpha.1").unwrap();
        assert_eq!(v_pattern().format(&version), "v0.2.0-alpha.1");
    }

    #[test]
    fn test_pattern_format_with_suffix() {
        let pattern = TagPattern::new("release-{version}").unwrap();
        assert_eq!(pattern.format(&Version::new(1, 2, 3)), "release-1.2.3");
    }

    #[test]
    fn test_pattern_extract() {
        let pattern = v_pattern();
        assert_eq!(pattern.extract("v1.2.3-rc.1"), Some("1.2.3-rc.1"));
        assert_eq!(pattern.extract("release-1.2.3"), None);
        assert_eq!(pattern.extract("v"), None);
    }

    #[test]
    fn test_pattern_escapes_literal_text() {
        let pattern = TagPattern::new("app.v{version}").unwrap();
        assert_eq!(pattern.extract("app.v1.0.0"), Some("1.0.0"));
        assert_eq!(pattern.extract("appXv1.0.0"), None);
    }

    #[test]
    fn test_pattern_requires_single_placeholder() {
        assert!(TagPattern::new("v").is_err());
        assert!(TagPattern::new("{version}-{version}").is_err());
    }

    #[test]
    fn test_pattern_glob() {
        assert_eq!(v_pattern().glob(), "v*");
        assert_eq!(TagPattern::new("release-{version}").unwrap().glob(), "release-*");
    }

    #[test]
    fn test_tag_set_latest_is_prerelease_aware() {
        let tags = ["v0.4.0", "v0.5.0-alpha.3", "v0.5.0-alpha.10", "v0.4.1"];
        let set = TagSet::from_names(tags, &v_pattern());
        assert_eq!(set.latest(), Some(&Version::parse("0.5.0-alpha.10").unwrap()));
    }

    #[test]
    fn test_tag_set_final_beats_its_prereleases() {
        let tags = ["v1.0.0-rc.3", "v1.0.0", "v1.0.0-beta.1"];
        let set = TagSet::from_names(tags, &v_pattern());
        assert_eq!(set.latest(), Some(&Version::new(1, 0, 0)));
    }

    #[test]
    fn test_tag_set_ignores_invalid_tags() {
        let tags = ["vnext", "v1.2", "v1.0.0", "nightly"];
        let set = TagSet::from_names(tags, &v_pattern());

        assert_eq!(set.latest(), Some(&Version::new(1, 0, 0)));
        assert_eq!(set.ignored().len(), 3);
        assert!(set.ignored().iter().all(|w| w.is_ignored_tag()));
        // Unparsed tags still count for membership
        assert!(set.contains("vnext"));
    }

    #[test]
    fn test_tag_set_empty() {
        let set = TagSet::from_names(Vec::<String>::new(), &v_pattern());
        assert_eq!(set.latest(), None);
        assert!(set.ignored().is_empty());
    }

    #[test]
    fn test_tag_set_skips_blank_names() {
        let set = TagSet::from_names(["", "v0.1.0"], &v_pattern());
        assert!(!set.contains(""));
        assert!(set.contains("v0.1.0"));
        assert!(set.ignored().is_empty());
    }
}
