use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    tags: Vec<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository holding the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockRepository {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

/// Minimal glob support: a literal, or a literal prefix followed by `*`
fn glob_matches(pattern: &str, name: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        }
        None => pattern == name,
    }
}

impl Repository for MockRepository {
    fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self
            .tags
            .iter()
            .filter(|tag| pattern.map_or(true, |p| glob_matches(p, tag)))
            .cloned()
            .collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }
}
