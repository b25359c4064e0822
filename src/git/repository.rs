use crate::error::Result;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(pattern)?;

        let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        names.sort();
        log::debug!("Read {} tag(s) matching {:?}", names.len(), pattern);

        Ok(names)
    }
}

// SAFETY: Git2Repository is only used for read operations, which libgit2
// supports from multiple threads on a single repository handle.
unsafe impl Sync for Git2Repository {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;

    fn repo_with_tags(tags: &[&str]) -> (tempfile::TempDir, Git2Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            let oid = repo
                .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .unwrap();
            let object = repo.find_object(oid, None).unwrap();
            for tag in tags {
                repo.tag_lightweight(tag, &object, false).unwrap();
            }
        }
        (dir, Git2Repository::from_git2(repo))
    }

    #[test]
    fn test_list_tags_filters_by_glob() {
        let (_dir, repo) = repo_with_tags(&["v0.2.0-alpha.1", "v0.2.0", "deploy-3"]);

        let tags = repo.list_tags(Some("v*")).unwrap();
        assert_eq!(tags, vec!["v0.2.0", "v0.2.0-alpha.1"]);
    }

    #[test]
    fn test_list_tags_without_filter() {
        let (_dir, repo) = repo_with_tags(&["v1.0.0", "deploy-3"]);

        let tags = repo.list_tags(None).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_list_tags_empty_repository() {
        let (_dir, repo) = repo_with_tags(&[]);
        assert!(repo.list_tags(Some("v*")).unwrap().is_empty());
    }

    #[test]
    fn test_open_discovers_from_subdirectory() {
        let (dir, _repo) = repo_with_tags(&["v1.0.0"]);
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        let repo = Git2Repository::open(&nested).unwrap();
        assert_eq!(repo.list_tags(Some("v*")).unwrap(), vec!["v1.0.0"]);
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A bare temp dir may still sit inside some enclosing repository, so
        // only assert when discovery really fails.
        if let Err(e) = Git2Repository::open(dir.path()) {
            assert!(e.to_string().contains("Git operation failed"));
        }
    }
}
