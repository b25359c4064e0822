//! Git operations abstraction layer
//!
//! The resolver only ever needs one thing from version control: the names of
//! the existing tags. This module puts that behind the [Repository] trait so
//! the resolver can be exercised without a real repository.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust
//! # use next_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.list_tags(Some("v*"))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only view of a repository's tags
///
/// Implementors must be `Send + Sync`. Errors from the underlying git library
/// are mapped to [crate::error::NextVersionError].
pub trait Repository: Send + Sync {
    /// Get tag names, optionally filtered by a glob such as `v*`
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names sorted alphabetically
    /// * `Err` - If the tags cannot be read
    fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>>;
}
