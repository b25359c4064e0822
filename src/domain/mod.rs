//! Domain logic - pure versioning rules independent of git operations

pub mod bump;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use bump::BumpType;
pub use prerelease::{PreRelease, PreReleaseToken};
pub use tag::{TagPattern, TagSet};
pub use version::{Version, VersionBump};
