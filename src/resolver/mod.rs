//! Resolution engine for the next release tag

pub mod version_resolver;

pub use version_resolver::{Resolution, VersionResolver};
