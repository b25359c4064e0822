//! Main workflow orchestration logic
//!
//! Separates CLI argument parsing from the resolution itself, so the workflow
//! can be driven programmatically without depending on clap.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::BumpType;
use crate::error::{NextVersionError, Result};
use crate::git::Git2Repository;
use crate::resolver::{Resolution, VersionResolver};

/// Arguments for the resolve workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveWorkflowArgs {
    /// Raw bump type, usually taken from `BUMP_TYPE`
    pub bump: Option<String>,

    /// Repository to read tags from (discovered upward from this path)
    pub repo_path: PathBuf,

    /// Explicit tag list; when set, git is not consulted
    pub tags: Option<Vec<String>>,
}

impl ResolveWorkflowArgs {
    /// Validate the requested bump type
    ///
    /// A missing or blank value is a configuration error, as is an unknown name.
    pub fn bump_type(&self) -> Result<BumpType> {
        match self.bump.as_deref() {
            Some(raw) if !raw.is_empty() => BumpType::parse(raw),
            _ => Err(NextVersionError::config(
                "BUMP_TYPE environment variable not set",
            )),
        }
    }
}

/// Main resolve workflow
///
/// 1. Validate the bump type
/// 2. Build the resolver from configuration
/// 3. Read existing tags (explicit list or git repository)
/// 4. Compute the next tag
pub fn run_resolve_workflow(args: &ResolveWorkflowArgs, config: &Config) -> Result<Resolution> {
    let bump = args.bump_type()?;
    let resolver = VersionResolver::from_config(config)?;

    match &args.tags {
        Some(tags) => {
            log::debug!("Using {} tag(s) given on the command line", tags.len());
            resolver.resolve(tags.as_slice(), &bump)
        }
        None => {
            let repo = Git2Repository::open(&args.repo_path)?;
            resolver.resolve_repository(&repo, &bump)
        }
    }
}
