use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{BumpType, PreRelease, PreReleaseToken, TagPattern, TagSet, Version};
use crate::error::{NextVersionError, Result};
use crate::git::Repository;

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The full tag to create, e.g. "v0.5.0-beta.1"
    pub tag: String,
    pub version: Version,
    pub is_prerelease: bool,
    /// Latest existing version the result was derived from
    pub previous: Option<Version>,
    /// `previous` formatted as a tag
    pub previous_tag: Option<String>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Computes the next version tag from the existing tags and a bump request
pub struct VersionResolver {
    pattern: TagPattern,
    bootstrap: Version,
}

impl VersionResolver {
    /// Create a resolver for a tag pattern and the base of the first alpha
    pub fn new(pattern: TagPattern, bootstrap: Version) -> Result<Self> {
        if bootstrap.is_prerelease() {
            return Err(NextVersionError::config(format!(
                "Bootstrap version '{}' must be a final version",
                bootstrap
            )));
        }
        Ok(VersionResolver { pattern, bootstrap })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let pattern = TagPattern::new(config.tags.pattern.as_str())?;
        let bootstrap = Version::parse(&config.bootstrap.version)?;
        VersionResolver::new(pattern, bootstrap)
    }

    /// Read tags from a repository and resolve against them
    pub fn resolve_repository<R: Repository + ?Sized>(
        &self,
        repo: &R,
        bump: &BumpType,
    ) -> Result<Resolution> {
        let glob = self.pattern.glob();
        let tags = repo.list_tags(Some(glob.as_str()))?;
        self.resolve(tags.as_slice(), bump)
    }

    /// Resolve the next tag for `bump` given every existing tag name
    pub fn resolve<S: AsRef<str>>(&self, tags: &[S], bump: &BumpType) -> Result<Resolution> {
        let tag_set = TagSet::from_names(tags, &self.pattern);
        let mut warnings = tag_set.ignored().to_vec();

        let previous = tag_set.latest().cloned();
        let version = match &previous {
            None => self.bootstrap(&tag_set, bump)?,
            Some(latest) => {
                log::debug!("Latest version is {}, applying '{}'", latest, bump);
                self.bump_from(latest, &tag_set, bump)?
            }
        };

        let tag = self.pattern.format(&version);
        let previous_tag = previous.as_ref().map(|latest| self.pattern.format(latest));

        if let (Some(latest), Some(latest_tag)) = (&previous, &previous_tag) {
            if version < *latest {
                warnings.push(BoundaryWarning::PrereleaseBelowLatest {
                    candidate: tag.clone(),
                    latest: latest_tag.clone(),
                });
            }
        }

        log::info!("Next version: {}", tag);

        Ok(Resolution {
            tag,
            is_prerelease: version.is_prerelease(),
            version,
            previous,
            previous_tag,
            warnings,
        })
    }

    fn bootstrap(&self, tag_set: &TagSet, bump: &BumpType) -> Result<Version> {
        match bump {
            BumpType::PreRelease(PreReleaseToken::Alpha) => {
                let candidate = self.bootstrap.next_prerelease(&PreReleaseToken::Alpha)?;
                self.first_unused(candidate, &PreReleaseToken::Alpha, tag_set)
            }
            other => Err(NextVersionError::bootstrap(format!(
                "No existing tags found; initial bump must be 'alpha' to start with {}, got '{}'",
                self.pattern
                    .format(&self.bootstrap.with_pre(PreRelease::first(PreReleaseToken::Alpha))),
                other
            ))),
        }
    }

    fn bump_from(&self, latest: &Version, tag_set: &TagSet, bump: &BumpType) -> Result<Version> {
        match bump {
            BumpType::PreRelease(token) => {
                let candidate = latest.next_prerelease(token)?;
                self.first_unused(candidate, token, tag_set)
            }
            BumpType::PromoteToFinal => {
                if !latest.is_prerelease() {
                    return Err(NextVersionError::state(format!(
                        "Version {} is already final; cannot promote",
                        self.pattern.format(latest)
                    )));
                }
                Ok(latest.finalize())
            }
            BumpType::Release(increment) => latest.finalize().bump(increment),
        }
    }

    /// Advance the series counter until the formatted tag is not taken
    fn first_unused(
        &self,
        mut candidate: Version,
        token: &PreReleaseToken,
        tag_set: &TagSet,
    ) -> Result<Version> {
        while tag_set.contains(&self.pattern.format(&candidate)) {
            log::debug!("Tag {} already exists, skipping", self.pattern.format(&candidate));
            candidate = candidate.next_prerelease(token)?;
        }
        Ok(candidate)
    }
}
