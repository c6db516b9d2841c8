use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{BumpKind, PrereleaseShape, Version};
use crate::error::{BumpError, Result};

/// How a prerelease is promoted when a non-prerelease bump is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PromotionPolicy {
    /// Apply the requested increment, then drop the prerelease (`1.2.3-rc.4` -> `1.2.4`)
    #[default]
    Increment,
    /// Drop the prerelease only (`1.2.3-rc.4` -> `1.2.3`)
    Strip,
}

/// A single bump request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpRequest {
    pub kind: BumpKind,
    /// Increment an existing prerelease, or start a new `rc.1` train
    pub prerelease: bool,
}

impl BumpRequest {
    pub fn new(kind: BumpKind, prerelease: bool) -> Self {
        BumpRequest { kind, prerelease }
    }
}

/// Everything the engine needs for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpOptions {
    pub request: BumpRequest,
    pub promotion: PromotionPolicy,
}

impl From<BumpRequest> for BumpOptions {
    fn from(request: BumpRequest) -> Self {
        BumpOptions {
            request,
            promotion: PromotionPolicy::default(),
        }
    }
}

/// Bump with the default promotion policy
pub fn bump(version: &Version, request: BumpRequest) -> Result<Version> {
    bump_with(version, &BumpOptions::from(request))
}

/// Compute the next version.
///
/// Branches are checked in order:
/// 1. **Promote**: not a prerelease bump but the version has a prerelease;
///    handled according to [`PromotionPolicy`]
/// 2. **Prerelease increment**: the trailing prerelease number += 1, kind ignored
/// 3. **Release bump**: component increment for the kind
/// 4. **Prerelease start**: component increment, then `rc.1`
///
/// The input is never modified; a failure leaves no partial result.
pub fn bump_with(version: &Version, options: &BumpOptions) -> Result<Version> {
    let BumpRequest { kind, prerelease } = options.request;

    match (prerelease, version.is_prerelease()) {
        (false, true) => {
            debug!(%version, policy = ?options.promotion, "promoting prerelease");
            match options.promotion {
                PromotionPolicy::Increment => increment(version, kind),
                PromotionPolicy::Strip => Ok(version.release()),
            }
        }
        (true, true) => {
            debug!(%version, "incrementing prerelease");
            let next = PrereleaseShape::classify(&version.prerelease)?.next()?;
            Ok(version.release().with_prerelease(next.into_identifiers()))
        }
        (false, false) => {
            debug!(%version, %kind, "bumping release");
            increment(version, kind)
        }
        (true, false) => {
            debug!(%version, %kind, "starting prerelease");
            Ok(increment(version, kind)?
                .with_prerelease(PrereleaseShape::initial().into_identifiers()))
        }
    }
}

/// Increments the component for `kind` and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// The result never carries a prerelease.
fn increment(version: &Version, kind: BumpKind) -> Result<Version> {
    let next = |n: u64, component: &'static str| {
        n.checked_add(1).ok_or(BumpError::Overflow { component })
    };

    Ok(match kind {
        BumpKind::Major => Version::new(next(version.major, "major")?, 0, 0),
        BumpKind::Minor => Version::new(version.major, next(version.minor, "minor")?, 0),
        BumpKind::Patch => {
            Version::new(version.major, version.minor, next(version.patch, "patch")?)
        }
    })
}

/// Bump a raw version string with a raw kind, e.g. `("v1.2.3", "minor", false)` -> `"v1.3.0"`
///
/// The kind is validated before the version is parsed. The leading `v`/`V`
/// marker, if any, is preserved.
pub fn bump_version(raw: &str, kind: &str, prerelease: bool) -> Result<String> {
    let kind: BumpKind = kind.parse()?;
    bump_version_with(raw, &BumpOptions::from(BumpRequest::new(kind, prerelease)))
}

pub fn bump_version_with(raw: &str, options: &BumpOptions) -> Result<String> {
    let (version, marker) = Version::parse(raw)?;
    let next = bump_with(&version, options)?;
    let rendered = next.render(marker);
    debug!(from = raw, to = %rendered, "bumped version");
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Version {
        Version::parse(raw).unwrap().0
    }

    fn request(kind: BumpKind, prerelease: bool) -> BumpRequest {
        BumpRequest::new(kind, prerelease)
    }

    #[test]
    fn test_bump_major() {
        let bumped = bump(&Version::new(1, 2, 3), request(BumpKind::Major, false)).unwrap();
        assert_eq!(bumped, Version::new(2, 0, 0));
    }

    #[test]
    fn test_bump_minor() {
        let bumped = bump(&Version::new(1, 2, 3), request(BumpKind::Minor, false)).unwrap();
        assert_eq!(bumped, Version::new(1, 3, 0));
    }

    #[test]
    fn test_bump_patch() {
        let bumped = bump(&Version::new(1, 2, 3), request(BumpKind::Patch, false)).unwrap();
        assert_eq!(bumped, Version::new(1, 2, 4));
    }

    #[test]
    fn test_start_prerelease_for_every_kind() {
        let v = Version::new(1, 2, 3);
        assert_eq!(
            bump(&v, request(BumpKind::Patch, true)).unwrap().to_string(),
            "1.2.4-rc.1"
        );
        assert_eq!(
            bump(&v, request(BumpKind::Minor, true)).unwrap().to_string(),
            "1.3.0-rc.1"
        );
        assert_eq!(
            bump(&v, request(BumpKind::Major, true)).unwrap().to_string(),
            "2.0.0-rc.1"
        );
    }

    #[test]
    fn test_prerelease_increment_ignores_kind() {
        for kind in BumpKind::ALL {
            assert_eq!(
                bump(&parse("1.2.3-1"), request(kind, true)).unwrap().to_string(),
                "1.2.3-2"
            );
            assert_eq!(
                bump(&parse("1.2.3-rc.1"), request(kind, true))
                    .unwrap()
                    .to_string(),
                "1.2.3-rc.2"
            );
        }
    }

    #[test]
    fn test_prerelease_increment_unsupported_shape() {
        for raw in ["1.2.3-alpha.beta.1", "1.2.3-alpha", "1.2.3-rc.x", "1.2.3-1.2"] {
            let err = bump(&parse(raw), request(BumpKind::Patch, true)).unwrap_err();
            assert!(
                matches!(err, BumpError::UnsupportedPrereleaseFormat(_)),
                "{} gave {:?}",
                raw,
                err
            );
        }
    }

    #[test]
    fn test_promotion_increment_policy() {
        let v = parse("1.2.3-rc.4");
        assert_eq!(
            bump(&v, request(BumpKind::Patch, false)).unwrap(),
            Version::new(1, 2, 4)
        );
        assert_eq!(
            bump(&v, request(BumpKind::Major, false)).unwrap(),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_promotion_strip_policy() {
        let options = BumpOptions {
            request: request(BumpKind::Major, false),
            promotion: PromotionPolicy::Strip,
        };
        assert_eq!(
            bump_with(&parse("1.2.3-alpha.beta.1"), &options).unwrap(),
            Version::new(1, 2, 3)
        );
    }

    #[test]
    fn test_promotion_accepts_any_prerelease_shape() {
        let bumped = bump(&parse("1.2.3-alpha.beta.1"), request(BumpKind::Minor, false)).unwrap();
        assert_eq!(bumped, Version::new(1, 3, 0));
    }

    #[test]
    fn test_overflow_is_reported() {
        let v = Version::new(0, 0, u64::MAX);
        assert_eq!(
            bump(&v, request(BumpKind::Patch, false)).unwrap_err(),
            BumpError::Overflow { component: "patch" }
        );
        // Minor resets patch, so a saturated patch is irrelevant.
        assert_eq!(
            bump(&v, request(BumpKind::Minor, false)).unwrap(),
            Version::new(0, 1, 0)
        );
    }

    #[test]
    fn test_bump_does_not_modify_input() {
        let v = parse("1.2.3-rc.1");
        let before = v.clone();
        let _ = bump(&v, request(BumpKind::Major, true)).unwrap();
        assert_eq!(v, before);
    }

    #[test]
    fn test_bump_version_preserves_marker() {
        assert_eq!(bump_version("0.0.0", "patch", false).unwrap(), "0.0.1");
        assert_eq!(bump_version("v1.2.3", "patch", false).unwrap(), "v1.2.4");
        assert_eq!(
            bump_version("V5.63.632462", "patch", false).unwrap(),
            "V5.63.632463"
        );
    }

    #[test]
    fn test_bump_version_validates_kind_first() {
        let err = bump_version("not-a-version", "bogus", false).unwrap_err();
        assert!(matches!(err, BumpError::InvalidKind { .. }));
    }

    #[test]
    fn test_bump_version_kind_case_insensitive() {
        assert_eq!(bump_version("1.2.3", "MAJOR", false).unwrap(), "2.0.0");
    }

    #[test]
    fn test_bump_version_drops_build_metadata() {
        assert_eq!(
            bump_version("v1.2.3+build.5", "patch", false).unwrap(),
            "v1.2.4"
        );
    }
}
