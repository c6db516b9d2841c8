//! Prerelease shapes that support an in-place increment
//!
//! Only two shapes can be incremented: a lone number (`-5`) and a tag followed
//! by a number (`-rc.5`). Fresh prerelease trains start at `rc.1`.

use crate::domain::version::Identifier;
use crate::error::{BumpError, Result};

/// Tag used when a new prerelease train is started
pub const INITIAL_TAG: &str = "rc";

/// First number of a new prerelease train
pub const INITIAL_NUMBER: u64 = 1;

/// A prerelease sequence in one of the incrementable shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrereleaseShape {
    /// `-<n>`
    Numeric(u64),
    /// `-<tag>.<n>`
    Tagged(String, u64),
}

impl PrereleaseShape {
    /// The shape a brand new prerelease starts with (`rc.1`)
    pub fn initial() -> Self {
        PrereleaseShape::Tagged(INITIAL_TAG.to_string(), INITIAL_NUMBER)
    }

    /// Classify a prerelease sequence
    ///
    /// # Returns
    /// * `Ok(PrereleaseShape)` - The sequence is `-n` or `-tag.n`
    /// * `Err(UnsupportedPrereleaseFormat)` - Any other sequence, carrying its text
    pub fn classify(identifiers: &[Identifier]) -> Result<Self> {
        match identifiers {
            [Identifier::Numeric(n)] => Ok(PrereleaseShape::Numeric(*n)),
            [Identifier::Text(tag), Identifier::Numeric(n)] => {
                Ok(PrereleaseShape::Tagged(tag.clone(), *n))
            }
            _ => Err(BumpError::unsupported_prerelease(join(identifiers))),
        }
    }

    /// Increment the trailing number
    pub fn next(&self) -> Result<Self> {
        let bump = |n: u64| {
            n.checked_add(1).ok_or(BumpError::Overflow {
                component: "prerelease",
            })
        };

        Ok(match self {
            PrereleaseShape::Numeric(n) => PrereleaseShape::Numeric(bump(*n)?),
            PrereleaseShape::Tagged(tag, n) => PrereleaseShape::Tagged(tag.clone(), bump(*n)?),
        })
    }

    pub fn into_identifiers(self) -> Vec<Identifier> {
        match self {
            PrereleaseShape::Numeric(n) => vec![Identifier::Numeric(n)],
            PrereleaseShape::Tagged(tag, n) => vec![Identifier::Text(tag), Identifier::Numeric(n)],
        }
    }
}

fn join(identifiers: &[Identifier]) -> String {
    identifiers
        .iter()
        .map(Identifier::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
