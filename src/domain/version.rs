use std::fmt;

use tracing::debug;

use crate::error::{BumpError, Result};

/// Leading character captured from the input and reapplied on output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Absent,
    Lower,
    Upper,
}

impl Marker {
    /// Split at most one leading `v`/`V` off the input
    pub fn split(raw: &str) -> (Marker, &str) {
        if let Some(rest) = raw.strip_prefix('v') {
            (Marker::Lower, rest)
        } else if let Some(rest) = raw.strip_prefix('V') {
            (Marker::Upper, rest)
        } else {
            (Marker::Absent, raw)
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Absent => "",
            Marker::Lower => "v",
            Marker::Upper => "V",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dot-separated prerelease identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

/// Semantic version representation
///
/// Build metadata is validated by [`Version::parse`] but not retained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Identifier>,
}

impl Version {
    /// Create a final release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
        }
    }

    /// Parse a version string (e.g., "v1.2.3-rc.1" -> Version(1,2,3,[rc,1]) + Marker::Lower)
    ///
    /// Only one leading marker is stripped, so `vv1.0.0` is rejected. The
    /// remainder must follow SemVer 2.0.0 exactly.
    pub fn parse(raw: &str) -> Result<(Self, Marker)> {
        let (marker, rest) = Marker::split(raw);

        let parsed =
            semver::Version::parse(rest).map_err(|e| BumpError::parse(raw, e.to_string()))?;

        let prerelease = if parsed.pre.is_empty() {
            Vec::new()
        } else {
            parsed
                .pre
                .as_str()
                .split('.')
                .map(|id| classify(raw, id))
                .collect::<Result<Vec<_>>>()?
        };

        let version = Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease,
        };
        debug!(input = raw, ?marker, %version, "parsed version");

        Ok((version, marker))
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// The same release numbers without any prerelease
    pub fn release(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    pub fn with_prerelease(mut self, prerelease: Vec<Identifier>) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Dot-joined prerelease identifiers, empty for a final release
    pub fn prerelease_string(&self) -> String {
        self.prerelease
            .iter()
            .map(Identifier::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Render with the marker captured at parse time
    pub fn render(&self, marker: Marker) -> String {
        format!("{}{}", marker, self)
    }
}

// Leading zeros were already rejected by the semver grammar.
fn classify(raw: &str, id: &str) -> Result<Identifier> {
    if id.bytes().all(|b| b.is_ascii_digit()) {
        id.parse::<u64>().map(Identifier::Numeric).map_err(|_| {
            BumpError::parse(raw, format!("prerelease number '{}' is too large", id))
        })
    } else {
        Ok(Identifier::Text(id.to_string()))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_prerelease() {
            write!(f, "-{}", self.prerelease_string())?;
        }
        Ok(())
    }
}
