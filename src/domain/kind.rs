use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BumpError;

/// Which release component a bump increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpKind {
    /// Every accepted kind, in the order they are listed to users
    pub const ALL: [BumpKind; 3] = [BumpKind::Major, BumpKind::Minor, BumpKind::Patch];

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }

    /// Accepted kinds joined for diagnostics, e.g. `major | minor | patch`
    pub fn accepted() -> String {
        BumpKind::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl FromStr for BumpKind {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            _ => Err(BumpError::invalid_kind(s)),
        }
    }
}

impl TryFrom<String> for BumpKind {
    type Error = BumpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BumpKind> for String {
    fn from(kind: BumpKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("major".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!("minor".parse::<BumpKind>().unwrap(), BumpKind::Minor);
        assert_eq!("patch".parse::<BumpKind>().unwrap(), BumpKind::Patch);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("MAJOR".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!("Minor".parse::<BumpKind>().unwrap(), BumpKind::Minor);
        assert_eq!("pAtCh".parse::<BumpKind>().unwrap(), BumpKind::Patch);
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = "bogus".parse::<BumpKind>().unwrap_err();
        assert_eq!(
            err,
            BumpError::InvalidKind {
                kind: "bogus".to_string(),
                accepted: "major | minor | patch".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty_and_rc() {
        assert!("".parse::<BumpKind>().is_err());
        assert!("rc".parse::<BumpKind>().is_err());
        assert!(" patch".parse::<BumpKind>().is_err());
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(BumpKind::Major.to_string(), "major");
        assert_eq!("MINOR".parse::<BumpKind>().unwrap().to_string(), "minor");
    }

    #[test]
    fn test_default_is_patch() {
        assert_eq!(BumpKind::default(), BumpKind::Patch);
    }
}
