use std::path::PathBuf;

use thiserror::Error;

use crate::domain::BumpKind;

/// Errors produced while parsing or bumping a version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BumpError {
    #[error("invalid bump kind: {kind} (valid: {accepted})")]
    InvalidKind { kind: String, accepted: String },

    #[error("invalid version '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("unsupported prerelease format: {0}")]
    UnsupportedPrereleaseFormat(String),

    #[error("{component} number overflows when incremented")]
    Overflow { component: &'static str },
}

/// Convenience type alias for bump results
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create an invalid kind error listing every accepted kind
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        BumpError::InvalidKind {
            kind: kind.into(),
            accepted: BumpKind::accepted(),
        }
    }

    /// Create a parse error for the original, unmodified input
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported_prerelease(prerelease: impl Into<String>) -> Self {
        BumpError::UnsupportedPrereleaseFormat(prerelease.into())
    }
}

/// Errors raised while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors raised while resolving the version string to bump
#[derive(Error, Debug)]
pub enum InputError {
    #[error("stdin empty while '-' specified")]
    EmptyStdin,

    #[error("no version provided; pass VERSION or pipe it on stdin")]
    Missing,

    #[error("failed to read version from stdin: {0}")]
    Io(#[from] std::io::Error),
}
