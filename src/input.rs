//! Resolution of the version string from an argument or standard input

use std::io::Read;

use crate::error::InputError;

/// Positional argument that explicitly requests standard input
pub const STDIN_ARG: &str = "-";

/// Where the version string comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    Argument(String),
    /// `explicit` is set when `-` was passed rather than no argument at all
    Stdin { explicit: bool },
}

impl VersionSource {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => VersionSource::Stdin { explicit: false },
            Some(STDIN_ARG) => VersionSource::Stdin { explicit: true },
            Some(value) => VersionSource::Argument(value.to_string()),
        }
    }
}

/// Produce the trimmed version string, reading `reader` only for stdin sources.
pub fn resolve_version<R: Read>(source: &VersionSource, mut reader: R) -> Result<String, InputError> {
    match source {
        VersionSource::Argument(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(InputError::Missing);
            }
            Ok(trimmed.to_string())
        }
        VersionSource::Stdin { explicit } => {
            let mut buf = String::new();
            reader.read_to_string(&mut buf)?;

            let trimmed = buf.trim();
            match (trimmed.is_empty(), explicit) {
                (true, true) => Err(InputError::EmptyStdin),
                (true, false) => Err(InputError::Missing),
                (false, _) => {
                    tracing::debug!(version = trimmed, "read version from stdin");
                    Ok(trimmed.to_string())
                }
            }
        }
    }
}
