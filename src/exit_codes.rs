//! Exit codes for the CLI

use semver_bump::{BumpError, ConfigError, InputError};

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Version could not be read
pub const INPUT_ERROR: i32 = 3;

/// Version could not be parsed or bumped
pub const VERSION_ERROR: i32 = 4;

/// Map an error to its exit code by its root type
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.is::<BumpError>() {
        VERSION_ERROR
    } else if err.is::<InputError>() {
        INPUT_ERROR
    } else if err.is::<ConfigError>() {
        CONFIG_ERROR
    } else {
        ERROR
    }
}
