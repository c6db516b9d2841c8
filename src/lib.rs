pub mod bump;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod ui;

pub use bump::{
    bump, bump_version, bump_version_with, bump_with, BumpOptions, BumpRequest, PromotionPolicy,
};
pub use domain::{BumpKind, Identifier, Marker, PrereleaseShape, Version};
pub use error::{BumpError, ConfigError, InputError, Result};
pub use input::VersionSource;
