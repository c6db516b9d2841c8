//! Domain types - pure version values independent of any I/O

pub mod kind;
pub mod prerelease;
pub mod version;

pub use kind::BumpKind;
pub use prerelease::PrereleaseShape;
pub use version::{Identifier, Marker, Version};
