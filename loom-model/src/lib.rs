//! Core data model definitions shared across Loom crates.
#![allow(missing_docs)]

pub mod identity;
pub mod links;
pub mod metadata;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use identity::{SessionSnapshot, SessionState, UserIdentity};
pub use links::LinkEntry;
pub use metadata::{MetadataPatch, ProfileMetadata};

/// Maximum accepted length of a username, in characters.
pub const USERNAME_MAX_LEN: usize = 30;

/// Maximum accepted length of a profile description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 160;
