//! Client-focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in loom-client or other presentation layers.

pub use super::identity::{SessionSnapshot, SessionState, UserIdentity};
pub use super::links::LinkEntry;
pub use super::metadata::{MetadataPatch, ProfileMetadata};
pub use super::{DESCRIPTION_MAX_LEN, USERNAME_MAX_LEN};
