//! Profile self-service domain
//!
//! Owns the editable profile draft for the lifetime of an edit session:
//! one-time hydration from the identity session, field and per-link
//! validation, copy-on-write link list edits, and merge-safe submission
//! back through the provider boundary.

pub mod editor;
pub mod errors;
pub mod links;
pub mod state;

pub use editor::{ProfileEditorController, ValidDraft};
pub use errors::{FieldError, FieldErrors, ProfileError};
pub use links::LinkField;
pub use state::ProfileDraft;
