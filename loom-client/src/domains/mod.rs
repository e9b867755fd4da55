//! Domain modules of the orchestration core
//!
//! Each domain owns one slice of client state and the transitions over it:
//! session guarding, profile draft editing, photo upload, and the identity
//! menu.

pub mod menu;
pub mod profile;
pub mod session;
pub mod upload;
