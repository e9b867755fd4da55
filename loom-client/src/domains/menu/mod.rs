//! Identity menu domain
//!
//! Session-dependent action set for the account dropdown, plus best-effort
//! sign-out.

pub mod actions;

pub use actions::{IdentityMenu, MenuAction, MenuHeader};
