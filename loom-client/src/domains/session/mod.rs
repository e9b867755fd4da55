//! Session domain
//!
//! Derives navigation decisions from identity session load transitions.

pub mod guard;

pub use guard::{GuardState, SessionGuard};
