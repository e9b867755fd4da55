//! Service traits for external collaborators
//!
//! Each trait is the call contract with a component this crate does not
//! implement: the remote identity provider, the toast/notification renderer,
//! and the router. Mock implementations for tests are colocated with each
//! trait.

pub mod identity;
pub mod navigator;
pub mod notifier;
