//! Client-side identity self-service orchestration for Loom.
//!
//! This crate owns no transport and no rendering: it orchestrates locally
//! editable form state against an asynchronously loading identity session,
//! reached through the trait boundary in [`infrastructure::services`]. The
//! host application wires real collaborators into a
//! [`infrastructure::service_registry::ServiceRegistry`] and drives the
//! domain controllers from its UI loop.

pub mod domains;
pub mod infrastructure;
pub mod prelude;

pub use infrastructure::service_registry::ServiceRegistry;
