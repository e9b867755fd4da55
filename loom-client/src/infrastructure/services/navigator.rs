//! Navigation trait and test double
//!
//! Contract with the host's router. `push` changes the current route,
//! `refresh` re-fetches data for the current one. Neither reports failure;
//! routing problems are the shell's to handle.

/// Navigation surface consumed by the orchestration core.
pub trait Navigator: Send + Sync {
    /// Navigate to the given path.
    fn push(&self, path: &str);

    /// Re-fetch data for the current route.
    fn refresh(&self);
}
