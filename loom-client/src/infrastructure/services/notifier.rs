//! Notification sink trait and test double
//!
//! Fire-and-forget contract with whatever renders toasts in the host shell.
//! Nothing in this crate waits on a notification or reacts to one.

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// Notification sink consumed by the orchestration core.
pub trait Notifier: Send + Sync {
    /// Emit a success notification.
    fn success(&self, title: &str, message: &str);

    /// Emit an error notification.
    fn error(&self, title: &str, message: &str);
}
