//! Infrastructure module containing the collaborator boundary
//!
//! Everything the orchestration core consumes from the outside world lives
//! here: the identity provider surface, the notification sink, navigation,
//! route constants, and the application-scoped service registry.

pub mod constants;
pub mod service_registry;
pub mod services;

// Re-export commonly used items
pub use service_registry::ServiceRegistry;
pub use services::identity::{
    IdentityError, IdentityResult, IdentityService, ImageFile,
};
pub use services::navigator::Navigator;
pub use services::notifier::Notifier;
