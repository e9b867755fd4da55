//! Application-scoped bundle of collaborator handles
//!
//! Created once at application startup and passed explicitly to every
//! controller that needs it. There is deliberately no process-wide instance:
//! each registry has a defined creation point and drops with its owner,
//! which keeps tests hermetic and teardown unambiguous.

use std::sync::Arc;

use crate::infrastructure::services::identity::IdentityService;
use crate::infrastructure::services::navigator::Navigator;
use crate::infrastructure::services::notifier::Notifier;

/// Handles to the external collaborators the orchestration core consumes.
#[derive(Clone)]
pub struct ServiceRegistry {
    /// Remote identity provider mutation surface
    pub identity: Arc<dyn IdentityService>,
    /// Toast/notification sink
    pub notifier: Arc<dyn Notifier>,
    /// Host router
    pub navigator: Arc<dyn Navigator>,
}

impl ServiceRegistry {
    /// Bundle collaborator handles into a registry.
    pub fn new(
        identity: Arc<dyn IdentityService>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            identity,
            notifier,
            navigator,
        }
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("identity", &"IdentityService(..)")
            .field("notifier", &"Notifier(..)")
            .field("navigator", &"Navigator(..)")
            .finish()
    }
}
