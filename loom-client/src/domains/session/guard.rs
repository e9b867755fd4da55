//! One-shot sign-in redirect derived from session load transitions
//!
//! The guard re-evaluates on every session change but navigates at most
//! once for its lifetime. It must stay silent while the session is still
//! loading: an unloaded session looks signed-out, and redirecting on it
//! would bounce every authenticated user through the sign-in page.

use std::sync::Arc;

use loom_model::prelude::SessionSnapshot;

use crate::infrastructure::constants::routes;
use crate::infrastructure::services::navigator::Navigator;

/// Navigation decision state for a guarded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// Session not yet loaded; no decision possible
    #[default]
    Unknown,
    /// Loaded with a signed-in user; page may render
    Authenticated,
    /// Loaded without a user; redirect issued (or already issued)
    Unauthenticated,
}

/// Guards a page that requires a signed-in session.
pub struct SessionGuard {
    state: GuardState,
    redirected: bool,
    navigator: Arc<dyn Navigator>,
}

impl SessionGuard {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            state: GuardState::Unknown,
            redirected: false,
            navigator,
        }
    }

    /// Re-derive the decision from the latest snapshot. Safe to call on
    /// every re-render; the sign-in redirect fires exactly once.
    pub fn evaluate(&mut self, session: &SessionSnapshot) -> GuardState {
        if !session.state.loaded {
            self.state = GuardState::Unknown;
            return self.state;
        }

        if session.state.signed_in {
            self.state = GuardState::Authenticated;
            return self.state;
        }

        self.state = GuardState::Unauthenticated;
        if !self.redirected {
            self.redirected = true;
            log::info!("session loaded without user, redirecting to sign-in");
            self.navigator.push(routes::SIGN_IN);
        }
        self.state
    }

    pub fn state(&self) -> GuardState {
        self.state
    }
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("state", &self.state)
            .field("redirected", &self.redirected)
            .finish()
    }
}
