//! Session-keyed capability set for the account menu
//!
//! The menu widget itself belongs to the host shell; this module decides
//! which actions it offers for the current session and drives sign-out.
//! Sign-out is best-effort: a provider failure is logged and swallowed so
//! menu dismissal never blocks on it.

use std::sync::Arc;

use loom_model::prelude::SessionSnapshot;

use crate::infrastructure::constants::routes;
use crate::infrastructure::services::identity::IdentityService;

/// One entry in the account menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SignIn,
    SignUp,
    Profile,
    Projects,
    NewProject,
    SignOut,
}

impl MenuAction {
    /// Display label for the menu row.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::Profile => "Profile",
            Self::Projects => "Projects",
            Self::NewProject => "New Project",
            Self::SignOut => "Sign out",
        }
    }

    /// Navigation target, for actions that are plain links.
    pub fn route(&self) -> Option<&'static str> {
        match self {
            Self::SignIn => Some(routes::SIGN_IN),
            Self::SignUp => Some(routes::SIGN_UP),
            Self::Profile => Some(routes::PROFILE),
            Self::Projects => Some(routes::PROJECTS),
            Self::NewProject => Some(routes::NEW_PROJECT),
            Self::SignOut => None,
        }
    }
}

/// Name and email shown at the top of the authenticated menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuHeader {
    pub name: String,
    pub email: String,
}

/// Drives the account menu's contents and its sign-out action.
pub struct IdentityMenu {
    identity: Arc<dyn IdentityService>,
}

impl IdentityMenu {
    pub fn new(identity: Arc<dyn IdentityService>) -> Self {
        Self { identity }
    }

    /// Actions offered for the given session. An unloaded session gets the
    /// signed-out set; it re-renders once the session resolves.
    pub fn actions_for(session: &SessionSnapshot) -> Vec<MenuAction> {
        if session.authenticated_user().is_some() {
            vec![
                MenuAction::Profile,
                MenuAction::Projects,
                MenuAction::NewProject,
                MenuAction::SignOut,
            ]
        } else {
            vec![MenuAction::SignIn, MenuAction::SignUp]
        }
    }

    /// Header summary for the authenticated menu, with fallbacks when the
    /// provider has no display name or email on file.
    pub fn header_for(session: &SessionSnapshot) -> Option<MenuHeader> {
        let user = session.authenticated_user()?;
        Some(MenuHeader {
            name: user
                .display_name
                .clone()
                .unwrap_or_else(|| "User".to_string()),
            email: user
                .primary_email
                .clone()
                .unwrap_or_else(|| "No email".to_string()),
        })
    }

    /// End the session. Best-effort: failures are logged and swallowed, and
    /// the menu is free to dismiss and re-render regardless.
    pub async fn sign_out(&self) {
        if let Err(err) = self.identity.sign_out().await {
            log::error!("error signing out: {err}");
        }
    }
}

impl std::fmt::Debug for IdentityMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityMenu")
            .field("identity", &"IdentityService(..)")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::services::identity::mock::MockIdentityService;
    use loom_model::prelude::{ProfileMetadata, UserIdentity};
    use uuid::Uuid;

    fn user() -> UserIdentity {
        UserIdentity {
            id: Uuid::now_v7(),
            username: "alice".to_string(),
            display_name: Some("Alice".to_string()),
            primary_email: Some("alice@example.com".to_string()),
            image_url: None,
            updated_at: None,
            metadata: ProfileMetadata::default(),
        }
    }

    #[test]
    fn signed_out_sessions_get_sign_in_and_up() {
        for session in
            [SessionSnapshot::loading(), SessionSnapshot::signed_out()]
        {
            assert_eq!(
                IdentityMenu::actions_for(&session),
                vec![MenuAction::SignIn, MenuAction::SignUp]
            );
        }
    }

    #[test]
    fn signed_in_sessions_get_the_full_set() {
        let actions =
            IdentityMenu::actions_for(&SessionSnapshot::signed_in(user()));
        assert_eq!(
            actions,
            vec![
                MenuAction::Profile,
                MenuAction::Projects,
                MenuAction::NewProject,
                MenuAction::SignOut,
            ]
        );
    }

    #[test]
    fn header_falls_back_when_attributes_missing() {
        let mut bare = user();
        bare.display_name = None;
        bare.primary_email = None;

        let header =
            IdentityMenu::header_for(&SessionSnapshot::signed_in(bare))
                .unwrap();
        assert_eq!(header.name, "User");
        assert_eq!(header.email, "No email");

        assert!(
            IdentityMenu::header_for(&SessionSnapshot::signed_out())
                .is_none()
        );
    }

    #[test]
    fn routes_cover_every_link_action() {
        assert_eq!(MenuAction::Profile.route(), Some(routes::PROFILE));
        assert_eq!(MenuAction::NewProject.route(), Some(routes::NEW_PROJECT));
        assert_eq!(MenuAction::SignOut.route(), None);
    }

    #[tokio::test]
    async fn sign_out_failure_is_swallowed() {
        let identity = Arc::new(MockIdentityService::new());
        identity.fail_sign_out();
        let menu = IdentityMenu::new(
            Arc::clone(&identity) as Arc<dyn IdentityService>
        );

        // Must not panic or surface the error.
        menu.sign_out().await;
        assert_eq!(*identity.sign_out_calls.lock(), 1);
    }
}
