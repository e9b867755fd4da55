//! Identity session snapshot types
//!
//! The identity provider owns the authoritative session; this crate only
//! models read-only snapshots of it. A snapshot is either still loading,
//! loaded with no signed-in user, or loaded with a full [`UserIdentity`].
//! Consumers never mutate a snapshot; profile changes go back through the
//! provider's mutation surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metadata::ProfileMetadata;

/// Load/sign-in state of the remote identity session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Whether the provider has finished loading the session.
    pub loaded: bool,
    /// Whether a user is signed in. Meaningless until `loaded` is true.
    pub signed_in: bool,
}

/// Profile attributes of the signed-in user, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique user identifier
    pub id: Uuid,
    /// Unique username (provider-enforced uniqueness)
    pub username: String,
    /// Display name shown in UI
    pub display_name: Option<String>,
    /// Primary email address, if one is verified
    pub primary_email: Option<String>,
    /// URL of the user's profile image, if one is set
    pub image_url: Option<String>,
    /// Timestamp of the last profile update known to the provider
    pub updated_at: Option<DateTime<Utc>>,
    /// Schemaless profile metadata bag (typed known fields + pass-through)
    pub metadata: ProfileMetadata,
}

impl UserIdentity {
    /// Whether the user has a profile image set.
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// A point-in-time view of the identity session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Load/sign-in state
    pub state: SessionState,
    /// The signed-in user, present only when loaded and signed in
    pub user: Option<UserIdentity>,
}

impl SessionSnapshot {
    /// Session is still being resolved by the provider.
    pub fn loading() -> Self {
        Self {
            state: SessionState {
                loaded: false,
                signed_in: false,
            },
            user: None,
        }
    }

    /// Session resolved with no signed-in user.
    pub fn signed_out() -> Self {
        Self {
            state: SessionState {
                loaded: true,
                signed_in: false,
            },
            user: None,
        }
    }

    /// Session resolved with a signed-in user.
    pub fn signed_in(user: UserIdentity) -> Self {
        Self {
            state: SessionState {
                loaded: true,
                signed_in: true,
            },
            user: Some(user),
        }
    }

    /// Whether the snapshot carries a usable signed-in user.
    pub fn authenticated_user(&self) -> Option<&UserIdentity> {
        if self.state.loaded && self.state.signed_in {
            self.user.as_ref()
        } else {
            None
        }
    }
}
