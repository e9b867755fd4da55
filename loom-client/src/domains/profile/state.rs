//! Profile draft state
//!
//! The draft is the locally owned staging copy of the profile fields. It is
//! created once per authenticated session, edited freely, and discarded when
//! the user navigates away; nothing here talks to the provider.

use loom_model::prelude::{LinkEntry, UserIdentity};

/// Editable staging copy of the profile fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    /// Username, editable
    pub username: String,
    /// Primary email, mirrored from the session and never submitted back
    pub email: String,
    /// Profile description ("bio"), editable
    pub description: String,
    /// Ordered link collection, edited copy-on-write
    pub links: Vec<LinkEntry>,
}

impl ProfileDraft {
    /// Build the initial draft from the signed-in user's attributes.
    pub fn from_identity(user: &UserIdentity) -> Self {
        Self {
            username: user.username.clone(),
            email: user.primary_email.clone().unwrap_or_default(),
            description: user
                .metadata
                .description
                .clone()
                .unwrap_or_default(),
            links: user.metadata.links().to_vec(),
        }
    }
}
