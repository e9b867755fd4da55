//! Profile editor controller
//!
//! Hydrates the draft from the identity session exactly once, applies field
//! and link edits, validates against the profile constraints, and submits
//! the result back through the provider boundary. Submission merges the
//! metadata patch first and updates the username second; a failure in
//! either leaves the draft untouched so the user can retry.

use loom_model::prelude::{
    DESCRIPTION_MAX_LEN, LinkEntry, MetadataPatch, SessionSnapshot,
    USERNAME_MAX_LEN,
};

use crate::domains::profile::errors::{FieldError, FieldErrors, ProfileError};
use crate::domains::profile::links::{self, LinkField};
use crate::domains::profile::state::ProfileDraft;
use crate::infrastructure::service_registry::ServiceRegistry;

/// A draft that has passed [`ProfileEditorController::validate`].
///
/// Only obtainable through validation; holding one is proof the borrowed
/// draft satisfied every constraint at the time of the check.
#[derive(Debug, Clone, Copy)]
pub struct ValidDraft<'a> {
    draft: &'a ProfileDraft,
}

impl<'a> ValidDraft<'a> {
    pub fn username(&self) -> &'a str {
        &self.draft.username
    }

    pub fn description(&self) -> &'a str {
        &self.draft.description
    }

    pub fn links(&self) -> &'a [LinkEntry] {
        &self.draft.links
    }

    /// The metadata write this draft produces on submission.
    pub fn metadata_patch(&self) -> MetadataPatch {
        MetadataPatch {
            description: Some(self.draft.description.clone()),
            links: Some(self.draft.links.clone()),
        }
    }
}

/// Controller for one profile edit session.
pub struct ProfileEditorController {
    draft: ProfileDraft,
    initialized: bool,
    submitting: bool,
    dirty: bool,
    services: ServiceRegistry,
}

impl ProfileEditorController {
    pub fn new(services: ServiceRegistry) -> Self {
        Self {
            draft: ProfileDraft::default(),
            initialized: false,
            submitting: false,
            dirty: false,
            services,
        }
    }

    /// Initialize the draft from the session. Runs only once per controller
    /// lifetime and only once the session is loaded with a signed-in user;
    /// later session refreshes never overwrite in-progress edits. Returns
    /// whether hydration happened on this call.
    pub fn hydrate(&mut self, session: &SessionSnapshot) -> bool {
        if self.initialized {
            return false;
        }
        let Some(user) = session.authenticated_user() else {
            return false;
        };

        self.draft = ProfileDraft::from_identity(user);
        self.initialized = true;
        log::debug!("profile draft hydrated for user {}", user.id);
        true
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the draft has edits not yet submitted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether a submission is currently in flight; the submit trigger is
    /// expected to be disabled while this holds.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_username(&mut self, value: String) {
        self.draft.username = value;
        self.dirty = true;
    }

    pub fn set_description(&mut self, value: String) {
        self.draft.description = value;
        self.dirty = true;
    }

    // The email field intentionally has no setter: it mirrors the session's
    // primary email and is never submitted back.

    /// Append an empty link row.
    pub fn add_link(&mut self) {
        self.draft.links = links::push_empty(&self.draft.links);
        self.dirty = true;
    }

    /// Edit one field of one link row. Returns false on an out-of-bounds
    /// index, leaving the list unchanged.
    pub fn update_link(
        &mut self,
        index: usize,
        field: LinkField,
        value: &str,
    ) -> bool {
        match links::with_field(&self.draft.links, index, field, value) {
            Some(next) => {
                self.draft.links = next;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Remove a link row; out-of-bounds indices are ignored.
    pub fn remove_link(&mut self, index: usize) {
        self.draft.links = links::without(&self.draft.links, index);
        self.dirty = true;
    }

    /// Check every field constraint, attributing link failures to their
    /// entry index.
    pub fn validate(&self) -> Result<ValidDraft<'_>, FieldErrors> {
        let mut errors = FieldErrors::default();

        let username_len = self.draft.username.chars().count();
        if username_len > USERNAME_MAX_LEN {
            errors.push(FieldError::UsernameTooLong {
                len: username_len,
                max: USERNAME_MAX_LEN,
            });
        }

        let description_len = self.draft.description.chars().count();
        if description_len > DESCRIPTION_MAX_LEN {
            errors.push(FieldError::DescriptionTooLong {
                len: description_len,
                max: DESCRIPTION_MAX_LEN,
            });
        }

        for (index, link) in self.draft.links.iter().enumerate() {
            if link.label.is_empty() {
                errors.push(FieldError::LinkLabelEmpty { index });
            }
            if link.parsed_url().is_err() {
                errors.push(FieldError::LinkUrlInvalid { index });
            }
        }

        if errors.is_empty() {
            Ok(ValidDraft { draft: &self.draft })
        } else {
            Err(errors)
        }
    }

    /// Submit the draft: merge `{description, links}` into the metadata bag
    /// (unrelated keys preserved by the provider contract), then update the
    /// username, then notify and request a data refresh. Blocked while
    /// validation fails or a submission is already in flight.
    pub async fn submit(&mut self) -> Result<(), ProfileError> {
        if self.submitting {
            return Err(ProfileError::SubmitInFlight);
        }
        if !self.initialized {
            return Err(ProfileError::NotHydrated);
        }

        let (patch, username) = {
            let valid = self.validate().map_err(ProfileError::Invalid)?;
            (valid.metadata_patch(), valid.username().to_string())
        };

        self.submitting = true;
        let result = async {
            self.services.identity.merge_metadata(patch).await?;
            self.services.identity.update_username(username).await?;
            Ok::<(), crate::infrastructure::IdentityError>(())
        }
        .await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.dirty = false;
                self.services.notifier.success(
                    "Profile updated",
                    "Your profile has been successfully updated.",
                );
                self.services.navigator.refresh();
                Ok(())
            }
            Err(err) => {
                log::error!("failed to update profile: {err}");
                self.services.notifier.error(
                    "Update failed",
                    "There was a problem updating your profile. Please try again.",
                );
                Err(err.into())
            }
        }
    }
}

impl std::fmt::Debug for ProfileEditorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileEditorController")
            .field("draft", &self.draft)
            .field("initialized", &self.initialized)
            .field("submitting", &self.submitting)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::service_registry::testing::TestRegistry;
    use crate::infrastructure::services::identity::mock::MockIdentityService;
    use crate::infrastructure::services::notifier::ToastLevel;
    use loom_model::prelude::{ProfileMetadata, UserIdentity};
    use serde_json::json;
    use uuid::Uuid;

    fn user_with(metadata: ProfileMetadata) -> UserIdentity {
        UserIdentity {
            id: Uuid::now_v7(),
            username: "alice".to_string(),
            display_name: Some("Alice".to_string()),
            primary_email: Some("alice@example.com".to_string()),
            image_url: None,
            updated_at: None,
            metadata,
        }
    }

    fn session() -> SessionSnapshot {
        SessionSnapshot::signed_in(user_with(ProfileMetadata::default()))
    }

    #[test]
    fn hydrate_runs_once_and_preserves_edits() {
        let harness = TestRegistry::new();
        let mut editor = ProfileEditorController::new(harness.registry);

        assert!(editor.hydrate(&session()));
        editor.set_description("work in progress".to_string());

        // A later refresh delivers changed upstream data; it must not
        // clobber the edit.
        let refreshed = SessionSnapshot::signed_in(user_with(
            ProfileMetadata {
                description: Some("server-side bio".to_string()),
                ..Default::default()
            },
        ));
        assert!(!editor.hydrate(&refreshed));
        assert_eq!(editor.draft().description, "work in progress");
    }

    #[test]
    fn hydrate_waits_for_loaded_signed_in_session() {
        let harness = TestRegistry::new();
        let mut editor = ProfileEditorController::new(harness.registry);

        assert!(!editor.hydrate(&SessionSnapshot::loading()));
        assert!(!editor.hydrate(&SessionSnapshot::signed_out()));
        assert!(!editor.is_initialized());
        assert!(editor.hydrate(&session()));
    }

    #[test]
    fn valid_draft_passes_validation() {
        let harness = TestRegistry::new();
        let mut editor = ProfileEditorController::new(harness.registry);
        editor.hydrate(&session());
        editor.set_username("a".repeat(30));
        editor.set_description("b".repeat(160));
        editor.add_link();
        editor.update_link(0, LinkField::Label, "GitHub");
        editor.update_link(0, LinkField::Url, "https://github.com/alice");

        assert!(editor.validate().is_ok());
    }

    #[test]
    fn over_limit_fields_fail_validation() {
        let harness = TestRegistry::new();
        let mut editor = ProfileEditorController::new(harness.registry);
        editor.hydrate(&session());
        editor.set_username("a".repeat(31));
        editor.set_description("b".repeat(161));

        let errors = editor.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn bad_url_is_attributed_to_its_entry() {
        let harness = TestRegistry::new();
        let mut editor = ProfileEditorController::new(harness.registry);
        editor.hydrate(&session());
        editor.add_link();
        editor.update_link(0, LinkField::Label, "GitHub");
        editor.update_link(0, LinkField::Url, "https://github.com/alice");
        editor.add_link();
        editor.update_link(1, LinkField::Label, "Broken");
        editor.update_link(1, LinkField::Url, "not-a-url");

        let errors = editor.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_link(0).count(), 0);
        assert_eq!(
            errors.for_link(1).collect::<Vec<_>>(),
            vec![&FieldError::LinkUrlInvalid { index: 1 }]
        );
    }

    #[tokio::test]
    async fn submit_merges_metadata_and_updates_username() {
        let mut remote = ProfileMetadata::default();
        remote
            .extra
            .insert("theme".to_string(), json!("dark"));
        let harness = TestRegistry::with_identity(
            MockIdentityService::with_metadata(remote),
        );
        let mut editor =
            ProfileEditorController::new(harness.registry.clone());
        editor.hydrate(&session());
        editor.set_username("alice".to_string());
        editor.set_description("hi".to_string());
        editor.add_link();
        editor.update_link(0, LinkField::Label, "GitHub");
        editor.update_link(0, LinkField::Url, "https://github.com/alice");

        editor.submit().await.unwrap();

        let metadata = harness.identity.metadata.lock().clone();
        assert_eq!(metadata.description.as_deref(), Some("hi"));
        assert_eq!(metadata.links().len(), 1);
        assert_eq!(metadata.links()[0].url, "https://github.com/alice");
        // Unrelated keys owned by other features survive.
        assert_eq!(metadata.extra.get("theme"), Some(&json!("dark")));

        assert_eq!(
            harness.identity.username_updates.lock().as_slice(),
            ["alice"]
        );
        assert_eq!(harness.notifier.count_of(ToastLevel::Success), 1);
        assert_eq!(*harness.navigator.refreshes.lock(), 1);
        assert!(!editor.is_dirty());
    }

    #[tokio::test]
    async fn invalid_draft_blocks_submission() {
        let harness = TestRegistry::new();
        let mut editor =
            ProfileEditorController::new(harness.registry.clone());
        editor.hydrate(&session());
        editor.add_link();
        editor.update_link(0, LinkField::Label, "Broken");
        editor.update_link(0, LinkField::Url, "not-a-url");

        let err = editor.submit().await.unwrap_err();
        assert!(matches!(err, ProfileError::Invalid(_)));
        // Nothing reached the provider.
        assert!(harness.identity.metadata_merges.lock().is_empty());
        assert!(harness.identity.username_updates.lock().is_empty());
    }

    #[tokio::test]
    async fn failed_submission_keeps_draft_and_notifies() {
        let identity = MockIdentityService::new();
        identity.fail_metadata_merge();
        let harness = TestRegistry::with_identity(identity);
        let mut editor =
            ProfileEditorController::new(harness.registry.clone());
        editor.hydrate(&session());
        editor.set_description("keep me".to_string());

        let err = editor.submit().await.unwrap_err();
        assert!(matches!(err, ProfileError::Identity(_)));
        assert_eq!(editor.draft().description, "keep me");
        assert!(editor.is_dirty());
        assert_eq!(harness.notifier.count_of(ToastLevel::Error), 1);
        assert_eq!(*harness.navigator.refreshes.lock(), 0);
        // Ready for a manual retry.
        assert!(!editor.is_submitting());
    }

    #[tokio::test]
    async fn submit_before_hydration_is_rejected() {
        let harness = TestRegistry::new();
        let mut editor = ProfileEditorController::new(harness.registry);
        let err = editor.submit().await.unwrap_err();
        assert!(matches!(err, ProfileError::NotHydrated));
    }
}
