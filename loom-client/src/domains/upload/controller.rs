//! Single-flight profile photo upload controller
//!
//! Status machine: `Idle -> Uploading -> Idle`. The `Idle -> Uploading`
//! transition is a compare-and-set under one lock, so of two file
//! selections racing while an upload is in flight exactly one reaches the
//! provider. Completion always returns the machine to `Idle`, whatever the
//! outcome, so a failed upload never wedges the trigger.
//!
//! The controller is cheap to clone (shared interior state); clones observe
//! the same machine, which is what lets a spawned upload task and the
//! rendering side agree on `is_uploading`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use loom_model::prelude::SessionSnapshot;
use parking_lot::Mutex;

use crate::infrastructure::service_registry::ServiceRegistry;
use crate::infrastructure::services::identity::ImageFile;

/// Where the upload machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// No upload in flight; file selection is accepted
    #[default]
    Idle,
    /// An upload is in flight; further selections are rejected
    Uploading,
}

/// How a call to [`PhotoUploadController::select_file`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Upload reached the provider and succeeded
    Uploaded,
    /// Upload reached the provider and failed; surfaced via notification
    Failed,
    /// No signed-in user; selection silently dropped
    NoUser,
    /// Another upload was already in flight; selection rejected
    Busy,
}

/// Controller for the profile photo uploader.
#[derive(Clone)]
pub struct PhotoUploadController {
    status: Arc<Mutex<UploadStatus>>,
    alive: Arc<AtomicBool>,
    services: ServiceRegistry,
}

impl PhotoUploadController {
    pub fn new(services: ServiceRegistry) -> Self {
        Self {
            status: Arc::new(Mutex::new(UploadStatus::Idle)),
            alive: Arc::new(AtomicBool::new(true)),
            services,
        }
    }

    /// Whether an upload is in flight. The file-selection trigger is
    /// expected to be disabled while this holds.
    pub fn is_uploading(&self) -> bool {
        *self.status.lock() == UploadStatus::Uploading
    }

    /// Mark the owning view as torn down. In-flight uploads still run to
    /// completion (uploads are not cancellable), but their completions stop
    /// emitting notifications and navigation.
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    /// Handle one file selection. No-op without a signed-in user; rejected
    /// while another upload is in flight; otherwise issues the avatar
    /// mutation and resets to idle on completion regardless of outcome.
    pub async fn select_file(
        &self,
        session: &SessionSnapshot,
        file: ImageFile,
    ) -> SelectionOutcome {
        let Some(user) = session.authenticated_user() else {
            log::debug!("file selected with no session user, ignoring");
            return SelectionOutcome::NoUser;
        };

        if !self.try_begin() {
            log::debug!("upload already in flight, rejecting selection");
            return SelectionOutcome::Busy;
        }

        log::info!("uploading profile photo {:?} for user {}", file.name, user.id);
        let result = self.services.identity.set_profile_image(file).await;

        // Guaranteed cleanup: back to idle before anything can observe the
        // terminal state, on both arms.
        *self.status.lock() = UploadStatus::Idle;

        let alive = self.alive.load(Ordering::SeqCst);
        match result {
            Ok(()) => {
                if alive {
                    self.services.notifier.success(
                        "Photo updated",
                        "Your profile photo has been updated.",
                    );
                    self.services.navigator.refresh();
                }
                SelectionOutcome::Uploaded
            }
            Err(err) => {
                log::error!("profile photo upload failed: {err}");
                if alive {
                    self.services.notifier.error(
                        "Upload failed",
                        "There was a problem uploading your photo. Please try again.",
                    );
                }
                SelectionOutcome::Failed
            }
        }
    }

    /// Compare-and-set `Idle -> Uploading`; false when already uploading.
    fn try_begin(&self) -> bool {
        let mut status = self.status.lock();
        if *status == UploadStatus::Uploading {
            return false;
        }
        *status = UploadStatus::Uploading;
        true
    }
}

impl std::fmt::Debug for PhotoUploadController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUploadController")
            .field("status", &*self.status.lock())
            .field("alive", &self.alive.load(Ordering::SeqCst))
            .finish()
    }
}
