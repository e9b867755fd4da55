//! Identity provider service trait and test double
//!
//! Abstraction over the remote identity SDK. The provider owns the session
//! and all durable profile state; this crate only issues the four mutations
//! below and reads back [`loom_model::SessionSnapshot`]s supplied by the
//! host.

use async_trait::async_trait;
use loom_model::prelude::MetadataPatch;
use thiserror::Error;

/// Errors surfaced by the identity provider boundary.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// Request never reached the provider or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// The provider rejected the mutation
    #[error("Provider rejected request: {0}")]
    Provider(String),

    /// Mutation attempted without a signed-in user
    #[error("Not authenticated")]
    NotAuthenticated,
}

/// Result alias for identity provider operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// An image file selected for upload.
///
/// Transient: it exists to carry one file selection into
/// [`IdentityService::set_profile_image`] and is discarded afterwards.
#[derive(Clone)]
pub struct ImageFile {
    /// Original file name, e.g. "avatar.png"
    pub name: String,
    /// MIME type reported by the file picker
    pub content_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Identity provider mutation surface.
///
/// Queries are not part of this trait: the host observes the session through
/// snapshots it already holds. All mutations are fallible and none are
/// retried by this crate.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Update the signed-in user's username.
    async fn update_username(&self, value: String) -> IdentityResult<()>;

    /// Merge a partial metadata write into the user's metadata bag.
    /// The provider must preserve keys absent from the patch.
    async fn merge_metadata(&self, patch: MetadataPatch) -> IdentityResult<()>;

    /// Replace the user's profile image.
    async fn set_profile_image(&self, file: ImageFile) -> IdentityResult<()>;

    /// End the current session.
    async fn sign_out(&self) -> IdentityResult<()>;
}
