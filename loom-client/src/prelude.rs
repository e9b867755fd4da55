//! Curated import surface for hosts embedding the orchestration core.

pub use crate::domains::menu::{IdentityMenu, MenuAction, MenuHeader};
pub use crate::domains::profile::{
    FieldError, FieldErrors, LinkField, ProfileDraft,
    ProfileEditorController, ProfileError, ValidDraft,
};
pub use crate::domains::session::{GuardState, SessionGuard};
pub use crate::domains::upload::{
    PhotoUploadController, SelectionOutcome, UploadStatus,
};
pub use crate::infrastructure::constants::routes;
pub use crate::infrastructure::service_registry::ServiceRegistry;
pub use crate::infrastructure::services::identity::{
    IdentityError, IdentityResult, IdentityService, ImageFile,
};
pub use crate::infrastructure::services::navigator::Navigator;
pub use crate::infrastructure::services::notifier::{Notifier, ToastLevel};
pub use loom_model::prelude::*;
