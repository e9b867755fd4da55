//! Profile validation and submission error types

use thiserror::Error;

use crate::infrastructure::services::identity::IdentityError;

/// A single field-scoped validation failure.
///
/// Link failures carry the index of the offending entry so the rendering
/// collaborator can attach the message to the right row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Username must not be longer than {max} characters.")]
    UsernameTooLong { len: usize, max: usize },

    #[error("Description must not be longer than {max} characters.")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("Label is required")]
    LinkLabelEmpty { index: usize },

    #[error("Invalid URL")]
    LinkUrlInvalid { index: usize },
}

impl FieldError {
    /// Index of the link entry this error is attributed to, if any.
    pub fn link_index(&self) -> Option<usize> {
        match self {
            Self::LinkLabelEmpty { index } | Self::LinkUrlInvalid { index } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

/// Collection of field-scoped failures from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Errors attributed to the link entry at `index`.
    pub fn for_link(
        &self,
        index: usize,
    ) -> impl Iterator<Item = &FieldError> {
        self.errors
            .iter()
            .filter(move |e| e.link_index() == Some(index))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Errors from the profile editor's operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The draft fails one or more field constraints; surfaced inline,
    /// never escalated.
    #[error("Profile draft failed validation: {0}")]
    Invalid(FieldErrors),

    /// A previous submission has not completed yet.
    #[error("A submission is already in flight")]
    SubmitInFlight,

    /// Submit called before the draft was hydrated from a session.
    #[error("Profile draft has not been hydrated")]
    NotHydrated,

    /// Provider rejected or failed the submission; already logged and
    /// surfaced via the notification sink when returned from `submit`.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
