//! Typed view over the provider's schemaless profile metadata bag
//!
//! The remote metadata object is shared with other features; this crate
//! types the fields it owns (`description`, `links`) and carries everything
//! else opaquely in `extra`. Writes go through [`ProfileMetadata::merged`]
//! so unrelated keys are never dropped: merge, never replace-wholesale.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::links::LinkEntry;

/// Profile metadata with known fields typed and unknown keys passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Free-form profile description ("bio")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered collection of labeled links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkEntry>>,
    /// Keys owned by other features, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A partial metadata write. `None` fields are left untouched by the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataPatch {
    /// Replacement description, if the edit touched it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement link collection, if the edit touched it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkEntry>>,
}

impl ProfileMetadata {
    /// Apply a patch, returning the merged bag. Patched fields win over the
    /// current values; `extra` keys are carried over untouched.
    pub fn merged(&self, patch: &MetadataPatch) -> ProfileMetadata {
        ProfileMetadata {
            description: patch
                .description
                .clone()
                .or_else(|| self.description.clone()),
            links: patch.links.clone().or_else(|| self.links.clone()),
            extra: self.extra.clone(),
        }
    }

    /// Links as a slice, absent and empty collections collapsed.
    pub fn links(&self) -> &[LinkEntry] {
        self.links.as_deref().unwrap_or_default()
    }
}
