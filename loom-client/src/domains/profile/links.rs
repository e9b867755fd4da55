//! Copy-on-write operations over the draft's link collection
//!
//! Every operation returns a fresh list and leaves the input untouched, so
//! a validation pass holding a snapshot of the previous list never observes
//! a concurrent edit. Index arguments are bounds-checked; removal on an
//! empty list is a no-op.

use loom_model::prelude::LinkEntry;

/// Which half of a link entry an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Label,
    Url,
}

/// Append one empty entry at the end.
pub fn push_empty(links: &[LinkEntry]) -> Vec<LinkEntry> {
    let mut next = links.to_vec();
    next.push(LinkEntry::empty());
    next
}

/// Replace a single field of the entry at `index`, leaving every other
/// entry and field unchanged. Returns `None` when `index` is out of bounds.
pub fn with_field(
    links: &[LinkEntry],
    index: usize,
    field: LinkField,
    value: &str,
) -> Option<Vec<LinkEntry>> {
    if index >= links.len() {
        return None;
    }

    let mut next = links.to_vec();
    let entry = &mut next[index];
    match field {
        LinkField::Label => entry.label = value.to_string(),
        LinkField::Url => entry.url = value.to_string(),
    }
    Some(next)
}

/// Remove the entry at `index`, shifting subsequent entries down. Out of
/// bounds (including any index on an empty list) returns an unchanged copy.
pub fn without(links: &[LinkEntry], index: usize) -> Vec<LinkEntry> {
    let mut next = links.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}
