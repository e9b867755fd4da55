//! Photo upload domain
//!
//! Single-flight image upload state machine over the provider boundary.

pub mod controller;

pub use controller::{PhotoUploadController, SelectionOutcome, UploadStatus};
