//! Application route constants for the Loom client
//!
//! Destinations handed to the navigation collaborator. The host shell owns
//! the actual routing table; these paths are the contract with it.

/// Sign-in page, the one-shot redirect target for unauthenticated sessions
pub const SIGN_IN: &str = "/sign-in";

/// Sign-up page
pub const SIGN_UP: &str = "/sign-up";

/// Profile self-service page
pub const PROFILE: &str = "/profile";

/// Project listing page
pub const PROJECTS: &str = "/projects";

/// Project creation page
pub const NEW_PROJECT: &str = "/new-project";
