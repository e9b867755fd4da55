//! Shared constants for the Loom client

pub mod routes;
