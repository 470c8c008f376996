//! Shared vocabulary for the blog composer
//!
//! This crate holds the domain types exchanged between the CLI and the
//! generation services, the provider-request error taxonomy, and the
//! tracing setup used by every binary in the workspace.

pub mod errors;
pub mod logging;
pub mod types;

// Re-export main types
pub use errors::{GenerationError, GenerationResult};
pub use types::*;
