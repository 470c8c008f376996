//! Blog composer library
//!
//! Builds a single templated prompt from structured blog parameters, sends
//! one request to the selected LLM provider, and exports the generated
//! markdown as `.md` and HTML documents.

pub mod composer_impl;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use composer_impl::Composer;
pub use error::{ComposerError, ComposerResult};
pub use services::*;
pub use traits::*;
pub use types::*;
