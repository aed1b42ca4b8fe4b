//! Core types shared by every pdeps module.
//!
//! Currently this is the error taxonomy: [`PdepsError`] for library code and
//! [`ErrorContext`] / [`user_friendly_error`] for presenting failures on the
//! command line.
//!
//! ```rust
//! use pdeps_cli::core::{PdepsError, user_friendly_error};
//!
//! let error: anyhow::Error = PdepsError::GraphNotFound {
//!     path: "resolved-graph.toml".to_string(),
//! }
//! .into();
//! let context = user_friendly_error(error);
//! assert!(context.suggestion.is_some());
//! ```

pub mod error;

pub use error::{ErrorContext, PdepsError, user_friendly_error};
