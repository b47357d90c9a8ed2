//! Error types for style registry operations and inheritance resolution
//!
//! Provides the crate-wide `CoreError` enum and the per-style
//! `ResolutionError` produced by the inheritance resolver.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Failures scoped to a single style are data, not panics
//! - Every error maps onto an [`ErrorCategory`] for filtering and reporting
//!
//! # Examples
//!
//! ```rust
//! use docstyle_core::utils::errors::{CoreError, ErrorCategory, ResolutionError};
//!
//! let err = CoreError::style_not_found("Heading1");
//! assert_eq!(err.category(), ErrorCategory::Referential);
//!
//! let cycle = ResolutionError::circular("A", vec!["A".into(), "B".into()]);
//! assert_eq!(CoreError::from(cycle).category(), ErrorCategory::Circular);
//! ```

mod category;
mod core;
mod resolution;

pub use category::ErrorCategory;
pub use self::core::{CoreError, Result};
pub use resolution::ResolutionError;
