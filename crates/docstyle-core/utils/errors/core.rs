//! Core error type for docstyle operations

use super::{ErrorCategory, ResolutionError};
use alloc::{format, string::String};
use core::fmt;
use thiserror::Error;

/// Main error type for docstyle core operations
///
/// Wraps per-style resolution failures alongside registry and configuration
/// errors to provide a unified error handling interface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Inheritance resolution failure scoped to one style
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Lookup of a style id that is not in the registry
    #[error("Style not found: {0}")]
    StyleNotFound(String),

    /// Insertion of a style whose id is already registered
    #[error("Duplicate style id: {0}")]
    DuplicateStyle(String),

    /// Decoder supplied a style kind outside the closed set
    #[error("Invalid style type: {0}")]
    InvalidStyleType(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal consistency error (should not happen)
    #[error("Internal error: {0} (this is a bug, please report)")]
    Internal(String),
}

impl CoreError {
    /// Create style-not-found error
    pub fn style_not_found<T: fmt::Display>(id: T) -> Self {
        Self::StyleNotFound(format!("{id}"))
    }

    /// Create duplicate style error
    pub fn duplicate_style<T: fmt::Display>(id: T) -> Self {
        Self::DuplicateStyle(format!("{id}"))
    }

    /// Create invalid style type error
    pub fn invalid_style_type<T: fmt::Display>(value: T) -> Self {
        Self::InvalidStyleType(format!("{value}"))
    }

    /// Create configuration error
    pub fn config<T: fmt::Display>(message: T) -> Self {
        Self::Config(format!("{message}"))
    }

    /// Create internal error (indicates a bug)
    pub fn internal<T: fmt::Display>(message: T) -> Self {
        Self::Internal(format!("{message}"))
    }

    /// Get error category for filtering/grouping
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Resolution(err) => err.category(),
            Self::StyleNotFound(_) => ErrorCategory::Referential,
            Self::DuplicateStyle(_) | Self::InvalidStyleType(_) => ErrorCategory::Structural,
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Validation(_) => ErrorCategory::Semantic,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Check if error is recoverable
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }

    /// Get suggestion for resolving the error
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Resolution(ResolutionError::CircularReference { .. }) => {
                Some("Break the cycle by clearing basedOn on one style in the chain")
            }
            Self::Resolution(ResolutionError::MissingParent { .. }) | Self::StyleNotFound(_) => {
                Some("Define the referenced style or clear the reference")
            }
            Self::DuplicateStyle(_) => Some("Use upsert to replace an existing style"),
            Self::InvalidStyleType(_) => Some(
                "Use one of: paragraph, character, table, list, page, section, theme, condition",
            ),
            Self::Config(_) | Self::Validation(_) | Self::Internal(_) => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
