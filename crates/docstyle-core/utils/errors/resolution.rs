//! Per-style inheritance resolution failures

use super::ErrorCategory;
use alloc::{string::String, vec::Vec};
use core::fmt;
use thiserror::Error;

/// Failure to resolve one style's inheritance chain
///
/// Scoped to the style named by `style_id`. The style keeps its own
/// explicitly set properties; only inheritance is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionError {
    /// The style sits on a `basedOn` cycle
    #[error("Circular reference detected for style '{style_id}' ({})", CyclePath(cycle))]
    CircularReference {
        /// Style whose resolution failed
        style_id: String,
        /// Cycle members in traversal order, starting at the re-entered id
        cycle: Vec<String>,
    },

    /// The style's `basedOn` names an id that does not exist
    #[error("Style '{style_id}' is based on missing style '{parent_id}'")]
    MissingParent {
        /// Style whose resolution failed
        style_id: String,
        /// The dangling parent id
        parent_id: String,
    },
}

impl ResolutionError {
    /// Create circular reference error
    pub fn circular(style_id: impl Into<String>, cycle: Vec<String>) -> Self {
        Self::CircularReference {
            style_id: style_id.into(),
            cycle,
        }
    }

    /// Create missing parent error
    pub fn missing_parent(style_id: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self::MissingParent {
            style_id: style_id.into(),
            parent_id: parent_id.into(),
        }
    }

    /// Id of the style whose resolution failed
    #[must_use]
    pub fn style_id(&self) -> &str {
        match self {
            Self::CircularReference { style_id, .. } | Self::MissingParent { style_id, .. } => {
                style_id
            }
        }
    }

    /// Error category per the resolution taxonomy
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::CircularReference { .. } => ErrorCategory::Circular,
            Self::MissingParent { .. } => ErrorCategory::Referential,
        }
    }
}

/// Renders a cycle as `A -> B -> A`
struct CyclePath<'a>(&'a [String]);

impl fmt::Display for CyclePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.0 {
            write!(f, "{id} -> ")?;
        }
        match self.0.first() {
            Some(first) => write!(f, "{first}"),
            None => Ok(()),
        }
    }
}
