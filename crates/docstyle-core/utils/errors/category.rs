//! Error categorization for resolution and validation failures
//!
//! Mirrors the failure taxonomy of the engine: structural, referential,
//! circular, semantic and advisory problems, plus configuration and
//! internal errors.

use core::fmt;

/// Error category for filtering and report organization
///
/// # Examples
///
/// ```rust
/// use docstyle_core::utils::errors::{CoreError, ErrorCategory};
///
/// let error = CoreError::duplicate_style("Normal");
/// assert_eq!(error.category(), ErrorCategory::Structural);
/// assert!(error.category().blocks_validity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// Missing required id or type, duplicate ids
    Structural,

    /// Dangling `basedOn`, `next` or `linked` references
    Referential,

    /// `basedOn` cycles
    Circular,

    /// Out-of-range numbers or malformed strings
    Semantic,

    /// Cross-property or cross-style heuristics
    Advisory,

    /// Problems with engine configuration
    Configuration,

    /// Errors that indicate bugs in the library itself
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ErrorCategory {
    /// Get lowercase category name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Referential => "referential",
            Self::Circular => "circular",
            Self::Semantic => "semantic",
            Self::Advisory => "advisory",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }

    /// Whether failures in this category make a style set invalid
    ///
    /// Semantic and advisory findings are reported as warnings only.
    #[must_use]
    pub const fn blocks_validity(self) -> bool {
        match self {
            Self::Structural | Self::Referential | Self::Circular | Self::Internal => true,
            Self::Semantic | Self::Advisory | Self::Configuration => false,
        }
    }

    /// Relative severity, higher is more severe
    #[must_use]
    pub const fn severity_level(self) -> u8 {
        match self {
            Self::Internal => 5,
            Self::Circular => 4,
            Self::Structural | Self::Referential => 3,
            Self::Configuration => 2,
            Self::Semantic => 1,
            Self::Advisory => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn category_display() {
        assert_eq!(format!("{}", ErrorCategory::Circular), "circular");
        assert_eq!(ErrorCategory::Referential.name(), "referential");
    }

    #[test]
    fn validity_blocking() {
        assert!(ErrorCategory::Circular.blocks_validity());
        assert!(!ErrorCategory::Advisory.blocks_validity());
        assert!(
            ErrorCategory::Circular.severity_level() > ErrorCategory::Semantic.severity_level()
        );
    }
}
