//! Style data model
//!
//! Plain data types shared by the registry and the analysis passes. Records
//! arrive from external format decoders with possibly-unset properties; the
//! resolver fills them in and the validator annotates them.
//!
//! # Module Organization
//!
//! - [`properties`] - Typed property groups and the merge rule
//! - [`style`] - Style records, kinds and inheritance references
//! - [`theme`] - Theme fonts and color slots
//! - [`conflict`] - Structural conflicts between styles
//! - [`validation`] - Validation issues and reports

pub mod conflict;
pub mod properties;
pub mod style;
pub mod theme;
pub mod validation;

pub use conflict::{ConflictKind, ConflictPriority, StyleConflict};
pub use properties::{
    BorderLine, Borders, Edges, FontProperties, Inherit, ListProperties, MergePolicy,
    PageProperties, ParagraphProperties, SectionProperties, Sentinel, StyleProperties,
    TableProperties, VisualProperties,
};
pub use style::{
    AdvancedStyle, ConditionKind, ConditionalStyle, ReferenceField, StyleInheritance, StyleType,
};
pub use theme::ThemeStyle;
pub use validation::{StyleValidation, ValidationIssue, ValidationSeverity, ValidationSummary};

/// Milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(u64);

impl Timestamp {
    /// The Unix epoch
    pub const EPOCH: Self = Self(0);

    /// Create from milliseconds since the epoch
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the epoch
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Current wall-clock time
    #[cfg(feature = "std")]
    #[must_use]
    pub fn now() -> Self {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(Self::EPOCH, |elapsed| {
                Self(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            })
    }

    /// Current wall-clock time; without `std` no clock is available
    #[cfg(not(feature = "std"))]
    #[must_use]
    pub const fn now() -> Self {
        Self::EPOCH
    }
}
