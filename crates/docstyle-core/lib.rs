//! # docstyle core
//!
//! Style inheritance resolution, conflict detection and validation for the
//! style sets of word-processing documents and templates. Format decoders
//! hand over style records with possibly-unset properties; the engine fills
//! them in along `basedOn` chains, finds structural conflicts between
//! styles, and produces validation reports.
//!
//! ## Features
//!
//! - **Explicit registry**: no global state; each document gets its own
//!   [`StyleRegistry`] value
//! - **Scoped failures**: a cycle or missing parent fails only the styles
//!   involved, and every other style still resolves
//! - **Iterative traversal**: cycles are detected with an explicit path
//!   stack, never by recursion depth
//! - **Configurable merging**: [`MergePolicy`] decides whether a zero value
//!   counts as unset
//! - **Extensible rules**: trait-based [`ValidationRule`] battery
//!
//! ## Quick Start
//!
//! ```rust
//! use docstyle_core::{
//!     AdvancedStyle, AnalysisConfig, StyleAnalysis, StyleProperties, StyleRegistry, StyleType,
//! };
//!
//! let mut normal = StyleProperties::default();
//! normal.font.name = Some("Calibri".into());
//! normal.font.size = Some(11.0);
//!
//! let mut heading = StyleProperties::default();
//! heading.font.size = Some(16.0);
//! heading.font.bold = Some(true);
//!
//! let registry = StyleRegistry::from_styles([
//!     AdvancedStyle::new("Normal", StyleType::Paragraph).with_properties(normal),
//!     AdvancedStyle::new("Heading1", StyleType::Paragraph)
//!         .with_based_on("Normal")
//!         .with_next("Normal")
//!         .with_properties(heading),
//! ])?;
//!
//! let analysis = StyleAnalysis::analyze(&registry, &AnalysisConfig::default())?;
//! let heading = analysis.registry().get("Heading1").unwrap();
//! assert_eq!(heading.properties.font.name.as_deref(), Some("Calibri"));
//! assert_eq!(heading.properties.font.size, Some(16.0));
//! assert!(analysis.is_valid());
//! # Ok::<(), docstyle_core::CoreError>(())
//! ```
//!
//! ## Logging
//!
//! Passes report progress through the [`log`] facade. No logger is
//! installed by the library.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod analysis;
pub mod model;
pub mod registry;
pub mod utils;

pub use analysis::{
    AnalysisConfig, AnalysisOptions, BuiltinRules, ConflictDetector, InheritanceResolver,
    Resolution, StyleAnalysis, ValidationRule, ValidationThresholds, Validator,
};
pub use model::{
    AdvancedStyle, ConditionKind, ConditionalStyle, ConflictKind, ConflictPriority, MergePolicy,
    StyleConflict, StyleInheritance, StyleProperties, StyleType, StyleValidation, ThemeStyle,
    Timestamp, ValidationIssue, ValidationSeverity,
};
pub use registry::StyleRegistry;
pub use utils::{CoreError, ErrorCategory, ResolutionError};

/// Result type alias for fallible engine operations
pub type Result<T> = core::result::Result<T, CoreError>;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn public_surface_is_reachable() {
        let registry = StyleRegistry::new();
        let analysis = StyleAnalysis::analyze(&registry, &AnalysisConfig::default()).unwrap();
        assert!(analysis.is_valid());
        assert!(analysis.registry().is_empty());
        assert_eq!(BuiltinRules::all_rule_ids().len(), 9);
    }
}
