//! Style resolution, conflict detection and validation
//!
//! Every pass takes a [`StyleRegistry`](crate::StyleRegistry) by reference
//! and works on values it owns, so independent documents can be analyzed
//! concurrently without synchronization.
//!
//! # Module Organization
//!
//! - [`resolver`] - Inheritance resolution along `basedOn` and linked styles
//! - [`conflicts`] - Dangling references, cycles and duplicate names
//! - [`validation`] - Rule battery producing validation reports
//! - [`analyzer`] - Configurable pass running all of the above
//!
//! # Example
//!
//! ```rust
//! use docstyle_core::{AdvancedStyle, AnalysisConfig, StyleAnalysis, StyleRegistry, StyleType};
//!
//! let registry = StyleRegistry::from_styles([
//!     AdvancedStyle::new("Normal", StyleType::Paragraph),
//!     AdvancedStyle::new("Heading1", StyleType::Paragraph).with_based_on("Normal"),
//! ])?;
//!
//! let analysis = StyleAnalysis::analyze(&registry, &AnalysisConfig::default())?;
//! assert!(analysis.is_valid());
//! assert!(analysis.conflicts().is_empty());
//! # Ok::<(), docstyle_core::CoreError>(())
//! ```

pub mod analyzer;
pub mod conflicts;
pub mod resolver;
pub mod validation;

pub use analyzer::{AnalysisConfig, AnalysisOptions, StyleAnalysis};
pub use conflicts::ConflictDetector;
pub use resolver::{InheritanceResolver, Resolution};
pub use validation::{
    BuiltinRules, ValidationContext, ValidationRule, ValidationThresholds, Validator,
};
