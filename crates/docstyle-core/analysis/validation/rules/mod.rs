//! Built-in validation rules
//!
//! Each rule lives in its own module and is registered in
//! [`BuiltinRules::all_rules`], which also fixes the order findings appear
//! in a report.
//!
//! # Example
//!
//! ```rust
//! use docstyle_core::analysis::validation::rules::BuiltinRules;
//!
//! let ids = BuiltinRules::all_rule_ids();
//! assert!(ids.contains(&"inheritance"));
//! assert!(ids.contains(&"type-consistency"));
//! ```

use super::ValidationRule;
use crate::utils::ErrorCategory;
use alloc::{boxed::Box, vec, vec::Vec};

pub mod completeness;
pub mod cross_property;
pub mod font;
pub mod inheritance;
pub mod naming;
pub mod page;
pub mod paragraph;
pub mod table;
pub mod type_consistency;

pub use completeness::CompletenessRule;
pub use cross_property::CrossPropertyRule;
pub use font::FontRule;
pub use inheritance::InheritanceRule;
pub use naming::NamingRule;
pub use page::PageRule;
pub use paragraph::ParagraphRule;
pub use table::TableRule;
pub use type_consistency::TypeConsistencyRule;

/// Built-in validation rules registry
///
/// # Rule List
///
/// - `CompletenessRule`: required id, kind and display name
/// - `InheritanceRule`: cycles, dangling references and deep chains
/// - `NamingRule`: invalid characters and overlong names
/// - `FontRule`: font size range and color format
/// - `ParagraphRule`: negative indents and spacing
/// - `TableRule`: negative cell padding
/// - `PageRule`: page size, margins and columns
/// - `CrossPropertyRule`: suspicious property combinations
/// - `TypeConsistencyRule`: disagreement between styles of one kind
pub struct BuiltinRules;

impl BuiltinRules {
    /// Get all built-in rules in run order
    #[must_use]
    pub fn all_rules() -> Vec<Box<dyn ValidationRule>> {
        vec![
            Box::new(CompletenessRule),
            Box::new(InheritanceRule),
            Box::new(NamingRule),
            Box::new(FontRule),
            Box::new(ParagraphRule),
            Box::new(TableRule),
            Box::new(PageRule),
            Box::new(CrossPropertyRule),
            Box::new(TypeConsistencyRule),
        ]
    }

    /// Get rules whose findings fall in `category`
    #[must_use]
    pub fn rules_for_category(category: ErrorCategory) -> Vec<Box<dyn ValidationRule>> {
        Self::all_rules()
            .into_iter()
            .filter(|rule| rule.category() == category)
            .collect()
    }

    /// Get rule by ID
    #[must_use]
    pub fn rule_by_id(id: &str) -> Option<Box<dyn ValidationRule>> {
        Self::all_rules().into_iter().find(|rule| rule.id() == id)
    }

    /// Get all rule IDs
    #[must_use]
    pub fn all_rule_ids() -> Vec<&'static str> {
        Self::all_rules().iter().map(|rule| rule.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_count_correct() {
        assert_eq!(BuiltinRules::all_rules().len(), 9);
    }

    #[test]
    fn all_rules_have_unique_ids() {
        let mut ids = Vec::new();
        for rule in BuiltinRules::all_rules() {
            let id = rule.id();
            assert!(!ids.contains(&id), "Duplicate rule ID: {id}");
            ids.push(id);
        }
    }

    #[test]
    fn all_rules_have_names_and_descriptions() {
        for rule in BuiltinRules::all_rules() {
            assert!(!rule.name().is_empty());
            assert!(!rule.description().is_empty());
        }
    }

    #[test]
    fn rule_by_id_works() {
        let rule = BuiltinRules::rule_by_id("naming");
        assert_eq!(rule.map(|r| r.id()), Some("naming"));
        assert!(BuiltinRules::rule_by_id("nonexistent").is_none());
    }

    #[test]
    fn rules_for_category_filters() {
        let advisory = BuiltinRules::rules_for_category(ErrorCategory::Advisory);
        assert_eq!(advisory.len(), 2);
        assert!(advisory.iter().all(|r| r.category() == ErrorCategory::Advisory));
    }
}
