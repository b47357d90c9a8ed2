//! Required identity fields

use crate::{
    analysis::validation::{ValidationContext, ValidationRule},
    model::{AdvancedStyle, ValidationIssue},
    utils::ErrorCategory,
};
use alloc::vec::Vec;

/// Rule requiring a non-empty id and a known kind
///
/// Both are hard errors. An empty display name is only a warning since
/// applications can fall back to the id.
pub struct CompletenessRule;

impl ValidationRule for CompletenessRule {
    fn id(&self) -> &'static str {
        "completeness"
    }

    fn name(&self) -> &'static str {
        "Completeness"
    }

    fn description(&self) -> &'static str {
        "Requires every style to have an id, a kind and a display name"
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Structural
    }

    fn check_style(
        &self,
        style: &AdvancedStyle,
        _ctx: &ValidationContext<'_>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        if style.id.is_empty() {
            issues.push(
                ValidationIssue::error(self.id(), &style.id, "id", "Style id is empty")
                    .with_suggestion("Assign a unique, non-empty id"),
            );
        }

        if style.style_type.is_none() {
            issues.push(ValidationIssue::error(
                self.id(),
                &style.id,
                "type",
                "Style kind is missing",
            ));
        }

        if style.name.trim().is_empty() {
            issues.push(
                ValidationIssue::warning(self.id(), &style.id, "name", "Display name is empty")
                    .with_suggestion("Give the style a name users can pick it by"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::validation::run_rule,
        model::{StyleType, ValidationSeverity},
        StyleRegistry,
    };

    fn run(style: AdvancedStyle) -> Vec<ValidationIssue> {
        let registry = StyleRegistry::from_styles([style]).unwrap();
        run_rule(&CompletenessRule, &registry, false)
    }

    #[test]
    fn complete_style_passes() {
        assert!(run(AdvancedStyle::new("Normal", StyleType::Paragraph)).is_empty());
    }

    #[test]
    fn missing_kind_is_error() {
        let issues = run(AdvancedStyle::untyped("Mystery"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ValidationSeverity::Error);
        assert_eq!(issues[0].field, "type");
    }

    #[test]
    fn empty_id_is_error() {
        let issues = run(AdvancedStyle::new("", StyleType::Paragraph).with_name("Body"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "id");
    }

    #[test]
    fn whitespace_id_is_left_to_naming() {
        let issues = run(AdvancedStyle::new("  ", StyleType::Paragraph).with_name("Body"));
        assert!(issues.is_empty());
    }

    #[test]
    fn empty_name_is_warning() {
        let issues = run(AdvancedStyle::new("Body", StyleType::Paragraph).with_name("  "));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ValidationSeverity::Warning);
    }
}
