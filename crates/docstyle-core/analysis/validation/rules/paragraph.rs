//! Paragraph indentation and spacing checks

use crate::{
    analysis::validation::{ValidationContext, ValidationRule},
    model::{AdvancedStyle, ValidationIssue},
    utils::ErrorCategory,
};
use alloc::{format, vec::Vec};

/// Rule flagging negative indents and spacing
///
/// First-line indent may be negative (hanging indent) and is not checked.
pub struct ParagraphRule;

impl ValidationRule for ParagraphRule {
    fn id(&self) -> &'static str {
        "paragraph"
    }

    fn name(&self) -> &'static str {
        "Paragraph"
    }

    fn description(&self) -> &'static str {
        "Flags negative paragraph indentation and spacing"
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Semantic
    }

    fn check_style(
        &self,
        style: &AdvancedStyle,
        _ctx: &ValidationContext<'_>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let paragraph = &style.properties.paragraph;
        let fields = [
            ("paragraph.indentLeft", paragraph.indent_left),
            ("paragraph.indentRight", paragraph.indent_right),
            ("paragraph.spacingBefore", paragraph.spacing_before),
            ("paragraph.spacingAfter", paragraph.spacing_after),
            ("paragraph.lineSpacing", paragraph.line_spacing),
        ];

        for (field, value) in fields {
            if let Some(value) = value.filter(|v| *v < 0.0) {
                issues.push(ValidationIssue::warning(
                    self.id(),
                    &style.id,
                    field,
                    format!("Value {value} is negative"),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::validation::run_rule,
        model::{StyleProperties, StyleType, ValidationSeverity},
        StyleRegistry,
    };

    #[test]
    fn negative_values_warn() {
        let mut properties = StyleProperties::default();
        properties.paragraph.indent_left = Some(-5.0);
        properties.paragraph.spacing_after = Some(-1.0);
        properties.paragraph.indent_first_line = Some(-18.0);
        properties.paragraph.line_spacing = Some(1.15);

        let registry = StyleRegistry::from_styles([
            AdvancedStyle::new("List", StyleType::Paragraph).with_properties(properties)
        ])
        .unwrap();

        let issues = run_rule(&ParagraphRule, &registry, false);
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["paragraph.indentLeft", "paragraph.spacingAfter"]);
        assert!(issues.iter().all(|i| i.severity == ValidationSeverity::Warning));
    }
}
