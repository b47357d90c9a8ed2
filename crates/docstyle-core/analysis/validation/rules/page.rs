//! Page geometry checks

use crate::{
    analysis::validation::{ValidationContext, ValidationRule},
    model::{AdvancedStyle, ValidationIssue},
    utils::ErrorCategory,
};
use alloc::{format, vec::Vec};

/// Rule validating page size, margins and column count
///
/// Only fields that are set are checked, so paragraph and character styles
/// without page geometry pass untouched.
pub struct PageRule;

impl ValidationRule for PageRule {
    fn id(&self) -> &'static str {
        "page"
    }

    fn name(&self) -> &'static str {
        "Page"
    }

    fn description(&self) -> &'static str {
        "Checks page dimensions, margins and column count"
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Semantic
    }

    fn check_style(
        &self,
        style: &AdvancedStyle,
        ctx: &ValidationContext<'_>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let page = &style.properties.page;

        for (field, value) in [("page.width", page.width), ("page.height", page.height)] {
            if !ctx.policy.is_set(&value) {
                continue;
            }
            if let Some(value) = value.filter(|v| *v <= 0.0) {
                issues.push(ValidationIssue::warning(
                    self.id(),
                    &style.id,
                    field,
                    format!("Page dimension {value} must be positive"),
                ));
            }
        }

        for (side, value) in page.margins.sides() {
            if value < 0.0 {
                issues.push(ValidationIssue::warning(
                    self.id(),
                    &style.id,
                    &format!("page.margins.{side}"),
                    format!("Margin {value} is negative"),
                ));
            }
        }

        if !ctx.policy.is_set(&page.columns) {
            return;
        }
        if let Some(columns) = page.columns {
            let range = ctx.thresholds.min_columns..=ctx.thresholds.max_columns;
            if !range.contains(&columns) {
                issues.push(ValidationIssue::warning(
                    self.id(),
                    &style.id,
                    "page.columns",
                    format!(
                        "Column count {columns} is outside {}..={}",
                        range.start(),
                        range.end()
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::validation::{run_rule, ValidationThresholds},
        model::{MergePolicy, StyleProperties, StyleType},
        StyleRegistry,
    };

    fn registry(properties: StyleProperties) -> StyleRegistry {
        StyleRegistry::from_styles([
            AdvancedStyle::new("Letter", StyleType::Page).with_properties(properties)
        ])
        .unwrap()
    }

    #[test]
    fn unset_geometry_passes() {
        let issues = run_rule(&PageRule, &registry(StyleProperties::default()), false);
        assert!(issues.is_empty());
    }

    #[test]
    fn bad_geometry_warns() {
        let mut properties = StyleProperties::default();
        properties.page.width = Some(612.0);
        properties.page.height = Some(-792.0);
        properties.page.margins.bottom = Some(-1.0);
        properties.page.columns = Some(12);

        let issues = run_rule(&PageRule, &registry(properties), false);
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["page.height", "page.margins.bottom", "page.columns"]);
    }

    #[test]
    fn explicit_zero_width_warns_only_when_zero_is_meaningful() {
        let mut properties = StyleProperties::default();
        properties.page.width = Some(0.0);
        properties.page.columns = Some(0);
        let registry = registry(properties);

        assert!(run_rule(&PageRule, &registry, false).is_empty());

        let thresholds = ValidationThresholds::default();
        let ctx = ValidationContext {
            registry: &registry,
            thresholds: &thresholds,
            cycles: &[],
            policy: MergePolicy::ExplicitOnly,
            strict: false,
        };
        assert_eq!(PageRule.check(&ctx).len(), 2);
    }
}
