//! Consistency between styles of the same kind
//!
//! The first style of a kind (in id order) that sets the key property
//! becomes the baseline; later styles that set it differently are flagged.
//! Paragraph styles are compared on alignment, character styles on font
//! name and table styles on the top border style.

use crate::{
    analysis::validation::{ValidationContext, ValidationRule},
    model::{AdvancedStyle, StyleType, ValidationIssue},
    utils::ErrorCategory,
};
use alloc::{collections::BTreeMap, format, vec::Vec};

/// Rule flagging styles that disagree with the first style of their kind
pub struct TypeConsistencyRule;

impl TypeConsistencyRule {
    fn key_property(style: &AdvancedStyle) -> Option<(&'static str, &str)> {
        let properties = &style.properties;
        let (field, value) = match style.style_type? {
            StyleType::Paragraph => ("paragraph.alignment", &properties.paragraph.alignment),
            StyleType::Character => ("font.name", &properties.font.name),
            StyleType::Table => ("table.borders.top.style", &properties.table.borders.top.style),
            _ => return None,
        };
        value
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(|value| (field, value))
    }
}

impl ValidationRule for TypeConsistencyRule {
    fn id(&self) -> &'static str {
        "type-consistency"
    }

    fn name(&self) -> &'static str {
        "Type Consistency"
    }

    fn description(&self) -> &'static str {
        "Flags styles that differ from the first style of their kind on a key property"
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Advisory
    }

    fn check(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut baselines: BTreeMap<StyleType, (&str, &str)> = BTreeMap::new();
        let mut issues = Vec::new();

        for style in ctx.registry.styles() {
            let (Some(kind), Some((field, value))) =
                (style.style_type, Self::key_property(style))
            else {
                continue;
            };

            let &mut (baseline_id, baseline) =
                baselines.entry(kind).or_insert((style.id.as_str(), value));
            if baseline == value {
                continue;
            }

            let mut issue = ValidationIssue::warning(
                self.id(),
                &style.id,
                field,
                format!("'{value}' differs from '{baseline}' used by {kind} style '{baseline_id}'"),
            );
            if ctx.strict {
                issue = issue.with_suggestion(format!("Use '{baseline}' like '{baseline_id}'"));
            }
            issues.push(issue);
        }

        issues
    }
}
