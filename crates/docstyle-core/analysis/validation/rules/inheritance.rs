//! Inheritance graph checks
//!
//! Reports each `basedOn` cycle once, dangling references, and chains deep
//! enough to make formatting hard to trace.

use crate::{
    analysis::validation::{ValidationContext, ValidationRule},
    model::{ReferenceField, ValidationIssue},
    utils::ErrorCategory,
};
use alloc::{format, string::String, vec::Vec};

/// Rule validating `basedOn`, `next` and `linked` references
///
/// A cycle or a missing parent is an error; a missing `next` or `linked`
/// target is a warning, as is a chain longer than
/// [`max_inheritance_depth`](crate::analysis::validation::ValidationThresholds::max_inheritance_depth).
pub struct InheritanceRule;

impl ValidationRule for InheritanceRule {
    fn id(&self) -> &'static str {
        "inheritance"
    }

    fn name(&self) -> &'static str {
        "Inheritance"
    }

    fn description(&self) -> &'static str {
        "Detects circular inheritance, dangling references and deep hierarchies"
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Referential
    }

    fn check(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for cycle in ctx.cycles {
            let Some(first) = cycle.first() else {
                continue;
            };
            let path = cycle
                .iter()
                .chain(core::iter::once(first))
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" -> ");
            issues.push(
                ValidationIssue::error(
                    self.id(),
                    first,
                    ReferenceField::BasedOn.as_str(),
                    format!("Circular inheritance: {path}"),
                )
                .with_related(cycle.iter().cloned())
                .with_suggestion("Clear basedOn on one style of the cycle"),
            );
        }

        for style in ctx.registry.styles() {
            for (field, target) in style.inheritance.references() {
                if ctx.registry.contains(target) {
                    continue;
                }
                let message = format!("References missing style '{target}'");
                let issue = if field == ReferenceField::BasedOn {
                    ValidationIssue::error(self.id(), &style.id, field.as_str(), message)
                } else {
                    ValidationIssue::warning(self.id(), &style.id, field.as_str(), message)
                };
                issues.push(issue);
            }

            let level = ctx.registry.inheritance_level(&style.id);
            if level > ctx.thresholds.max_inheritance_depth {
                issues.push(
                    ValidationIssue::warning(
                        self.id(),
                        &style.id,
                        ReferenceField::BasedOn.as_str(),
                        format!(
                            "Inheritance chain is {level} styles deep (limit {})",
                            ctx.thresholds.max_inheritance_depth
                        ),
                    )
                    .with_suggestion("Flatten the hierarchy by basing the style on a closer root"),
                );
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::validation::run_rule,
        model::{AdvancedStyle, StyleType, ValidationSeverity},
        StyleRegistry,
    };

    fn paragraph(id: &str) -> AdvancedStyle {
        AdvancedStyle::new(id, StyleType::Paragraph)
    }

    #[test]
    fn cycle_reported_once() {
        let registry = StyleRegistry::from_styles([
            paragraph("A").with_based_on("B"),
            paragraph("B").with_based_on("A"),
        ])
        .unwrap();

        let issues = run_rule(&InheritanceRule, &registry, false);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ValidationSeverity::Error);
        assert_eq!(issues[0].message, "Circular inheritance: A -> B -> A");
        assert!(issues[0].concerns("B"));
    }

    #[test]
    fn dangling_references() {
        let registry = StyleRegistry::from_styles([paragraph("Body")
            .with_based_on("Base")
            .with_next("After")
            .with_linked("BodyChar")])
        .unwrap();

        let issues = run_rule(&InheritanceRule, &registry, false);
        let severities: Vec<_> = issues.iter().map(|i| (i.field.as_str(), i.severity)).collect();
        assert_eq!(
            severities,
            [
                ("basedOn", ValidationSeverity::Error),
                ("next", ValidationSeverity::Warning),
                ("linked", ValidationSeverity::Warning),
            ]
        );
    }

    #[test]
    fn deep_chain_warns() {
        let mut styles = Vec::new();
        styles.push(paragraph("L0"));
        for level in 1..=11 {
            styles.push(paragraph(&format!("L{level}")).with_based_on(format!("L{}", level - 1)));
        }
        let registry = StyleRegistry::from_styles(styles).unwrap();

        let issues = run_rule(&InheritanceRule, &registry, false);
        let deep: Vec<&String> = issues
            .iter()
            .filter_map(|issue| issue.style_id.as_ref())
            .collect();
        assert_eq!(deep, ["L10", "L11"]);
        assert!(issues.iter().all(|i| i.severity == ValidationSeverity::Warning));
    }
}
