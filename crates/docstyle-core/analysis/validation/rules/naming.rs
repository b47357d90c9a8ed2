//! Style id and display name checks

use crate::{
    analysis::validation::{ValidationContext, ValidationRule},
    model::{AdvancedStyle, ValidationIssue},
    utils::{has_invalid_name_chars, ErrorCategory, INVALID_NAME_CHARS},
};
use alloc::{format, string::String, vec::Vec};

/// Rule flagging names that break pickers or file-based exports
///
/// Empty names are left to the completeness rule.
pub struct NamingRule;

impl ValidationRule for NamingRule {
    fn id(&self) -> &'static str {
        "naming"
    }

    fn name(&self) -> &'static str {
        "Naming"
    }

    fn description(&self) -> &'static str {
        "Flags invalid characters and overlong style names"
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
        if !style.id.is_empty()
            && (has_invalid_name_chars(&style.id) || style.id.contains(char::is_whitespace))
        {
            issues.push(
                ValidationIssue::warning(
                    self.id(),
                    &style.id,
                    "id",
                    "Id contains whitespace or reserved characters",
                )
                .with_suggestion("Use letters, digits, '-' or '_' in ids"),
            );
        }

        let name = style.name.trim();
        if name.is_empty() {
            return;
        }

        if has_invalid_name_chars(name) {
            let reserved: String = INVALID_NAME_CHARS.iter().collect();
            issues.push(ValidationIssue::warning(
                self.id(),
                &style.id,
                "name",
                format!("Name '{name}' contains one of the reserved characters {reserved}"),
            ));
        }

        let length = name.chars().count();
        if length > ctx.thresholds.max_name_length {
            issues.push(
                ValidationIssue::warning(
                    self.id(),
                    &style.id,
                    "name",
                    format!(
                        "Name is {length} characters long (limit {})",
                        ctx.thresholds.max_name_length
                    ),
                )
                .with_suggestion("Shorten the display name"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::validation::run_rule, model::StyleType, StyleRegistry};

    fn run(style: AdvancedStyle) -> Vec<ValidationIssue> {
        let registry = StyleRegistry::from_styles([style]).unwrap();
        run_rule(&NamingRule, &registry, false)
    }

    #[test]
    fn ordinary_names_pass() {
        let style = AdvancedStyle::new("Heading1", StyleType::Paragraph).with_name("Heading 1");
        assert!(run(style).is_empty());
    }

    #[test]
    fn reserved_characters_warn() {
        let style = AdvancedStyle::new("Quote", StyleType::Paragraph).with_name("Quote: block");
        let issues = run(style);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "name");
    }

    #[test]
    fn whitespace_in_id_warns() {
        let style = AdvancedStyle::new("Block Quote", StyleType::Paragraph).with_name("Quote");
        let issues = run(style);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "id");
    }

    #[test]
    fn long_names_counted_in_characters() {
        let exactly = "é".repeat(50);
        assert!(run(AdvancedStyle::new("A", StyleType::Paragraph).with_name(exactly)).is_empty());

        let over = "x".repeat(51);
        let issues = run(AdvancedStyle::new("A", StyleType::Paragraph).with_name(over));
        assert_eq!(issues.len(), 1);
    }
}
