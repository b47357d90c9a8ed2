//! Checks spanning several properties of one style

use crate::{
    analysis::validation::{ValidationContext, ValidationRule},
    model::{AdvancedStyle, ValidationIssue},
    utils::ErrorCategory,
};
use alloc::{format, vec::Vec};

/// Rule flagging property combinations that rarely make sense together
///
/// - bold and italic both on
/// - left plus right indent wider than the page
/// - spacing before plus after above the configured limit
pub struct CrossPropertyRule;

impl ValidationRule for CrossPropertyRule {
    fn id(&self) -> &'static str {
        "cross-property"
    }

    fn name(&self) -> &'static str {
        "Cross-Property"
    }

    fn description(&self) -> &'static str {
        "Flags suspicious combinations of font, indent and spacing values"
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Advisory
    }

    fn check_style(
        &self,
        style: &AdvancedStyle,
        ctx: &ValidationContext<'_>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let properties = &style.properties;

        if properties.font.bold == Some(true) && properties.font.italic == Some(true) {
            issues.push(ValidationIssue::warning(
                self.id(),
                &style.id,
                "font",
                "Bold and italic are both enabled",
            ));
        }

        let paragraph = &properties.paragraph;
        if let Some(width) = properties.page.width.filter(|w| *w > 0.0) {
            let indent =
                paragraph.indent_left.unwrap_or(0.0) + paragraph.indent_right.unwrap_or(0.0);
            if indent > width {
                issues.push(
                    ValidationIssue::warning(
                        self.id(),
                        &style.id,
                        "paragraph.indent",
                        format!("Combined indentation {indent} exceeds page width {width}"),
                    )
                    .with_suggestion("Reduce the left or right indent"),
                );
            }
        }

        let spacing =
            paragraph.spacing_before.unwrap_or(0.0) + paragraph.spacing_after.unwrap_or(0.0);
        if spacing > ctx.thresholds.max_combined_spacing {
            issues.push(ValidationIssue::warning(
                self.id(),
                &style.id,
                "paragraph.spacing",
                format!(
                    "Combined spacing {spacing} exceeds {}",
                    ctx.thresholds.max_combined_spacing
                ),
            ));
        }
    }
}
