//! Font property range and format checks

use crate::{
    analysis::validation::{ValidationContext, ValidationRule},
    model::{AdvancedStyle, ValidationIssue, ValidationSeverity},
    utils::{is_valid_color, ErrorCategory},
};
use alloc::{format, vec::Vec};

/// Rule validating font size and color
///
/// A negative size is an error since no renderer can honor it. Oversized
/// fonts and unrecognized colors are warnings.
pub struct FontRule;

impl ValidationRule for FontRule {
    fn id(&self) -> &'static str {
        "font"
    }

    fn name(&self) -> &'static str {
        "Font"
    }

    fn description(&self) -> &'static str {
        "Checks font size range and color format"
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
        let font = &style.properties.font;

        if let Some(size) = font.size {
            if size < 0.0 {
                issues.push(ValidationIssue::error(
                    self.id(),
                    &style.id,
                    "font.size",
                    format!("Font size {size} is negative"),
                ));
            } else if size > ctx.thresholds.max_font_size {
                issues.push(ValidationIssue::warning(
                    self.id(),
                    &style.id,
                    "font.size",
                    format!(
                        "Font size {size} exceeds {}",
                        ctx.thresholds.max_font_size
                    ),
                ));
            }
        }

        if let Some(color) = font.color.as_deref().filter(|c| !c.is_empty()) {
            if !is_valid_color(color) {
                let mut issue = ValidationIssue::new(
                    ValidationSeverity::Warning,
                    self.id(),
                    Some(&style.id),
                    "font.color",
                    format!("Color '{color}' is not #RRGGBB or rgb(r, g, b)"),
                );
                if ctx.strict {
                    issue = issue.with_suggestion("Apply a theme or write the color as #RRGGBB");
                }
                issues.push(issue);
            }
        }
    }
}
