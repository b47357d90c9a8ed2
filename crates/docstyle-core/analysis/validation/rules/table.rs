//! Table cell padding checks

use crate::{
    analysis::validation::{ValidationContext, ValidationRule},
    model::{AdvancedStyle, ValidationIssue},
    utils::ErrorCategory,
};
use alloc::{format, vec::Vec};

/// Rule flagging negative cell padding
pub struct TableRule;

impl ValidationRule for TableRule {
    fn id(&self) -> &'static str {
        "table"
    }

    fn name(&self) -> &'static str {
        "Table"
    }

    fn description(&self) -> &'static str {
        "Flags negative table cell padding"
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
        for (side, value) in style.properties.table.cell_padding.sides() {
            if value < 0.0 {
                issues.push(ValidationIssue::warning(
                    self.id(),
                    &style.id,
                    &format!("table.cellPadding.{side}"),
                    format!("Cell padding {value} is negative"),
                ));
            }
        }
    }
}
