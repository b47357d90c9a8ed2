//! Validation reports
//!
//! A [`StyleValidation`] is both the per-style snapshot stored on each
//! [`AdvancedStyle`](super::AdvancedStyle) and the aggregate report for a
//! whole registry. Individual findings are [`ValidationIssue`]s.

use super::Timestamp;
use alloc::{format, string::String, vec::Vec};
use core::fmt;

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationSeverity {
    /// Optional improvement
    Suggestion,
    /// Advisory; never affects validity
    Warning,
    /// Hard failure; makes the report invalid
    Error,
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suggestion => write!(f, "suggestion"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Single finding produced by a validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationIssue {
    /// Issue severity level
    pub severity: ValidationSeverity,
    /// Id of the rule that produced the issue
    pub rule_id: &'static str,
    /// Style the issue is about, if it concerns one style
    pub style_id: Option<String>,
    /// Property or field that caused the issue
    pub field: String,
    /// Human-readable description
    pub message: String,
    /// Optional suggested fix
    pub suggestion: Option<String>,
    /// Other styles the issue also concerns
    pub related: Vec<String>,
}

impl ValidationIssue {
    /// Create new validation issue
    pub fn new(
        severity: ValidationSeverity,
        rule_id: &'static str,
        style_id: Option<&str>,
        field: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            rule_id,
            style_id: style_id.map(String::from),
            field: String::from(field),
            message: message.into(),
            suggestion: None,
            related: Vec::new(),
        }
    }

    /// Create error-level issue about one style
    pub fn error(rule_id: &'static str, style_id: &str, field: &str, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Error, rule_id, Some(style_id), field, message)
    }

    /// Create warning-level issue about one style
    pub fn warning(
        rule_id: &'static str,
        style_id: &str,
        field: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ValidationSeverity::Warning, rule_id, Some(style_id), field, message)
    }

    /// Attach suggested fix
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach further styles the issue concerns
    #[must_use]
    pub fn with_related<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Whether the issue concerns style `id`
    #[must_use]
    pub fn concerns(&self, id: &str) -> bool {
        self.style_id.as_deref() == Some(id) || self.related.iter().any(|r| r == id)
    }

    /// Message prefixed with the style id
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.style_id {
            Some(id) => format!("[{id}] {}: {}", self.field, self.message),
            None => format!("{}: {}", self.field, self.message),
        }
    }
}

/// Counts of findings in a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of suggestions
    pub suggestions: usize,
}

/// Validation report: validity plus ordered message lists
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleValidation {
    /// True iff `errors` is empty
    pub valid: bool,
    /// Hard failures
    pub errors: Vec<String>,
    /// Advisory findings
    pub warnings: Vec<String>,
    /// Optional improvements
    pub suggestions: Vec<String>,
    /// When the report was produced
    pub last_checked: Timestamp,
}

impl Default for StyleValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleValidation {
    /// Empty, valid report
    #[must_use]
    pub const fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
            last_checked: Timestamp::EPOCH,
        }
    }

    /// Build report from issues
    ///
    /// Suggestions attached to errors or warnings are also collected into the
    /// suggestions list.
    pub fn from_issues<'a, I>(issues: I, checked_at: Timestamp) -> Self
    where
        I: IntoIterator<Item = &'a ValidationIssue>,
    {
        let mut report = Self::new();
        for issue in issues {
            report.push(issue);
        }
        report.last_checked = checked_at;
        report
    }

    /// Add one issue to the matching list
    pub fn push(&mut self, issue: &ValidationIssue) {
        let text = issue.describe();
        match issue.severity {
            ValidationSeverity::Error => self.add_error(text),
            ValidationSeverity::Warning => self.add_warning(text),
            ValidationSeverity::Suggestion => self.add_suggestion(text),
        }
        if issue.severity != ValidationSeverity::Suggestion {
            if let Some(suggestion) = &issue.suggestion {
                self.add_suggestion(suggestion.clone());
            }
        }
    }

    /// Record hard failure
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.valid = false;
    }

    /// Record advisory finding
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record optional improvement
    pub fn add_suggestion(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    /// Append another report's findings
    pub fn merge(&mut self, other: &Self) {
        self.errors.extend(other.errors.iter().cloned());
        self.warnings.extend(other.warnings.iter().cloned());
        self.suggestions.extend(other.suggestions.iter().cloned());
        self.valid = self.errors.is_empty();
        self.last_checked = self.last_checked.max(other.last_checked);
    }

    /// Counts of findings
    #[must_use]
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            errors: self.errors.len(),
            warnings: self.warnings.len(),
            suggestions: self.suggestions.len(),
        }
    }

    /// Whether the report has neither errors nor warnings
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(ValidationSeverity::Error > ValidationSeverity::Warning);
        assert!(ValidationSeverity::Warning > ValidationSeverity::Suggestion);
    }

    #[test]
    fn warnings_do_not_affect_validity() {
        let issues = [
            ValidationIssue::warning("font", "Big", "font.size", "Very large"),
            ValidationIssue::warning("naming", "Big", "name", "Too long")
                .with_suggestion("Shorten the name"),
        ];
        let report = StyleValidation::from_issues(&issues, Timestamp::from_millis(5));
        assert!(report.valid);
        assert_eq!(
            report.summary(),
            ValidationSummary {
                errors: 0,
                warnings: 2,
                suggestions: 1
            }
        );
        assert_eq!(report.last_checked.as_millis(), 5);
    }

    #[test]
    fn errors_invalidate() {
        let mut report = StyleValidation::new();
        report.push(&ValidationIssue::error("font", "Neg", "font.size", "Negative"));
        assert!(!report.valid);
        assert_eq!(report.errors[0], "[Neg] font.size: Negative");
    }

    #[test]
    fn related_styles_are_concerned() {
        let issue = ValidationIssue::error("inheritance", "A", "basedOn", "cycle")
            .with_related(["A", "B"]);
        assert!(issue.concerns("A"));
        assert!(issue.concerns("B"));
        assert!(!issue.concerns("C"));
    }

    #[test]
    fn merge_recomputes_validity() {
        let mut aggregate = StyleValidation::new();
        let mut failing = StyleValidation::new();
        failing.add_error("broken");
        aggregate.merge(&failing);
        assert!(!aggregate.valid);
        assert_eq!(aggregate.errors.len(), 1);
    }
}
