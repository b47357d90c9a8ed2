//! Rule-based style validation
//!
//! Runs a battery of [`ValidationRule`]s over a registry and folds their
//! findings into [`StyleValidation`] reports. Errors make a report invalid;
//! warnings and suggestions never do.
//!
//! # Built-in Rules
//!
//! - Completeness: required id and kind, display name
//! - Inheritance: cycles, dangling references, deep chains
//! - Naming: invalid characters and overlong names
//! - Property ranges: font, paragraph, table and page values
//! - Cross-property: combinations that rarely make sense together
//! - Type consistency: styles of one kind that disagree on a key property
//!
//! Rules run on whatever registry they are given. Validating a resolved
//! registry checks effective values; validating a raw one checks what the
//! decoder produced.
//!
//! # Example
//!
//! ```rust
//! use docstyle_core::{AdvancedStyle, StyleRegistry, StyleType, Validator};
//!
//! let registry = StyleRegistry::from_styles([
//!     AdvancedStyle::new("A", StyleType::Paragraph).with_based_on("B"),
//!     AdvancedStyle::new("B", StyleType::Paragraph).with_based_on("A"),
//! ])?;
//!
//! let report = Validator::new().validate(&registry);
//! assert!(!report.valid);
//! assert_eq!(report.errors.len(), 1);
//! # Ok::<(), docstyle_core::CoreError>(())
//! ```

use crate::{
    analysis::AnalysisConfig,
    model::{AdvancedStyle, MergePolicy, StyleValidation, Timestamp, ValidationIssue},
    utils::ErrorCategory,
    StyleRegistry,
};
use alloc::{boxed::Box, string::String, vec::Vec};
use log::debug;

pub mod rules;

pub use rules::BuiltinRules;

/// Limits used by the built-in rules
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationThresholds {
    /// Longest inheritance chain before a warning
    pub max_inheritance_depth: usize,
    /// Largest font size before a warning
    pub max_font_size: f64,
    /// Longest display name before a warning
    pub max_name_length: usize,
    /// Fewest page columns
    pub min_columns: u32,
    /// Most page columns
    pub max_columns: u32,
    /// Largest combined spacing before and after a paragraph
    pub max_combined_spacing: f64,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            max_inheritance_depth: 10,
            max_font_size: 1000.0,
            max_name_length: 50,
            min_columns: 1,
            max_columns: 10,
            max_combined_spacing: 100.0,
        }
    }
}

/// Everything a rule may consult besides the registry
#[derive(Debug)]
pub struct ValidationContext<'a> {
    /// Registry under validation
    pub registry: &'a StyleRegistry,
    /// Active limits
    pub thresholds: &'a ValidationThresholds,
    /// Distinct `basedOn` cycles, computed once per run
    pub cycles: &'a [Vec<String>],
    /// Policy deciding which fields count as set
    pub policy: MergePolicy,
    /// Attach extra suggestions to findings
    pub strict: bool,
}

/// A single validation check
///
/// Implement [`check_style`](Self::check_style) for per-style checks, or
/// override [`check`](Self::check) for checks across styles.
pub trait ValidationRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Rule description
    fn description(&self) -> &'static str;

    /// Error class of the findings this rule produces
    fn category(&self) -> ErrorCategory;

    /// Check one style
    fn check_style(
        &self,
        _style: &AdvancedStyle,
        _ctx: &ValidationContext<'_>,
        _issues: &mut Vec<ValidationIssue>,
    ) {
    }

    /// Check the whole registry
    fn check(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for style in ctx.registry.styles() {
            self.check_style(style, ctx, &mut issues);
        }
        issues
    }
}

/// Runs validation rules over a registry
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
    thresholds: ValidationThresholds,
    policy: MergePolicy,
    strict: bool,
}

impl core::fmt::Debug for Validator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rule_ids())
            .field("thresholds", &self.thresholds)
            .field("policy", &self.policy)
            .field("strict", &self.strict)
            .finish()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create validator with every built-in rule and default limits
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: BuiltinRules::all_rules(),
            thresholds: ValidationThresholds::default(),
            policy: MergePolicy::default(),
            strict: false,
        }
    }

    /// Create validator honoring rule selection, limits and strictness
    #[must_use]
    pub fn with_config(config: &AnalysisConfig) -> Self {
        let rules = BuiltinRules::all_rules()
            .into_iter()
            .filter(|rule| config.is_rule_enabled(rule.id()))
            .collect();

        Self {
            rules,
            thresholds: config.thresholds.clone(),
            policy: config.merge_policy,
            strict: config.is_strict(),
        }
    }

    /// Add a custom rule
    #[must_use]
    pub fn with_rule(mut self, rule: Box<dyn ValidationRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Ids of active rules in run order
    #[must_use]
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Run every rule and collect findings in rule order
    #[must_use]
    pub fn issues(&self, registry: &StyleRegistry) -> Vec<ValidationIssue> {
        let cycles = registry.find_cycles();
        let ctx = ValidationContext {
            registry,
            thresholds: &self.thresholds,
            cycles: &cycles,
            policy: self.policy,
            strict: self.strict,
        };

        let mut issues = Vec::new();
        for rule in &self.rules {
            let found = rule.check(&ctx);
            debug!("rule '{}' found {} issues", rule.id(), found.len());
            issues.extend(found);
        }
        issues
    }

    /// Aggregate report for `registry`
    #[must_use]
    pub fn validate(&self, registry: &StyleRegistry) -> StyleValidation {
        StyleValidation::from_issues(&self.issues(registry), Timestamp::now())
    }

    /// Validate and store reports on the registry and each style
    ///
    /// Every style gets a fresh snapshot holding the findings that concern
    /// it; the aggregate report replaces the registry's and is returned.
    pub fn annotate(&self, registry: &mut StyleRegistry) -> StyleValidation {
        let issues = self.issues(registry);
        let checked_at = Timestamp::now();

        for style in registry.styles_mut() {
            let own = issues.iter().filter(|issue| issue.concerns(&style.id));
            style.validation = StyleValidation::from_issues(own, checked_at);
        }

        let report = StyleValidation::from_issues(&issues, checked_at);
        registry.set_validation(report.clone());
        report
    }
}

/// Run one rule over `registry` with default limits
#[cfg(test)]
pub(crate) fn run_rule(
    rule: &dyn ValidationRule,
    registry: &StyleRegistry,
    strict: bool,
) -> Vec<ValidationIssue> {
    let thresholds = ValidationThresholds::default();
    let cycles = registry.find_cycles();
    let ctx = ValidationContext {
        registry,
        thresholds: &thresholds,
        cycles: &cycles,
        policy: MergePolicy::default(),
        strict,
    };
    rule.check(&ctx)
}
