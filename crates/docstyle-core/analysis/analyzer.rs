//! Full analysis pass over a style registry
//!
//! [`StyleAnalysis`] runs the configured stages in order: inheritance
//! resolution, theme substitution, conflict detection and validation. Each
//! stage can be switched off through [`AnalysisOptions`]. The input registry
//! is never modified; the analysis owns the resolved copy.

use crate::{
    analysis::{
        conflicts::ConflictDetector,
        resolver::InheritanceResolver,
        validation::{ValidationThresholds, Validator},
    },
    model::{MergePolicy, StyleConflict, StyleValidation},
    utils::{CoreError, ResolutionError},
    Result, StyleRegistry,
};
use alloc::{string::String, vec::Vec};
use log::debug;

bitflags::bitflags! {
    /// Stages and modes of a [`StyleAnalysis`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AnalysisOptions: u8 {
        /// Resolve `basedOn` and linked inheritance
        const RESOLVE = 1 << 0;
        /// Detect conflicts between styles
        const CONFLICTS = 1 << 1;
        /// Run the validation rules
        const VALIDATION = 1 << 2;
        /// Substitute theme fonts and colors
        const THEME = 1 << 3;
        /// Attach fix suggestions to advisory findings
        const STRICT = 1 << 4;
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::RESOLVE | Self::CONFLICTS | Self::VALIDATION
    }
}

/// Configuration for a [`StyleAnalysis`] and the [`Validator`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// Enabled stages and modes
    pub options: AnalysisOptions,
    /// When a field counts as unset
    pub merge_policy: MergePolicy,
    /// Limits used by validation rules
    pub thresholds: ValidationThresholds,
    /// Rule ids to run (empty = all)
    pub enabled_rules: Vec<String>,
    /// Rule ids to skip
    pub disabled_rules: Vec<String>,
    /// Theme applied when [`AnalysisOptions::THEME`] is set
    pub theme: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            options: AnalysisOptions::default(),
            merge_policy: MergePolicy::default(),
            thresholds: ValidationThresholds::default(),
            enabled_rules: Vec::new(),
            disabled_rules: Vec::new(),
            theme: None,
        }
    }
}

impl AnalysisConfig {
    /// Set stages and modes
    #[must_use]
    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    /// Set merge policy
    #[must_use]
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    /// Set validation limits
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ValidationThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Run only these rules
    #[must_use]
    pub fn with_enabled_rules<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_rules = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Skip these rules
    #[must_use]
    pub fn with_disabled_rules<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_rules = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Apply the named theme after resolution
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self.options |= AnalysisOptions::THEME;
        self
    }

    /// Enable or disable strict suggestions
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.options.set(AnalysisOptions::STRICT, strict);
        self
    }

    /// Check if a rule is enabled
    #[must_use]
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.disabled_rules.iter().any(|id| id == rule_id) {
            return false;
        }
        self.enabled_rules.is_empty() || self.enabled_rules.iter().any(|id| id == rule_id)
    }

    /// Whether strict suggestions are on
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.options.contains(AnalysisOptions::STRICT)
    }
}

/// Outcome of analyzing one registry
#[derive(Debug, Clone, PartialEq)]
pub struct StyleAnalysis {
    registry: StyleRegistry,
    resolution_errors: Vec<ResolutionError>,
    cycles: Vec<Vec<String>>,
    substitutions: usize,
    conflicts: Vec<StyleConflict>,
    validation: StyleValidation,
}

impl StyleAnalysis {
    /// Analyze `registry` with `config`
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if theme substitution is requested
    /// without a theme name or with a theme the registry does not hold.
    pub fn analyze(registry: &StyleRegistry, config: &AnalysisConfig) -> Result<Self> {
        debug!(
            "analyzing {} styles with options {:?}",
            registry.len(),
            config.options
        );

        let theme = if config.options.contains(AnalysisOptions::THEME) {
            let name = config
                .theme
                .as_deref()
                .ok_or_else(|| CoreError::config("theme substitution enabled without a theme"))?;
            let theme = registry
                .theme(name)
                .ok_or_else(|| CoreError::config(format_args!("unknown theme '{name}'")))?;
            Some(theme.clone())
        } else {
            None
        };

        let (mut resolved, resolution_errors, cycles) =
            if config.options.contains(AnalysisOptions::RESOLVE) {
                let resolution = InheritanceResolver::new(config.merge_policy).resolve(registry);
                let cycles = resolution.cycles().to_vec();
                let (resolved, errors) = resolution.into_parts();
                (resolved, errors, cycles)
            } else {
                (registry.clone(), Vec::new(), registry.find_cycles())
            };

        let mut substitutions = 0;
        if let Some(theme) = &theme {
            for style in resolved.styles_mut() {
                substitutions += theme.apply(&mut style.properties);
            }
            debug!("theme '{}' substituted {substitutions} values", theme.name);
        }

        let conflicts = if config.options.contains(AnalysisOptions::CONFLICTS) {
            ConflictDetector::new(config.merge_policy).detect_and_record(&mut resolved)
        } else {
            Vec::new()
        };

        let validation = if config.options.contains(AnalysisOptions::VALIDATION) {
            Validator::with_config(config).annotate(&mut resolved)
        } else {
            StyleValidation::new()
        };

        debug!(
            "analysis finished: {} resolution errors, {} conflicts, {} validation errors",
            resolution_errors.len(),
            conflicts.len(),
            validation.errors.len()
        );

        Ok(Self {
            registry: resolved,
            resolution_errors,
            cycles,
            substitutions,
            conflicts,
            validation,
        })
    }

    /// Resolved and annotated registry
    #[must_use]
    pub const fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Take the resolved registry
    #[must_use]
    pub fn into_registry(self) -> StyleRegistry {
        self.registry
    }

    /// Per-style resolution failures
    #[must_use]
    pub fn resolution_errors(&self) -> &[ResolutionError] {
        &self.resolution_errors
    }

    /// Distinct `basedOn` cycles
    #[must_use]
    pub fn cycles(&self) -> &[Vec<String>] {
        &self.cycles
    }

    /// Number of theme references replaced
    #[must_use]
    pub const fn substitutions(&self) -> usize {
        self.substitutions
    }

    /// Conflicts found by this analysis
    #[must_use]
    pub fn conflicts(&self) -> &[StyleConflict] {
        &self.conflicts
    }

    /// Aggregate validation report
    #[must_use]
    pub const fn validation(&self) -> &StyleValidation {
        &self.validation
    }

    /// Whether validation found no errors
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.validation.valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AdvancedStyle, StyleProperties, StyleType, ThemeStyle};

    fn sample() -> StyleRegistry {
        let mut normal = StyleProperties::default();
        normal.font.name = Some("+mn-lt".into());
        normal.font.color = Some("theme:text1".into());

        let mut registry = StyleRegistry::from_styles([
            AdvancedStyle::new("Normal", StyleType::Paragraph).with_properties(normal),
            AdvancedStyle::new("Heading1", StyleType::Paragraph).with_based_on("Normal"),
        ])
        .unwrap();
        registry.add_theme(
            ThemeStyle::new("Office")
                .with_fonts("Calibri Light", "Calibri")
                .with_color("text1", "#000000"),
        );
        registry
    }

    #[test]
    fn rule_filters() {
        let config = AnalysisConfig::default()
            .with_enabled_rules(["font", "naming"])
            .with_disabled_rules(["naming"]);
        assert!(config.is_rule_enabled("font"));
        assert!(!config.is_rule_enabled("naming"));
        assert!(!config.is_rule_enabled("page"));
        assert!(AnalysisConfig::default().is_rule_enabled("page"));
    }

    #[test]
    fn theme_applied_after_resolution() {
        let config = AnalysisConfig::default().with_theme("Office");
        let analysis = StyleAnalysis::analyze(&sample(), &config).unwrap();

        let heading = analysis.registry().get("Heading1").unwrap();
        assert_eq!(heading.properties.font.name.as_deref(), Some("Calibri"));
        assert_eq!(heading.properties.font.color.as_deref(), Some("#000000"));
        assert_eq!(analysis.substitutions(), 4);
        assert!(analysis.is_valid());
    }

    #[test]
    fn unknown_theme_is_config_error() {
        let config = AnalysisConfig::default().with_theme("Missing");
        let err = StyleAnalysis::analyze(&sample(), &config).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));

        let no_name = AnalysisConfig::default().with_options(AnalysisOptions::THEME);
        assert!(StyleAnalysis::analyze(&sample(), &no_name).is_err());
    }

    #[test]
    fn stages_can_be_disabled() {
        let registry =
            StyleRegistry::from_styles([AdvancedStyle::new("Orphan", StyleType::Paragraph)
                .with_based_on("Ghost")])
            .unwrap();

        let config = AnalysisConfig::default().with_options(AnalysisOptions::RESOLVE);
        let analysis = StyleAnalysis::analyze(&registry, &config).unwrap();
        assert_eq!(analysis.resolution_errors().len(), 1);
        assert!(analysis.conflicts().is_empty());
        assert!(analysis.is_valid());

        let full = StyleAnalysis::analyze(&registry, &AnalysisConfig::default()).unwrap();
        assert_eq!(full.conflicts().len(), 1);
        assert!(!full.is_valid());
    }
}
