//! Document themes
//!
//! A theme supplies a heading (major) font, a body (minor) font and named
//! color slots. Resolved properties may refer to these indirectly; theme
//! substitution replaces the references with concrete values.

use super::StyleProperties;
use alloc::{collections::BTreeMap, string::String};

/// Prefix marking a color value as a theme slot reference
pub const THEME_COLOR_PREFIX: &str = "theme:";

/// Theme with font and color schemes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeStyle {
    /// Theme name
    pub name: String,
    /// Font for headings
    pub major_font: Option<String>,
    /// Font for body text
    pub minor_font: Option<String>,
    /// Color slots (`accent1`, `dark1`, ...) to color values
    pub colors: BTreeMap<String, String>,
}

impl ThemeStyle {
    /// Create empty theme
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set major and minor fonts
    #[must_use]
    pub fn with_fonts(mut self, major: impl Into<String>, minor: impl Into<String>) -> Self {
        self.major_font = Some(major.into());
        self.minor_font = Some(minor.into());
        self
    }

    /// Define a color slot
    #[must_use]
    pub fn with_color(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(slot.into(), value.into());
        self
    }

    /// Concrete font for a theme font reference
    ///
    /// Recognizes `+mj-lt`/`major` and `+mn-lt`/`minor`.
    #[must_use]
    pub fn resolve_font(&self, reference: &str) -> Option<&str> {
        match reference {
            "+mj-lt" | "major" => self.major_font.as_deref(),
            "+mn-lt" | "minor" => self.minor_font.as_deref(),
            _ => None,
        }
    }

    /// Concrete color for a `theme:<slot>` reference
    #[must_use]
    pub fn resolve_color(&self, reference: &str) -> Option<&str> {
        let slot = reference.strip_prefix(THEME_COLOR_PREFIX)?;
        self.colors.get(slot).map(String::as_str)
    }

    /// Replace theme references in `properties`
    ///
    /// Unknown references are left unchanged. Returns the number of
    /// substituted values.
    pub fn apply(&self, properties: &mut StyleProperties) -> usize {
        let mut substituted = 0;

        if let Some(font) = properties.font.name.as_mut() {
            if let Some(concrete) = self.resolve_font(font) {
                *font = String::from(concrete);
                substituted += 1;
            }
        }

        for color in properties.colors_mut().flatten() {
            if let Some(concrete) = self.resolve_color(color) {
                *color = String::from(concrete);
                substituted += 1;
            }
        }

        substituted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn office() -> ThemeStyle {
        ThemeStyle::new("Office")
            .with_fonts("Calibri Light", "Calibri")
            .with_color("accent1", "#4472C4")
            .with_color("dark1", "#000000")
    }

    #[test]
    fn font_references() {
        let theme = office();
        assert_eq!(theme.resolve_font("+mj-lt"), Some("Calibri Light"));
        assert_eq!(theme.resolve_font("minor"), Some("Calibri"));
        assert_eq!(theme.resolve_font("Arial"), None);
    }

    #[test]
    fn apply_substitutes_references() {
        let theme = office();
        let mut props = StyleProperties::default();
        props.font.name = Some("+mn-lt".to_string());
        props.font.color = Some("theme:accent1".to_string());
        props.paragraph.borders.bottom.color = Some("theme:dark1".to_string());
        props.table.shading = Some("theme:accent9".to_string());

        assert_eq!(theme.apply(&mut props), 3);
        assert_eq!(props.font.name.as_deref(), Some("Calibri"));
        assert_eq!(props.font.color.as_deref(), Some("#4472C4"));
        assert_eq!(props.paragraph.borders.bottom.color.as_deref(), Some("#000000"));
        assert_eq!(props.table.shading.as_deref(), Some("theme:accent9"));
    }
}
