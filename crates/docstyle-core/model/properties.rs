//! Formatting property bag carried by every style
//!
//! Properties are grouped by concern (font, paragraph, list, table, page,
//! section, visual). Every field is an `Option` so absence is visible in the
//! type system, while [`MergePolicy::ZeroIsUnset`] keeps the compatible
//! behaviour where a field holding its type's zero value counts as unset.
//!
//! # Example
//!
//! ```rust
//! use docstyle_core::model::{Inherit, MergePolicy, StyleProperties};
//!
//! let mut parent = StyleProperties::default();
//! parent.font.size = Some(12.0);
//! parent.font.color = Some("#000000".into());
//!
//! let mut child = StyleProperties::default();
//! child.font.size = Some(0.0);
//! child.font.color = Some("#FF0000".into());
//!
//! child.inherit_from(&parent, MergePolicy::ZeroIsUnset);
//! assert_eq!(child.font.size, Some(12.0));
//! assert_eq!(child.font.color.as_deref(), Some("#FF0000"));
//! ```

use alloc::{string::String, vec::Vec};

/// Zero value of a property type, overloaded as "not set"
pub trait Sentinel {
    /// Whether this value equals the type's zero value
    fn is_sentinel(&self) -> bool;
}

impl Sentinel for String {
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

impl Sentinel for f64 {
    fn is_sentinel(&self) -> bool {
        *self == 0.0
    }
}

impl Sentinel for u32 {
    fn is_sentinel(&self) -> bool {
        *self == 0
    }
}

impl Sentinel for bool {
    fn is_sentinel(&self) -> bool {
        !*self
    }
}

impl<T> Sentinel for Vec<T> {
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

/// Rule deciding when a child field is filled from an ancestor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MergePolicy {
    /// Absent fields and fields holding their zero value both inherit
    #[default]
    ZeroIsUnset,
    /// Only absent fields inherit; an explicit zero is kept
    ExplicitOnly,
}

impl MergePolicy {
    /// Whether a field counts as set under this policy
    #[must_use]
    pub fn is_set<T: Sentinel>(self, value: &Option<T>) -> bool {
        match (self, value) {
            (_, None) => false,
            (Self::ZeroIsUnset, Some(v)) => !v.is_sentinel(),
            (Self::ExplicitOnly, Some(_)) => true,
        }
    }

    /// Fill `child` from `parent` when the child is unset and the parent is set
    pub fn inherit<T: Sentinel + Clone>(self, child: &mut Option<T>, parent: &Option<T>) {
        if !self.is_set(child) && self.is_set(parent) {
            child.clone_from(parent);
        }
    }
}

/// Field-by-field inheritance from an ancestor's property group
pub trait Inherit {
    /// Fill every unset field of `self` from `parent`
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy);
}

macro_rules! inherit_fields {
    ($child:ident, $parent:ident, $policy:ident; $($field:ident),+ $(,)?) => {
        $( $policy.inherit(&mut $child.$field, &$parent.$field); )+
    };
}

macro_rules! inherit_groups {
    ($child:ident, $parent:ident, $policy:ident; $($group:ident),+ $(,)?) => {
        $( $child.$group.inherit_from(&$parent.$group, $policy); )+
    };
}

/// Font attributes
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontProperties {
    /// Font family name
    pub name: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Text color (`#RRGGBB` or `rgb(...)`)
    pub color: Option<String>,
    /// Bold
    pub bold: Option<bool>,
    /// Italic
    pub italic: Option<bool>,
    /// Underline
    pub underline: Option<bool>,
    /// Highlight color
    pub highlight: Option<String>,
}

impl Inherit for FontProperties {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_fields!(self, parent, policy; name, size, color, bold, italic, underline, highlight);
    }
}

/// One border edge
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BorderLine {
    /// Line style (`single`, `double`, `dashed`, ...)
    pub style: Option<String>,
    /// Line width in points
    pub width: Option<f64>,
    /// Line color
    pub color: Option<String>,
}

impl Inherit for BorderLine {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_fields!(self, parent, policy; style, width, color);
    }
}

/// Four border edges
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Borders {
    /// Top edge
    pub top: BorderLine,
    /// Bottom edge
    pub bottom: BorderLine,
    /// Left edge
    pub left: BorderLine,
    /// Right edge
    pub right: BorderLine,
}

impl Inherit for Borders {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_groups!(self, parent, policy; top, bottom, left, right);
    }
}

/// Four-sided lengths, used for margins and cell padding
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Edges {
    /// Top length
    pub top: Option<f64>,
    /// Bottom length
    pub bottom: Option<f64>,
    /// Left length
    pub left: Option<f64>,
    /// Right length
    pub right: Option<f64>,
}

impl Edges {
    /// Iterate sides with their names, skipping absent ones
    pub fn sides(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ]
        .into_iter()
        .filter_map(|(side, value)| value.map(|v| (side, v)))
    }
}

impl Inherit for Edges {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_fields!(self, parent, policy; top, bottom, left, right);
    }
}

/// Paragraph layout attributes
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParagraphProperties {
    /// Horizontal alignment (`left`, `center`, `right`, `justify`)
    pub alignment: Option<String>,
    /// Left indentation
    pub indent_left: Option<f64>,
    /// Right indentation
    pub indent_right: Option<f64>,
    /// First-line indentation
    pub indent_first_line: Option<f64>,
    /// Space before the paragraph
    pub spacing_before: Option<f64>,
    /// Space after the paragraph
    pub spacing_after: Option<f64>,
    /// Line spacing
    pub line_spacing: Option<f64>,
    /// Paragraph borders
    pub borders: Borders,
    /// Background shading color
    pub shading: Option<String>,
}

impl Inherit for ParagraphProperties {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_fields!(
            self, parent, policy;
            alignment,
            indent_left,
            indent_right,
            indent_first_line,
            spacing_before,
            spacing_after,
            line_spacing,
            shading,
        );
        inherit_groups!(self, parent, policy; borders);
    }
}

/// List and numbering attributes
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListProperties {
    /// List kind (`bullet`, `decimal`, ...)
    pub list_type: Option<String>,
    /// Nesting level
    pub level: Option<u32>,
    /// Numbering definition reference
    pub numbering: Option<String>,
}

impl Inherit for ListProperties {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_fields!(self, parent, policy; list_type, level, numbering);
    }
}

/// Table attributes
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableProperties {
    /// Table borders
    pub borders: Borders,
    /// Background shading color
    pub shading: Option<String>,
    /// Cell padding
    pub cell_padding: Edges,
}

impl Inherit for TableProperties {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_fields!(self, parent, policy; shading);
        inherit_groups!(self, parent, policy; borders, cell_padding);
    }
}

/// Page geometry
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageProperties {
    /// Page width
    pub width: Option<f64>,
    /// Page height
    pub height: Option<f64>,
    /// Page margins
    pub margins: Edges,
    /// Number of text columns
    pub columns: Option<u32>,
}

impl Inherit for PageProperties {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_fields!(self, parent, policy; width, height, columns);
        inherit_groups!(self, parent, policy; margins);
    }
}

/// Section attributes
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SectionProperties {
    /// Section break kind (`nextPage`, `continuous`, ...)
    pub section_type: Option<String>,
    /// Section has a header
    pub has_header: Option<bool>,
    /// Section has a footer
    pub has_footer: Option<bool>,
}

impl Inherit for SectionProperties {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_fields!(self, parent, policy; section_type, has_header, has_footer);
    }
}

/// Generic visual attributes
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualProperties {
    /// Horizontal position
    pub position_x: Option<f64>,
    /// Vertical position
    pub position_y: Option<f64>,
    /// Rotation in degrees
    pub rotation: Option<f64>,
    /// Scale factor
    pub scale: Option<f64>,
    /// Opacity in `0.0..=1.0`
    pub opacity: Option<f64>,
    /// Named visual effects
    pub effects: Option<Vec<String>>,
}

impl Inherit for VisualProperties {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_fields!(self, parent, policy; position_x, position_y, rotation, scale, opacity, effects);
    }
}

/// Complete property bag of one style
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleProperties {
    /// Font attributes
    pub font: FontProperties,
    /// Paragraph attributes
    pub paragraph: ParagraphProperties,
    /// List attributes
    pub list: ListProperties,
    /// Table attributes
    pub table: TableProperties,
    /// Page attributes
    pub page: PageProperties,
    /// Section attributes
    pub section: SectionProperties,
    /// Visual attributes
    pub visual: VisualProperties,
}

impl Inherit for StyleProperties {
    fn inherit_from(&mut self, parent: &Self, policy: MergePolicy) {
        inherit_groups!(self, parent, policy; font, paragraph, list, table, page, section, visual);
    }
}

impl StyleProperties {
    /// Layer `overrides` on top of these properties
    ///
    /// Fields set in `overrides` win; everything else comes from `self`.
    #[must_use]
    pub fn overlaid_with(&self, overrides: &Self, policy: MergePolicy) -> Self {
        let mut merged = overrides.clone();
        merged.inherit_from(self, policy);
        merged
    }

    /// Mutable references to every color-valued field
    pub fn colors_mut(&mut self) -> impl Iterator<Item = &mut Option<String>> + '_ {
        let Self {
            font,
            paragraph,
            table,
            ..
        } = self;

        [
            &mut font.color,
            &mut font.highlight,
            &mut paragraph.shading,
            &mut table.shading,
        ]
        .into_iter()
        .chain(border_colors(&mut paragraph.borders))
        .chain(border_colors(&mut table.borders))
    }
}

fn border_colors(borders: &mut Borders) -> [&mut Option<String>; 4] {
    let Borders {
        top,
        bottom,
        left,
        right,
    } = borders;
    [
        &mut top.color,
        &mut bottom.color,
        &mut left.color,
        &mut right.color,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};

    #[test]
    fn zero_is_unset_fills_zero_fields() {
        let mut child = FontProperties {
            size: Some(0.0),
            bold: Some(false),
            ..FontProperties::default()
        };
        let parent = FontProperties {
            size: Some(11.0),
            bold: Some(true),
            ..FontProperties::default()
        };

        child.inherit_from(&parent, MergePolicy::ZeroIsUnset);
        assert_eq!(child.size, Some(11.0));
        assert_eq!(child.bold, Some(true));
    }

    #[test]
    fn explicit_only_keeps_zero_fields() {
        let mut child = FontProperties {
            size: Some(0.0),
            ..FontProperties::default()
        };
        let parent = FontProperties {
            size: Some(11.0),
            name: Some("Calibri".to_string()),
            ..FontProperties::default()
        };

        child.inherit_from(&parent, MergePolicy::ExplicitOnly);
        assert_eq!(child.size, Some(0.0));
        assert_eq!(child.name.as_deref(), Some("Calibri"));
    }

    #[test]
    fn unset_parent_value_is_not_copied() {
        let mut child = FontProperties::default();
        let parent = FontProperties {
            color: Some(String::new()),
            ..FontProperties::default()
        };

        child.inherit_from(&parent, MergePolicy::ZeroIsUnset);
        assert_eq!(child.color, None);
    }

    #[test]
    fn nested_groups_inherit() {
        let mut child = StyleProperties::default();
        child.table.borders.top.style = Some("double".to_string());

        let mut parent = StyleProperties::default();
        parent.table.borders.top.style = Some("single".to_string());
        parent.table.borders.top.width = Some(0.5);
        parent.page.margins.left = Some(72.0);
        parent.visual.effects = Some(vec!["shadow".to_string()]);

        child.inherit_from(&parent, MergePolicy::ZeroIsUnset);
        assert_eq!(child.table.borders.top.style.as_deref(), Some("double"));
        assert_eq!(child.table.borders.top.width, Some(0.5));
        assert_eq!(child.page.margins.left, Some(72.0));
        assert_eq!(child.visual.effects.as_deref().map(<[_]>::len), Some(1));
    }

    #[test]
    fn overlay_prefers_overrides() {
        let mut base = StyleProperties::default();
        base.font.name = Some("Calibri".to_string());
        base.font.size = Some(11.0);

        let mut overrides = StyleProperties::default();
        overrides.font.bold = Some(true);
        overrides.font.size = Some(14.0);

        let merged = base.overlaid_with(&overrides, MergePolicy::ZeroIsUnset);
        assert_eq!(merged.font.name.as_deref(), Some("Calibri"));
        assert_eq!(merged.font.size, Some(14.0));
        assert_eq!(merged.font.bold, Some(true));
    }

    #[test]
    fn color_fields_are_enumerated() {
        let mut props = StyleProperties::default();
        props.font.color = Some("theme:accent1".to_string());
        props.table.borders.left.color = Some("theme:dark1".to_string());

        let count = props.colors_mut().filter(|color| color.is_some()).count();
        assert_eq!(count, 2);
    }

    #[test]
    fn edge_sides_skip_absent() {
        let edges = Edges {
            top: Some(1.0),
            right: Some(-2.0),
            ..Edges::default()
        };
        let sides: Vec<_> = edges.sides().collect();
        assert_eq!(sides, vec![("top", 1.0), ("right", -2.0)]);
    }
}
