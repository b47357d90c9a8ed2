//! Style records as produced by format decoders
//!
//! An [`AdvancedStyle`] bundles identity, one [`StyleProperties`] bag, the
//! [`StyleInheritance`] references, conditional overrides, and the
//! per-style conflict and validation annotations written by the engine.

use super::{
    ConflictKind, Inherit, MergePolicy, StyleConflict, StyleProperties, StyleValidation, Timestamp,
};
use crate::utils::CoreError;
use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

/// Closed set of style kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StyleType {
    /// Applied to whole paragraphs
    Paragraph,
    /// Applied to text runs
    Character,
    /// Applied to tables
    Table,
    /// List and numbering definitions
    List,
    /// Page geometry
    Page,
    /// Section layout
    Section,
    /// Theme-level defaults
    Theme,
    /// Conditional formatting
    Condition,
}

impl StyleType {
    /// Every style kind, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Paragraph,
        Self::Character,
        Self::Table,
        Self::List,
        Self::Page,
        Self::Section,
        Self::Theme,
        Self::Condition,
    ];

    /// Lowercase name of the kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
            Self::Table => "table",
            Self::List => "list",
            Self::Page => "page",
            Self::Section => "section",
            Self::Theme => "theme",
            Self::Condition => "condition",
        }
    }
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "paragraph" => Self::Paragraph,
            "character" => Self::Character,
            "table" => Self::Table,
            "list" | "numbering" => Self::List,
            "page" => Self::Page,
            "section" => Self::Section,
            "theme" => Self::Theme,
            "condition" | "conditional" => Self::Condition,
            _ => return Err(CoreError::invalid_style_type(s)),
        };
        Ok(kind)
    }
}

/// Reference fields of [`StyleInheritance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceField {
    /// Parent style; the only edge that participates in merging
    BasedOn,
    /// Style applied to the following block
    Next,
    /// Paired style (paragraph and character)
    Linked,
}

impl ReferenceField {
    /// Field name as it appears in decoded documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BasedOn => "basedOn",
            Self::Next => "next",
            Self::Linked => "linked",
        }
    }
}

impl fmt::Display for ReferenceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inheritance metadata of one style
///
/// Empty strings are treated the same as absent references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleInheritance {
    /// Parent style id
    pub based_on: Option<String>,
    /// Style for the following block
    pub next: Option<String>,
    /// Paired style id
    pub linked: Option<String>,
    /// UI ordering priority
    pub priority: u32,
    /// Hidden from style pickers
    pub hidden: bool,
    /// Shown in the quick style gallery
    pub quick_format: bool,
}

impl StyleInheritance {
    /// Non-empty `basedOn` reference
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        non_empty(self.based_on.as_deref())
    }

    /// Non-empty `next` reference
    #[must_use]
    pub fn next_style(&self) -> Option<&str> {
        non_empty(self.next.as_deref())
    }

    /// Non-empty `linked` reference
    #[must_use]
    pub fn linked_style(&self) -> Option<&str> {
        non_empty(self.linked.as_deref())
    }

    /// Non-empty reference held by `field`
    #[must_use]
    pub fn reference(&self, field: ReferenceField) -> Option<&str> {
        match field {
            ReferenceField::BasedOn => self.parent(),
            ReferenceField::Next => self.next_style(),
            ReferenceField::Linked => self.linked_style(),
        }
    }

    /// All non-empty references with their field
    pub fn references(&self) -> impl Iterator<Item = (ReferenceField, &str)> {
        [
            ReferenceField::BasedOn,
            ReferenceField::Next,
            ReferenceField::Linked,
        ]
        .into_iter()
        .filter_map(|field| self.reference(field).map(|id| (field, id)))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|id| !id.is_empty())
}

/// Table region a conditional override applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionKind {
    /// Entire table
    WholeTable,
    /// Header row
    FirstRow,
    /// Total row
    LastRow,
    /// First column
    FirstColumn,
    /// Last column
    LastColumn,
    /// Odd banded rows
    OddRowBand,
    /// Even banded rows
    EvenRowBand,
    /// Odd banded columns
    OddColumnBand,
    /// Even banded columns
    EvenColumnBand,
    /// Top-left corner cell
    TopLeftCell,
    /// Top-right corner cell
    TopRightCell,
    /// Bottom-left corner cell
    BottomLeftCell,
    /// Bottom-right corner cell
    BottomRightCell,
}

impl ConditionKind {
    /// WordprocessingML name of the condition
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WholeTable => "wholeTable",
            Self::FirstRow => "firstRow",
            Self::LastRow => "lastRow",
            Self::FirstColumn => "firstCol",
            Self::LastColumn => "lastCol",
            Self::OddRowBand => "band1Horz",
            Self::EvenRowBand => "band2Horz",
            Self::OddColumnBand => "band1Vert",
            Self::EvenColumnBand => "band2Vert",
            Self::TopLeftCell => "nwCell",
            Self::TopRightCell => "neCell",
            Self::BottomLeftCell => "swCell",
            Self::BottomRightCell => "seCell",
        }
    }
}

impl FromStr for ConditionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "wholeTable" => Self::WholeTable,
            "firstRow" => Self::FirstRow,
            "lastRow" => Self::LastRow,
            "firstCol" => Self::FirstColumn,
            "lastCol" => Self::LastColumn,
            "band1Horz" => Self::OddRowBand,
            "band2Horz" => Self::EvenRowBand,
            "band1Vert" => Self::OddColumnBand,
            "band2Vert" => Self::EvenColumnBand,
            "nwCell" => Self::TopLeftCell,
            "neCell" => Self::TopRightCell,
            "swCell" => Self::BottomLeftCell,
            "seCell" => Self::BottomRightCell,
            _ => return Err(CoreError::invalid_style_type(format_args!("condition {s}"))),
        };
        Ok(kind)
    }
}

/// Override applied when content falls in a table region
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalStyle {
    /// Region the override applies to
    pub kind: ConditionKind,
    /// Properties set for that region
    pub properties: StyleProperties,
}

impl ConditionalStyle {
    /// Create conditional override
    #[must_use]
    pub const fn new(kind: ConditionKind, properties: StyleProperties) -> Self {
        Self { kind, properties }
    }
}

/// A style record with identity, properties and inheritance metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvancedStyle {
    /// Unique style id
    pub id: String,
    /// Display name
    pub name: String,
    /// Style kind; `None` when the decoder could not determine it
    pub style_type: Option<StyleType>,
    /// Record version
    pub version: u32,
    /// Creation time
    pub created: Timestamp,
    /// Last modification time
    pub modified: Timestamp,
    /// Formatting properties
    pub properties: StyleProperties,
    /// Inheritance references
    pub inheritance: StyleInheritance,
    /// Conditional overrides
    pub conditionals: Vec<ConditionalStyle>,
    /// Conflicts this style participates in
    pub conflicts: Vec<StyleConflict>,
    /// Validation snapshot for this style
    pub validation: StyleValidation,
}

impl AdvancedStyle {
    /// Create a style whose display name defaults to its id
    pub fn new(id: impl Into<String>, style_type: StyleType) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            style_type: Some(style_type),
            version: 1,
            created: Timestamp::default(),
            modified: Timestamp::default(),
            properties: StyleProperties::default(),
            inheritance: StyleInheritance::default(),
            conditionals: Vec::new(),
            conflicts: Vec::new(),
            validation: StyleValidation::new(),
        }
    }

    /// Create a style whose kind the decoder could not determine
    pub fn untyped(id: impl Into<String>) -> Self {
        Self {
            style_type: None,
            ..Self::new(id, StyleType::Paragraph)
        }
    }

    /// Set display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set parent style
    #[must_use]
    pub fn with_based_on(mut self, parent: impl Into<String>) -> Self {
        self.inheritance.based_on = Some(parent.into());
        self
    }

    /// Set next style
    #[must_use]
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.inheritance.next = Some(next.into());
        self
    }

    /// Set linked style
    #[must_use]
    pub fn with_linked(mut self, linked: impl Into<String>) -> Self {
        self.inheritance.linked = Some(linked.into());
        self
    }

    /// Replace the property bag
    #[must_use]
    pub fn with_properties(mut self, properties: StyleProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Add conditional override
    #[must_use]
    pub fn with_conditional(mut self, conditional: ConditionalStyle) -> Self {
        self.conditionals.push(conditional);
        self
    }

    /// Set creation and modification times
    #[must_use]
    pub fn with_timestamps(mut self, created: Timestamp, modified: Timestamp) -> Self {
        self.created = created;
        self.modified = modified;
        self
    }

    /// Non-empty parent id
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.inheritance.parent()
    }

    /// Conditional override for `kind`, if declared
    #[must_use]
    pub fn conditional(&self, kind: ConditionKind) -> Option<&ConditionalStyle> {
        self.conditionals.iter().find(|c| c.kind == kind)
    }

    /// Properties in effect for content in region `kind`
    ///
    /// The matching conditional override, when present, is layered on top of
    /// this style's properties. Call on a resolved style to get fully
    /// inherited values.
    #[must_use]
    pub fn effective_properties(&self, kind: ConditionKind, policy: MergePolicy) -> StyleProperties {
        match self.conditional(kind) {
            Some(conditional) => self.properties.overlaid_with(&conditional.properties, policy),
            None => self.properties.clone(),
        }
    }

    /// Whether any recorded conflict of `kind` involves this style
    #[must_use]
    pub fn has_conflict(&self, kind: ConflictKind) -> bool {
        self.conflicts.iter().any(|c| c.kind == kind)
    }
}
