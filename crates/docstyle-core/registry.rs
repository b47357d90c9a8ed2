//! In-memory style registry
//!
//! Holds the style records of one document or template, keyed by id, plus
//! themes, the derived `basedOn` tree, accumulated conflicts and the
//! aggregate validation report. The registry is an owned value passed
//! explicitly to each analysis pass; nothing here is shared between
//! documents.
//!
//! # Example
//!
//! ```rust
//! use docstyle_core::{AdvancedStyle, StyleRegistry, StyleType};
//!
//! let mut registry = StyleRegistry::new();
//! registry.insert(AdvancedStyle::new("Normal", StyleType::Paragraph))?;
//! registry.insert(AdvancedStyle::new("Heading1", StyleType::Paragraph).with_based_on("Normal"))?;
//!
//! let children: Vec<_> = registry.children("Normal").collect();
//! assert_eq!(children, ["Heading1"]);
//! # Ok::<(), docstyle_core::CoreError>(())
//! ```

use crate::{
    model::{AdvancedStyle, StyleConflict, StyleType, StyleValidation, ThemeStyle},
    utils::CoreError,
    Result,
};
use alloc::{
    collections::{BTreeMap, BTreeSet},
    string::String,
    vec::Vec,
};

/// Style records of one document with derived inheritance data
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleRegistry {
    /// Styles by unique id
    styles: BTreeMap<String, AdvancedStyle>,
    /// Parent id to direct children ids; parents need not exist
    tree: BTreeMap<String, BTreeSet<String>>,
    /// Themes by name
    themes: BTreeMap<String, ThemeStyle>,
    /// Accumulated conflicts
    conflicts: Vec<StyleConflict>,
    /// Aggregate validation report
    validation: StyleValidation,
}

impl StyleRegistry {
    /// Create empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry from decoded styles
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateStyle`] if two styles share an id.
    pub fn from_styles<I>(styles: I) -> Result<Self>
    where
        I: IntoIterator<Item = AdvancedStyle>,
    {
        let mut registry = Self::new();
        for style in styles {
            registry.insert(style)?;
        }
        Ok(registry)
    }

    /// Insert a new style
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateStyle`] if the id is already registered.
    pub fn insert(&mut self, style: AdvancedStyle) -> Result<()> {
        if self.styles.contains_key(&style.id) {
            return Err(CoreError::duplicate_style(&style.id));
        }
        self.upsert(style);
        Ok(())
    }

    /// Insert or replace a style, returning the replaced record
    pub fn upsert(&mut self, style: AdvancedStyle) -> Option<AdvancedStyle> {
        if let Some(parent) = style.parent() {
            self.tree
                .entry(String::from(parent))
                .or_default()
                .insert(style.id.clone());
        }
        let id = style.id.clone();
        let previous = self.styles.insert(style.id.clone(), style);
        if let Some(old_parent) = previous.as_ref().and_then(AdvancedStyle::parent) {
            let still_linked = self
                .styles
                .get(&id)
                .and_then(AdvancedStyle::parent)
                .is_some_and(|parent| parent == old_parent);
            if !still_linked {
                self.unlink_child(old_parent, &id);
            }
        }
        previous
    }

    /// Remove a style and its tree edges
    pub fn remove(&mut self, id: &str) -> Option<AdvancedStyle> {
        let removed = self.styles.remove(id)?;
        if let Some(parent) = removed.parent() {
            self.unlink_child(parent, id);
        }
        Some(removed)
    }

    fn unlink_child(&mut self, parent: &str, child: &str) {
        if let Some(children) = self.tree.get_mut(parent) {
            children.remove(child);
            if children.is_empty() {
                self.tree.remove(parent);
            }
        }
    }

    /// Style by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AdvancedStyle> {
        self.styles.get(id)
    }

    /// Mutable style by id
    ///
    /// Call [`rebuild_tree`](Self::rebuild_tree) after changing `basedOn`.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut AdvancedStyle> {
        self.styles.get_mut(id)
    }

    /// Style by id, failing when absent
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::StyleNotFound`] if no style has this id.
    pub fn get_required(&self, id: &str) -> Result<&AdvancedStyle> {
        self.get(id).ok_or_else(|| CoreError::style_not_found(id))
    }

    /// Whether a style with this id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.styles.contains_key(id)
    }

    /// Number of styles
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the registry has no styles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Styles in id order
    pub fn styles(&self) -> impl Iterator<Item = &AdvancedStyle> {
        self.styles.values()
    }

    /// Mutable styles in id order
    pub fn styles_mut(&mut self) -> impl Iterator<Item = &mut AdvancedStyle> {
        self.styles.values_mut()
    }

    /// Style ids in order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Styles of one kind, in id order
    pub fn styles_of_type(&self, style_type: StyleType) -> impl Iterator<Item = &AdvancedStyle> {
        self.styles
            .values()
            .filter(move |style| style.style_type == Some(style_type))
    }

    /// Styles whose display name equals `name`
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AdvancedStyle> {
        self.styles.values().filter(move |style| style.name == name)
    }

    /// Register a theme, returning any theme it replaced
    pub fn add_theme(&mut self, theme: ThemeStyle) -> Option<ThemeStyle> {
        self.themes.insert(theme.name.clone(), theme)
    }

    /// Theme by name
    #[must_use]
    pub fn theme(&self, name: &str) -> Option<&ThemeStyle> {
        self.themes.get(name)
    }

    /// Themes in name order
    pub fn themes(&self) -> impl Iterator<Item = &ThemeStyle> {
        self.themes.values()
    }

    /// Accumulated conflicts
    #[must_use]
    pub fn conflicts(&self) -> &[StyleConflict] {
        &self.conflicts
    }

    /// Append conflicts, annotating each involved style
    ///
    /// Conflicts already recorded are skipped, so re-running detection does
    /// not duplicate entries.
    pub fn record_conflicts<'a, I>(&mut self, conflicts: I)
    where
        I: IntoIterator<Item = &'a StyleConflict>,
    {
        for conflict in conflicts {
            if self.conflicts.contains(conflict) {
                continue;
            }
            for id in &conflict.styles {
                if let Some(style) = self.styles.get_mut(id) {
                    style.conflicts.push(conflict.clone());
                }
            }
            self.conflicts.push(conflict.clone());
        }
    }

    /// Drop recorded conflicts, including per-style annotations
    pub fn clear_conflicts(&mut self) {
        self.conflicts.clear();
        for style in self.styles.values_mut() {
            style.conflicts.clear();
        }
    }

    /// Aggregate validation report
    #[must_use]
    pub const fn validation(&self) -> &StyleValidation {
        &self.validation
    }

    /// Replace aggregate validation report
    pub fn set_validation(&mut self, validation: StyleValidation) {
        self.validation = validation;
    }

    /// Recompute the `basedOn` tree from the current records
    pub fn rebuild_tree(&mut self) {
        self.tree.clear();
        for style in self.styles.values() {
            if let Some(parent) = style.parent() {
                self.tree
                    .entry(String::from(parent))
                    .or_default()
                    .insert(style.id.clone());
            }
        }
    }

    /// Direct children of `id` in the `basedOn` tree
    pub fn children<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> {
        self.tree
            .get(id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Whether the tree records any child for `id`
    #[must_use]
    pub fn has_children(&self, id: &str) -> bool {
        self.tree.contains_key(id)
    }
}
