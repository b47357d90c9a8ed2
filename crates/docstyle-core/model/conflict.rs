//! Structural conflicts between styles

use super::{ReferenceField, ValidationSeverity};
use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

/// Types of style conflicts that can be detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictKind {
    /// Reference to a non-existent style
    MissingReference,
    /// Circular reference in `basedOn` chains
    CircularInheritance,
    /// Several ids share one display name
    DuplicateName,
    /// Related styles explicitly declare contradictory values
    PropertyConflict,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingReference => write!(f, "missing_reference"),
            Self::CircularInheritance => write!(f, "circular_inheritance"),
            Self::DuplicateName => write!(f, "duplicate_name"),
            Self::PropertyConflict => write!(f, "property_conflict"),
        }
    }
}

/// Ordering of conflicts for callers deciding what to fix first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictPriority {
    /// Advisory
    Low,
    /// Should be fixed
    Medium,
    /// Breaks inheritance
    High,
}

impl From<ReferenceField> for ConflictPriority {
    fn from(field: ReferenceField) -> Self {
        match field {
            ReferenceField::BasedOn => Self::High,
            ReferenceField::Next => Self::Medium,
            ReferenceField::Linked => Self::Low,
        }
    }
}

/// Conflict between two or more styles
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleConflict {
    /// Ids involved, deduplicated and sorted
    pub styles: Vec<String>,
    /// Type of conflict detected
    pub kind: ConflictKind,
    /// Human-readable resolution note
    pub resolution: String,
    /// Fix-first ordering
    pub priority: ConflictPriority,
    /// Whether a caller has marked the conflict handled
    pub resolved: bool,
}

impl StyleConflict {
    /// Create new style conflict
    pub fn new<I, S>(
        kind: ConflictKind,
        styles: I,
        resolution: impl Into<String>,
        priority: ConflictPriority,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut styles: Vec<String> = styles.into_iter().map(Into::into).collect();
        styles.sort_unstable();
        styles.dedup();

        Self {
            styles,
            kind,
            resolution: resolution.into(),
            priority,
            resolved: false,
        }
    }

    /// Create missing reference conflict naming both ids
    #[must_use]
    pub fn missing_reference(referencing: &str, field: ReferenceField, missing: &str) -> Self {
        let resolution = format!(
            "Style '{referencing}' has {field} '{missing}' which does not exist; \
             define '{missing}' or clear the reference"
        );
        Self::new(
            ConflictKind::MissingReference,
            [referencing, missing],
            resolution,
            field.into(),
        )
    }

    /// Create circular inheritance conflict
    #[must_use]
    pub fn circular_inheritance(cycle: &[String]) -> Self {
        let resolution = format!(
            "Circular basedOn chain through {}; clear basedOn on one of these styles",
            cycle.join(", ")
        );
        Self::new(
            ConflictKind::CircularInheritance,
            cycle.iter().map(String::as_str),
            resolution,
            ConflictPriority::High,
        )
    }

    /// Create duplicate display name conflict
    #[must_use]
    pub fn duplicate_name(name: &str, ids: &[&str]) -> Self {
        let resolution = format!(
            "Display name '{name}' is shared by {}; rename or merge them",
            ids.join(", ")
        );
        Self::new(
            ConflictKind::DuplicateName,
            ids.iter().copied(),
            resolution,
            ConflictPriority::Low,
        )
    }

    /// Create property conflict between two related styles
    #[must_use]
    pub fn property_conflict(first: &str, second: &str, field: &str) -> Self {
        let resolution = format!(
            "Styles '{first}' and '{second}' are linked but declare different {field}"
        );
        Self::new(
            ConflictKind::PropertyConflict,
            [first.to_string(), second.to_string()],
            resolution,
            ConflictPriority::Low,
        )
    }

    /// Severity of this conflict in a validation report
    ///
    /// Only a dangling `basedOn` (high priority) or a cycle is an error;
    /// dangling `next`/`linked`, naming and property conflicts are advisory.
    #[must_use]
    pub fn severity(&self) -> ValidationSeverity {
        match self.kind {
            ConflictKind::CircularInheritance => ValidationSeverity::Error,
            ConflictKind::MissingReference if self.priority == ConflictPriority::High => {
                ValidationSeverity::Error
            }
            ConflictKind::MissingReference
            | ConflictKind::DuplicateName
            | ConflictKind::PropertyConflict => ValidationSeverity::Warning,
        }
    }

    /// Whether `id` participates in this conflict
    #[must_use]
    pub fn involves(&self, id: &str) -> bool {
        self.styles.iter().any(|s| s == id)
    }

    /// Mark conflict handled
    pub fn mark_resolved(&mut self) {
        self.resolved = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn missing_reference_names_both_ids() {
        let conflict = StyleConflict::missing_reference("Child", ReferenceField::BasedOn, "Ghost");
        assert_eq!(conflict.kind, ConflictKind::MissingReference);
        assert_eq!(conflict.styles, vec!["Child".to_string(), "Ghost".to_string()]);
        assert_eq!(conflict.priority, ConflictPriority::High);
        assert!(conflict.resolution.contains("basedOn"));
        assert!(!conflict.resolved);
    }

    #[test]
    fn reference_field_priority_order() {
        let based_on = ConflictPriority::from(ReferenceField::BasedOn);
        let next = ConflictPriority::from(ReferenceField::Next);
        let linked = ConflictPriority::from(ReferenceField::Linked);
        assert!(based_on > next);
        assert!(next > linked);
    }

    #[test]
    fn dangling_next_and_linked_are_warnings() {
        let based_on = StyleConflict::missing_reference("Body", ReferenceField::BasedOn, "Gone");
        let next = StyleConflict::missing_reference("Body", ReferenceField::Next, "Gone");
        let linked = StyleConflict::missing_reference("Body", ReferenceField::Linked, "Gone");
        assert_eq!(based_on.severity(), ValidationSeverity::Error);
        assert_eq!(next.severity(), ValidationSeverity::Warning);
        assert_eq!(linked.severity(), ValidationSeverity::Warning);
    }

    #[test]
    fn resolved_flag_is_set_by_caller() {
        let mut conflict = StyleConflict::duplicate_name("Title", &["Title", "Title2"]);
        assert!(!conflict.resolved);
        conflict.mark_resolved();
        assert!(conflict.resolved);
    }

    #[test]
    fn duplicate_name_is_warning() {
        let conflict = StyleConflict::duplicate_name("Title", &["Title", "Title2"]);
        assert_eq!(conflict.severity(), ValidationSeverity::Warning);
        assert!(conflict.involves("Title2"));
    }

    #[test]
    fn ids_are_deduplicated() {
        let cycle = vec!["Loop".to_string()];
        let conflict = StyleConflict::circular_inheritance(&cycle);
        assert_eq!(conflict.styles.len(), 1);
        assert_eq!(conflict.severity(), ValidationSeverity::Error);
    }
}
