//! Structural conflict detection
//!
//! Scans a registry for problems between styles rather than within one:
//! dangling references, `basedOn` cycles, shared display names and linked
//! styles that disagree on their font.

use crate::{
    model::{MergePolicy, ReferenceField, StyleConflict},
    StyleRegistry,
};
use alloc::{
    collections::{BTreeMap, BTreeSet},
    vec::Vec,
};
use log::debug;

/// Finds conflicts between styles of a registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConflictDetector {
    policy: MergePolicy,
}

impl ConflictDetector {
    /// Create detector using `policy` to decide which fields are set
    #[must_use]
    pub const fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    /// Collect every conflict in `registry`
    ///
    /// Missing references come first, ordered by style id and field, then
    /// cycles, duplicate names and linked property mismatches.
    #[must_use]
    pub fn detect(&self, registry: &StyleRegistry) -> Vec<StyleConflict> {
        let mut conflicts = Vec::new();

        for style in registry.styles() {
            for (field, target) in style.inheritance.references() {
                if !registry.contains(target) {
                    conflicts.push(StyleConflict::missing_reference(&style.id, field, target));
                }
            }
        }

        conflicts.extend(
            registry
                .find_cycles()
                .iter()
                .map(|cycle| StyleConflict::circular_inheritance(cycle)),
        );

        let mut by_name: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for style in registry.styles() {
            let name = style.name.trim();
            if !name.is_empty() {
                by_name.entry(name).or_default().push(&style.id);
            }
        }
        conflicts.extend(
            by_name
                .iter()
                .filter(|(_, ids)| ids.len() > 1)
                .map(|(name, ids)| StyleConflict::duplicate_name(name, ids)),
        );

        self.detect_linked_mismatches(registry, &mut conflicts);

        debug!("detected {} style conflicts", conflicts.len());
        conflicts
    }

    /// Detect conflicts, record them on `registry` and return them
    pub fn detect_and_record(&self, registry: &mut StyleRegistry) -> Vec<StyleConflict> {
        let conflicts = self.detect(registry);
        registry.record_conflicts(&conflicts);
        conflicts
    }

    fn detect_linked_mismatches(&self, registry: &StyleRegistry, out: &mut Vec<StyleConflict>) {
        let mut seen: BTreeSet<(&str, &str)> = BTreeSet::new();

        for style in registry.styles() {
            let Some(other) = style
                .inheritance
                .reference(ReferenceField::Linked)
                .filter(|linked| *linked != style.id)
                .and_then(|linked| registry.get(linked))
            else {
                continue;
            };

            let pair = if style.id <= other.id {
                (style.id.as_str(), other.id.as_str())
            } else {
                (other.id.as_str(), style.id.as_str())
            };
            if !seen.insert(pair) {
                continue;
            }

            let (a, b) = (&style.properties.font, &other.properties.font);
            if self.policy.is_set(&a.name) && self.policy.is_set(&b.name) && a.name != b.name {
                out.push(StyleConflict::property_conflict(pair.0, pair.1, "font name"));
            }
            if self.policy.is_set(&a.size) && self.policy.is_set(&b.size) && a.size != b.size {
                out.push(StyleConflict::property_conflict(pair.0, pair.1, "font size"));
            }
        }
    }
}
