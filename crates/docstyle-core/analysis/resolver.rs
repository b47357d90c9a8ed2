//! Inheritance resolution over `basedOn` chains
//!
//! Computes every style's effective properties by merging its ancestors'
//! properties into its own unset fields, nearest ancestor first, and then
//! layering the properties of its linked style underneath.
//!
//! # Algorithm
//!
//! A single iterative traversal of the `basedOn` graph orders styles so
//! parents come before children and classifies each style:
//!
//! - styles with no parent are roots
//! - styles whose parent does not exist fail with
//!   [`ResolutionError::MissingParent`]
//! - styles on a cycle fail with [`ResolutionError::CircularReference`]
//! - every other style inherits from an already-ordered parent
//!
//! Each style then walks the styles it can reach, depth first: its own
//! record, its `basedOn` ancestry, then linked styles. Every reached style's
//! own properties fill whatever is still unset, so the nearest source wins.
//! A visited set makes the walk terminate on mutually linked pairs, and since
//! the set of reachable styles is closed, resolving the output again changes
//! nothing.
//!
//! Failures are scoped to the failing style: it keeps its own properties and
//! the error is attached to its validation snapshot. Styles that inherit from
//! a failed style still merge that style's own properties.
//!
//! # Example
//!
//! ```rust
//! use docstyle_core::{AdvancedStyle, InheritanceResolver, StyleRegistry, StyleType};
//! use docstyle_core::model::StyleProperties;
//!
//! let mut normal = StyleProperties::default();
//! normal.font.name = Some("Calibri".into());
//! normal.font.size = Some(11.0);
//!
//! let mut heading = StyleProperties::default();
//! heading.font.size = Some(16.0);
//!
//! let registry = StyleRegistry::from_styles([
//!     AdvancedStyle::new("Normal", StyleType::Paragraph).with_properties(normal),
//!     AdvancedStyle::new("Heading1", StyleType::Paragraph)
//!         .with_based_on("Normal")
//!         .with_properties(heading),
//! ])?;
//!
//! let resolution = InheritanceResolver::default().resolve(&registry);
//! assert!(resolution.is_clean());
//!
//! let heading = resolution.registry().get("Heading1").unwrap();
//! assert_eq!(heading.properties.font.name.as_deref(), Some("Calibri"));
//! assert_eq!(heading.properties.font.size, Some(16.0));
//! # Ok::<(), docstyle_core::CoreError>(())
//! ```

use crate::{
    model::{Inherit, MergePolicy, StyleProperties, StyleValidation},
    utils::{
        create_hash_map_with_capacity, create_hash_set,
        hashers::{FastMap, FastSet},
        ResolutionError,
    },
    StyleRegistry,
};
use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};
use log::{debug, trace, warn};

/// How a style relates to its `basedOn` parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainStatus {
    /// No parent
    Root,
    /// Parent exists and is ordered before this style
    Inherits,
    /// Parent id does not exist
    MissingParent,
    /// Style sits on a cycle
    Circular,
}

/// Traversal result: resolution order, per-style status and failures
struct InheritancePlan<'a> {
    order: Vec<&'a str>,
    status: FastMap<&'a str, ChainStatus>,
    errors: Vec<ResolutionError>,
    cycles: Vec<Vec<String>>,
}

impl<'a> InheritancePlan<'a> {
    fn build(registry: &'a StyleRegistry) -> Self {
        let mut plan = Self {
            order: Vec::with_capacity(registry.len()),
            status: create_hash_map_with_capacity(registry.len()),
            errors: Vec::new(),
            cycles: Vec::new(),
        };

        let mut path: Vec<&'a str> = Vec::new();
        let mut on_path: FastSet<&'a str> = create_hash_set();

        for start in registry.ids() {
            let mut current = start;
            loop {
                if plan.status.contains_key(current) {
                    break;
                }

                if on_path.contains(current) {
                    let from = path.iter().position(|id| *id == current).unwrap_or(0);
                    plan.close_cycle(path.drain(from..), &mut on_path);
                    break;
                }

                let Some(style) = registry.get(current) else {
                    break;
                };

                match style.parent() {
                    None => {
                        plan.finish(current, ChainStatus::Root);
                        break;
                    }
                    Some(parent) if !registry.contains(parent) => {
                        plan.errors
                            .push(ResolutionError::missing_parent(current, parent));
                        plan.finish(current, ChainStatus::MissingParent);
                        break;
                    }
                    Some(parent) => {
                        path.push(current);
                        on_path.insert(current);
                        current = parent;
                    }
                }
            }

            while let Some(id) = path.pop() {
                on_path.remove(id);
                plan.finish(id, ChainStatus::Inherits);
            }
        }

        plan
    }

    fn finish(&mut self, id: &'a str, status: ChainStatus) {
        self.status.insert(id, status);
        self.order.push(id);
    }

    fn close_cycle<I>(&mut self, members: I, on_path: &mut FastSet<&'a str>)
    where
        I: Iterator<Item = &'a str>,
    {
        let members: Vec<&'a str> = members.collect();
        let cycle: Vec<String> = members.iter().map(ToString::to_string).collect();
        for id in members {
            on_path.remove(id);
            self.errors
                .push(ResolutionError::circular(id, cycle.clone()));
            self.finish(id, ChainStatus::Circular);
        }
        self.cycles.push(cycle);
    }

    fn status(&self, id: &str) -> ChainStatus {
        self.status.get(id).copied().unwrap_or(ChainStatus::Root)
    }
}

/// Computes effective properties for every style in a registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InheritanceResolver {
    policy: MergePolicy,
}

impl InheritanceResolver {
    /// Create resolver using `policy` to decide which fields are unset
    #[must_use]
    pub const fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    /// Merge policy in use
    #[must_use]
    pub const fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Resolve every style, leaving `registry` untouched
    ///
    /// The returned [`Resolution`] owns a copy of the registry in which each
    /// style's properties are its effective properties and the `basedOn`
    /// tree is rebuilt. Resolving an already resolved registry yields the
    /// same properties again.
    #[must_use]
    pub fn resolve(&self, registry: &StyleRegistry) -> Resolution {
        debug!("resolving inheritance for {} styles", registry.len());

        let plan = InheritancePlan::build(registry);
        for error in &plan.errors {
            warn!("{error}");
        }

        let mut effective: FastMap<&str, StyleProperties> =
            create_hash_map_with_capacity(plan.order.len());
        for &id in &plan.order {
            if let Some(properties) = self.effective_properties(registry, &plan, id) {
                trace!("resolved style '{id}'");
                effective.insert(id, properties);
            }
        }

        let mut resolved = registry.clone();
        for style in resolved.styles_mut() {
            if let Some(properties) = effective.remove(style.id.as_str()) {
                style.properties = properties;
            }
            style.validation = StyleValidation::new();
        }
        for error in &plan.errors {
            if let Some(style) = resolved.get_mut(error.style_id()) {
                style.validation.add_error(error.to_string());
            }
        }
        resolved.rebuild_tree();

        debug!(
            "resolution finished: {} failures, {} cycles",
            plan.errors.len(),
            plan.cycles.len()
        );

        Resolution {
            registry: resolved,
            errors: plan.errors,
            cycles: plan.cycles,
        }
    }

    fn effective_properties(
        &self,
        registry: &StyleRegistry,
        plan: &InheritancePlan<'_>,
        id: &str,
    ) -> Option<StyleProperties> {
        let mut properties = registry.get(id)?.properties.clone();
        let mut visited: FastSet<&str> = create_hash_set();
        let mut stack: Vec<&str> = vec![id];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(style) = registry.get(current) else {
                continue;
            };
            if current != id {
                properties.inherit_from(&style.properties, self.policy);
            }

            let status = plan.status(current);
            if matches!(status, ChainStatus::Circular | ChainStatus::MissingParent) {
                continue;
            }
            if let Some(linked) = style.inheritance.linked_style() {
                if registry.contains(linked) {
                    stack.push(linked);
                }
            }
            if status == ChainStatus::Inherits {
                if let Some(parent) = style.parent() {
                    stack.push(parent);
                }
            }
        }

        Some(properties)
    }
}

/// Result of resolving a registry
///
/// Holds the resolved copy plus every per-style failure. Callers decide
/// whether to adopt it with [`commit`](Self::commit) or discard it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    registry: StyleRegistry,
    errors: Vec<ResolutionError>,
    cycles: Vec<Vec<String>>,
}

impl Resolution {
    /// Resolved registry
    #[must_use]
    pub const fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Take the resolved registry
    #[must_use]
    pub fn into_registry(self) -> StyleRegistry {
        self.registry
    }

    /// Take the resolved registry together with the failures
    #[must_use]
    pub fn into_parts(self) -> (StyleRegistry, Vec<ResolutionError>) {
        (self.registry, self.errors)
    }

    /// Per-style failures in resolution order
    #[must_use]
    pub fn errors(&self) -> &[ResolutionError] {
        &self.errors
    }

    /// Failure for style `id`, if its resolution failed
    #[must_use]
    pub fn error_for(&self, id: &str) -> Option<&ResolutionError> {
        self.errors.iter().find(|error| error.style_id() == id)
    }

    /// Ids of styles whose resolution failed
    pub fn failed_ids(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(ResolutionError::style_id)
    }

    /// Each distinct `basedOn` cycle, once
    #[must_use]
    pub fn cycles(&self) -> &[Vec<String>] {
        &self.cycles
    }

    /// Whether every style resolved without failure
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Replace `target` with the resolved registry
    pub fn commit(self, target: &mut StyleRegistry) {
        *target = self.registry;
    }
}

impl StyleRegistry {
    /// Ordered `basedOn` ancestry of `id`, starting with `id` itself
    ///
    /// Stops at a root, at a parent that does not exist, or before the first
    /// id that would repeat. A dangling parent id is not part of the chain,
    /// so only registered styles count towards
    /// [`inheritance_level`](Self::inheritance_level). Empty when `id` is not
    /// registered.
    #[must_use]
    pub fn inheritance_chain(&self, id: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut seen: FastSet<&str> = create_hash_set();
        let mut current = self.get(id);

        while let Some(style) = current {
            if !seen.insert(style.id.as_str()) {
                break;
            }
            chain.push(style.id.clone());
            current = style.parent().and_then(|parent| self.get(parent));
        }
        chain
    }

    /// Length of [`inheritance_chain`](Self::inheritance_chain)
    #[must_use]
    pub fn inheritance_level(&self, id: &str) -> usize {
        self.inheritance_chain(id).len()
    }

    /// Every style below `id` in the `basedOn` tree, depth first
    ///
    /// Terminates on cycles and never includes `id` itself.
    #[must_use]
    pub fn descendants(&self, id: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut visited: FastSet<&str> = create_hash_set();
        visited.insert(id);

        let mut stack: Vec<&str> = self.children(id).collect();
        stack.reverse();
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            found.push(current.to_string());
            let mut children: Vec<&str> = self.children(current).collect();
            children.reverse();
            stack.extend(children);
        }
        found
    }

    /// Each distinct `basedOn` cycle, in traversal order
    #[must_use]
    pub fn find_cycles(&self) -> Vec<Vec<String>> {
        InheritancePlan::build(self).cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AdvancedStyle, StyleType};

    fn props(font: Option<&str>, size: Option<f64>) -> StyleProperties {
        let mut properties = StyleProperties::default();
        properties.font.name = font.map(String::from);
        properties.font.size = size;
        properties
    }

    fn paragraph(id: &str) -> AdvancedStyle {
        AdvancedStyle::new(id, StyleType::Paragraph)
    }

    #[test]
    fn nearest_ancestor_wins() {
        let registry = StyleRegistry::from_styles([
            paragraph("A").with_properties(props(Some("Times"), Some(10.0))),
            paragraph("B")
                .with_based_on("A")
                .with_properties(props(Some("Arial"), None)),
            paragraph("C").with_based_on("B"),
        ])
        .unwrap();

        let resolution = InheritanceResolver::default().resolve(&registry);
        let c = resolution.registry().get("C").unwrap();
        assert_eq!(c.properties.font.name.as_deref(), Some("Arial"));
        assert_eq!(c.properties.font.size, Some(10.0));
    }

    #[test]
    fn input_registry_is_untouched() {
        let registry = StyleRegistry::from_styles([
            paragraph("A").with_properties(props(Some("Times"), None)),
            paragraph("B").with_based_on("A"),
        ])
        .unwrap();
        let before = registry.clone();
        let _ = InheritanceResolver::default().resolve(&registry);
        assert_eq!(registry, before);
    }

    #[test]
    fn two_cycle_fails_both_members() {
        let registry = StyleRegistry::from_styles([
            paragraph("A").with_based_on("B"),
            paragraph("B").with_based_on("A"),
        ])
        .unwrap();

        let resolution = InheritanceResolver::default().resolve(&registry);
        let failed: Vec<_> = resolution.failed_ids().collect();
        assert_eq!(failed, vec!["A", "B"]);
        assert_eq!(resolution.cycles().len(), 1);
        assert!(matches!(
            resolution.error_for("A"),
            Some(ResolutionError::CircularReference { .. })
        ));
        assert!(!resolution.registry().get("B").unwrap().validation.valid);
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let registry = StyleRegistry::from_styles([
            paragraph("Loop")
                .with_based_on("Loop")
                .with_properties(props(Some("Arial"), None)),
        ])
        .unwrap();

        let resolution = InheritanceResolver::default().resolve(&registry);
        assert_eq!(resolution.cycles(), [vec!["Loop".to_string()]]);
        let style = resolution.registry().get("Loop").unwrap();
        assert_eq!(style.properties.font.name.as_deref(), Some("Arial"));
    }

    #[test]
    fn missing_parent_keeps_own_properties() {
        let registry = StyleRegistry::from_styles([
            paragraph("Orphan")
                .with_based_on("Ghost")
                .with_properties(props(None, Some(9.0))),
            paragraph("Child").with_based_on("Orphan"),
        ])
        .unwrap();

        let resolution = InheritanceResolver::default().resolve(&registry);
        assert_eq!(
            resolution.errors(),
            [ResolutionError::missing_parent("Orphan", "Ghost")]
        );
        let child = resolution.registry().get("Child").unwrap();
        assert_eq!(child.properties.font.size, Some(9.0));
        assert!(child.validation.valid);
    }

    #[test]
    fn tail_into_cycle_resolves_against_member() {
        let registry = StyleRegistry::from_styles([
            paragraph("A")
                .with_based_on("B")
                .with_properties(props(Some("Arial"), None)),
            paragraph("B").with_based_on("A"),
            paragraph("Tail").with_based_on("A"),
        ])
        .unwrap();

        let resolution = InheritanceResolver::default().resolve(&registry);
        assert!(resolution.error_for("Tail").is_none());
        let tail = resolution.registry().get("Tail").unwrap();
        assert_eq!(tail.properties.font.name.as_deref(), Some("Arial"));
    }

    #[test]
    fn linked_style_fills_remaining_fields() {
        let registry = StyleRegistry::from_styles([
            paragraph("Body")
                .with_linked("BodyChar")
                .with_properties(props(Some("Georgia"), None)),
            AdvancedStyle::new("BodyChar", StyleType::Character)
                .with_linked("Body")
                .with_properties(props(Some("Verdana"), Some(12.0))),
        ])
        .unwrap();

        let resolution = InheritanceResolver::default().resolve(&registry);
        let body = resolution.registry().get("Body").unwrap();
        assert_eq!(body.properties.font.name.as_deref(), Some("Georgia"));
        assert_eq!(body.properties.font.size, Some(12.0));

        let chr = resolution.registry().get("BodyChar").unwrap();
        assert_eq!(chr.properties.font.name.as_deref(), Some("Verdana"));
    }

    #[test]
    fn parent_wins_over_linked_style() {
        let registry = StyleRegistry::from_styles([
            paragraph("Parent").with_properties(props(Some("FromParent"), None)),
            AdvancedStyle::new("Link", StyleType::Character)
                .with_properties(props(Some("FromLinked"), Some(9.0))),
            paragraph("S").with_based_on("Parent").with_linked("Link"),
        ])
        .unwrap();

        let resolution = InheritanceResolver::default().resolve(&registry);
        let s = resolution.registry().get("S").unwrap();
        assert_eq!(s.properties.font.name.as_deref(), Some("FromParent"));
        assert_eq!(s.properties.font.size, Some(9.0));
    }

    #[test]
    fn chained_links_are_idempotent() {
        let registry = StyleRegistry::from_styles([
            paragraph("X").with_linked("L"),
            paragraph("L").with_linked("M"),
            paragraph("M").with_properties(props(Some("Courier"), Some(5.0))),
        ])
        .unwrap();

        let resolver = InheritanceResolver::default();
        let once = resolver.resolve(&registry).into_registry();
        let twice = resolver.resolve(&once).into_registry();
        assert_eq!(once, twice);
        assert_eq!(
            once.get("X").unwrap().properties.font.name.as_deref(),
            Some("Courier")
        );
    }

    #[test]
    fn explicit_zero_survives_under_explicit_only() {
        let registry = StyleRegistry::from_styles([
            paragraph("A").with_properties(props(None, Some(12.0))),
            paragraph("B")
                .with_based_on("A")
                .with_properties(props(None, Some(0.0))),
        ])
        .unwrap();

        let zero_unset = InheritanceResolver::default().resolve(&registry);
        assert_eq!(
            zero_unset.registry().get("B").unwrap().properties.font.size,
            Some(12.0)
        );

        let explicit = InheritanceResolver::new(MergePolicy::ExplicitOnly).resolve(&registry);
        assert_eq!(
            explicit.registry().get("B").unwrap().properties.font.size,
            Some(0.0)
        );
    }

    #[test]
    fn chain_level_and_descendants() {
        let registry = StyleRegistry::from_styles([
            paragraph("Normal"),
            paragraph("Heading1").with_based_on("Normal"),
            paragraph("Heading2").with_based_on("Heading1"),
            paragraph("Quote").with_based_on("Normal"),
        ])
        .unwrap();

        assert_eq!(
            registry.inheritance_chain("Heading2"),
            vec!["Heading2", "Heading1", "Normal"]
        );
        assert_eq!(registry.inheritance_level("Heading2"), 3);
        assert_eq!(registry.inheritance_level("Missing"), 0);
        assert_eq!(
            registry.descendants("Normal"),
            vec!["Heading1", "Heading2", "Quote"]
        );
    }

    #[test]
    fn chain_excludes_dangling_parent() {
        let registry =
            StyleRegistry::from_styles([paragraph("Orphan").with_based_on("Ghost")]).unwrap();
        assert_eq!(registry.inheritance_chain("Orphan"), vec!["Orphan"]);
        assert_eq!(registry.inheritance_level("Orphan"), 1);
    }

    #[test]
    fn chain_and_descendants_terminate_on_cycles() {
        let registry = StyleRegistry::from_styles([
            paragraph("A").with_based_on("C"),
            paragraph("B").with_based_on("A"),
            paragraph("C").with_based_on("B"),
        ])
        .unwrap();

        assert_eq!(registry.inheritance_chain("A"), vec!["A", "C", "B"]);
        assert_eq!(registry.descendants("A"), vec!["B", "C"]);
        assert_eq!(registry.find_cycles().len(), 1);
    }
}
