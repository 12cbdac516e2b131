//! Relationship registry - symmetric lookup of pairwise rules

use crate::error::CatalogLoadError;
use crate::{reference, ComponentCatalog, ComponentPair, ComponentType, RelationshipEntry, RelationshipKind};
use std::collections::BTreeMap;

/// Static lookup of pairwise relationship rules
///
/// Keyed by [`ComponentPair`], so a rule occupies one slot no matter which
/// ordering it was declared or queried with.
#[derive(Debug, Clone, Default)]
pub struct RelationshipRegistry {
    entries: BTreeMap<ComponentPair, RelationshipEntry>,
}

impl RelationshipRegistry {
    /// Build a registry, checking every rule against `catalog`
    ///
    /// # Errors
    /// [`CatalogLoadError::DuplicateRelationship`] if an unordered pair is
    /// defined more than once (in either ordering, with either kind), and
    /// [`CatalogLoadError::UnknownRelationshipMember`] if a rule references a
    /// component the catalog does not define, and
    /// [`CatalogLoadError::MagnitudeOverflow`] if the additive or conflicting
    /// magnitudes cannot be summed to a finite value.
    pub fn from_entries<I>(entries: I, catalog: &ComponentCatalog) -> Result<Self, CatalogLoadError>
    where
        I: IntoIterator<Item = RelationshipEntry>,
    {
        let mut map = BTreeMap::new();

        for entry in entries {
            let pair = entry.pair();
            for member in [pair.low(), pair.high()] {
                if !catalog.contains(member) {
                    return Err(CatalogLoadError::UnknownRelationshipMember(member));
                }
            }
            if map.contains_key(&pair) {
                return Err(CatalogLoadError::DuplicateRelationship {
                    a: pair.low(),
                    b: pair.high(),
                });
            }
            map.insert(pair, entry);
        }

        // Every selection's bonus and penalty is bounded by these sums
        for kind in [RelationshipKind::Additive, RelationshipKind::Conflicting] {
            let total: f64 = map
                .values()
                .filter(|e| e.kind() == kind)
                .map(|e| e.magnitude().abs())
                .sum();
            if !total.is_finite() {
                return Err(CatalogLoadError::MagnitudeOverflow { kind: kind.as_str() });
            }
        }

        let registry = Self { entries: map };
        tracing::info!(
            version = catalog.version(),
            relationships = registry.len(),
            synergies = registry.synergy_count(),
            conflicts = registry.conflict_count(),
            "Relationship registry loaded"
        );

        Ok(registry)
    }

    /// The built-in reference rules (91 relationships)
    ///
    /// # Errors
    /// Fails only if `catalog` lacks a component the reference rules use.
    pub fn reference(catalog: &ComponentCatalog) -> Result<Self, CatalogLoadError> {
        Self::from_entries(reference::relationship_entries()?, catalog)
    }

    /// Look up the rule for an unordered pair
    ///
    /// `lookup(a, b)` and `lookup(b, a)` always return the same entry.
    /// Returns `None` for unrelated pairs and for `a == b`.
    pub fn lookup(&self, a: ComponentType, b: ComponentType) -> Option<&RelationshipEntry> {
        ComponentPair::new(a, b).and_then(|pair| self.entries.get(&pair))
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no rules
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over rules in canonical pair order
    pub fn iter(&self) -> impl Iterator<Item = &RelationshipEntry> {
        self.entries.values()
    }

    /// Every rule that involves `component`
    pub fn relationships_for(&self, component: ComponentType) -> impl Iterator<Item = &RelationshipEntry> {
        self.entries
            .values()
            .filter(move |entry| entry.pair().contains(component))
    }

    /// Number of additive rules
    pub fn synergy_count(&self) -> usize {
        self.count_kind(RelationshipKind::Additive)
    }

    /// Number of conflicting rules
    pub fn conflict_count(&self) -> usize {
        self.count_kind(RelationshipKind::Conflicting)
    }

    fn count_kind(&self, kind: RelationshipKind) -> usize {
        self.entries.values().filter(|e| e.kind() == kind).count()
    }
}
