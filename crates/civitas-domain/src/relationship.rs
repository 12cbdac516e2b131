//! Relationship module - pairwise synergy and conflict rules
//!
//! Rules are unordered: `(a, b)` and `(b, a)` name the same rule. Every pair
//! is normalized through [`ComponentPair::new`] before it is stored or
//! queried, so there is exactly one key per unordered pair.

use crate::error::CatalogLoadError;
use crate::ComponentType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of pairwise relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    /// Both components present raise the score
    Additive,

    /// Both components present lower the score
    Conflicting,
}

impl RelationshipKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Additive => "additive",
            RelationshipKind::Conflicting => "conflicting",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical unordered pair of distinct components
///
/// `low < high` under the [`ComponentType`] total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ComponentPair {
    low: ComponentType,
    high: ComponentType,
}

impl ComponentPair {
    /// Normalize two components into a canonical pair
    ///
    /// Returns `None` when `a == b`; a component never relates to itself.
    pub fn new(a: ComponentType, b: ComponentType) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Lower member
    pub fn low(&self) -> ComponentType {
        self.low
    }

    /// Higher member
    pub fn high(&self) -> ComponentType {
        self.high
    }

    /// Whether `component` is a member of the pair
    pub fn contains(&self, component: ComponentType) -> bool {
        self.low == component || self.high == component
    }

    /// The member that is not `component`, if `component` is a member
    pub fn other(&self, component: ComponentType) -> Option<ComponentType> {
        if self.low == component {
            Some(self.high)
        } else if self.high == component {
            Some(self.low)
        } else {
            None
        }
    }
}

impl fmt::Display for ComponentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.low, self.high)
    }
}

/// A curated rule for one unordered pair of components
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipEntry {
    #[serde(flatten)]
    pair: ComponentPair,
    kind: RelationshipKind,
    magnitude: f64,
    description: String,
}

impl RelationshipEntry {
    /// Create a relationship entry
    ///
    /// Additive rules need a positive magnitude, conflicting rules a negative
    /// one. The pair is canonicalized, so argument order does not matter.
    ///
    /// # Errors
    /// [`CatalogLoadError::SelfRelationship`] when `a == b`,
    /// [`CatalogLoadError::InvalidMagnitude`] when the magnitude is not
    /// finite or its sign disagrees with `kind`.
    pub fn new(
        a: ComponentType,
        b: ComponentType,
        kind: RelationshipKind,
        magnitude: f64,
        description: impl Into<String>,
    ) -> Result<Self, CatalogLoadError> {
        let pair = ComponentPair::new(a, b).ok_or(CatalogLoadError::SelfRelationship(a))?;

        let sign_ok = match kind {
            RelationshipKind::Additive => magnitude > 0.0,
            RelationshipKind::Conflicting => magnitude < 0.0,
        };
        if !magnitude.is_finite() || !sign_ok {
            return Err(CatalogLoadError::InvalidMagnitude {
                a: pair.low(),
                b: pair.high(),
                kind: kind.as_str(),
                magnitude,
            });
        }

        Ok(Self {
            pair,
            kind,
            magnitude,
            description: description.into(),
        })
    }

    /// Canonical pair this rule applies to
    pub fn pair(&self) -> ComponentPair {
        self.pair
    }

    /// Synergy or conflict
    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// Signed score effect (positive for additive, negative for conflicting)
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Human-readable explanation
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this rule is a synergy
    pub fn is_additive(&self) -> bool {
        self.kind == RelationshipKind::Additive
    }
}
