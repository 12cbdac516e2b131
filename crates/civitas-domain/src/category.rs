//! Category module - the eleven families every component belongs to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a governance component
///
/// Every [`ComponentType`](crate::ComponentType) belongs to exactly one
/// category. Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// How power is split between centres and levels of government
    PowerDistribution,

    /// How binding decisions are reached
    DecisionProcess,

    /// Why the governed accept the right to rule
    LegitimacySource,

    /// Standing bodies and offices
    Institution,

    /// Mechanisms that constrain or enforce behaviour
    ControlMechanism,

    /// How the economy is steered
    EconomicGovernance,

    /// How the state machinery delivers
    AdministrativeEfficiency,

    /// Welfare, rights and cultural policy
    SocialPolicy,

    /// Posture towards other states
    InternationalRelations,

    /// Research and technology policy
    Innovation,

    /// Preparedness and emergency response
    CrisisManagement,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 11] = [
        Category::PowerDistribution,
        Category::DecisionProcess,
        Category::LegitimacySource,
        Category::Institution,
        Category::ControlMechanism,
        Category::EconomicGovernance,
        Category::AdministrativeEfficiency,
        Category::SocialPolicy,
        Category::InternationalRelations,
        Category::Innovation,
        Category::CrisisManagement,
    ];

    /// Get the category identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::PowerDistribution => "power_distribution",
            Category::DecisionProcess => "decision_process",
            Category::LegitimacySource => "legitimacy_source",
            Category::Institution => "institution",
            Category::ControlMechanism => "control_mechanism",
            Category::EconomicGovernance => "economic_governance",
            Category::AdministrativeEfficiency => "administrative_efficiency",
            Category::SocialPolicy => "social_policy",
            Category::InternationalRelations => "international_relations",
            Category::Innovation => "innovation",
            Category::CrisisManagement => "crisis_management",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::PowerDistribution => "Power Distribution",
            Category::DecisionProcess => "Decision Process",
            Category::LegitimacySource => "Legitimacy Source",
            Category::Institution => "Institution",
            Category::ControlMechanism => "Control Mechanism",
            Category::EconomicGovernance => "Economic Governance",
            Category::AdministrativeEfficiency => "Administrative Efficiency",
            Category::SocialPolicy => "Social Policy",
            Category::InternationalRelations => "International Relations",
            Category::Innovation => "Innovation",
            Category::CrisisManagement => "Crisis Management",
        }
    }

    /// Parse a category from an identifier or label
    ///
    /// Case-insensitive; spaces and dashes are treated as underscores, so
    /// `"Decision Process"`, `"decision-process"` and `"DECISION_PROCESS"`
    /// all resolve to [`Category::DecisionProcess`].
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL.into_iter().find(|c| c.as_str() == normalized)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}
