//! Component module - the closed set of atomic governance components
//!
//! The enum is generated from a single table so that the variant list, the
//! canonical text form, and the category mapping can never drift apart.

use crate::Category;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of component types in the closed domain
pub const COMPONENT_COUNT: usize = 106;

macro_rules! component_types {
    ($( $category:ident => { $( $variant:ident = $name:literal ),+ $(,)? } )+) => {
        /// One atomic, typed building block of a governance configuration
        ///
        /// The derived ordering follows declaration order and is the total
        /// order used to canonicalize unordered pairs.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ComponentType {
            $( $(
                #[doc = $name]
                $variant,
            )+ )+
        }

        impl ComponentType {
            /// Every component type, in canonical order
            pub const ALL: [ComponentType; COMPONENT_COUNT] = [
                $( $( ComponentType::$variant, )+ )+
            ];

            /// Canonical identifier (SCREAMING_SNAKE_CASE)
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $( ComponentType::$variant => $name, )+ )+
                }
            }

            /// The category this component belongs to
            pub fn category(&self) -> Category {
                match self {
                    $( $( ComponentType::$variant => Category::$category, )+ )+
                }
            }

            fn from_canonical(s: &str) -> Option<Self> {
                match s {
                    $( $( $name => Some(ComponentType::$variant), )+ )+
                    _ => None,
                }
            }
        }
    };
}

component_types! {
    PowerDistribution => {
        CentralizedPower = "CENTRALIZED_POWER",
        FederalPower = "FEDERAL_POWER",
        ConfederalPower = "CONFEDERAL_POWER",
        UnitaryState = "UNITARY_STATE",
        SeparationOfPowers = "SEPARATION_OF_POWERS",
        FusionOfPowers = "FUSION_OF_POWERS",
        DevolvedPower = "DEVOLVED_POWER",
        ConsociationalPower = "CONSOCIATIONAL_POWER",
        Subsidiarity = "SUBSIDIARITY",
        OligarchicPower = "OLIGARCHIC_POWER",
    }
    DecisionProcess => {
        DemocraticProcess = "DEMOCRATIC_PROCESS",
        AutocraticProcess = "AUTOCRATIC_PROCESS",
        TechnocraticProcess = "TECHNOCRATIC_PROCESS",
        ConsensusProcess = "CONSENSUS_PROCESS",
        DeliberativeProcess = "DELIBERATIVE_PROCESS",
        DirectDemocracy = "DIRECT_DEMOCRACY",
        RepresentativeDemocracy = "REPRESENTATIVE_DEMOCRACY",
        CouncilProcess = "COUNCIL_PROCESS",
        TheocraticProcess = "THEOCRATIC_PROCESS",
        AlgorithmicProcess = "ALGORITHMIC_PROCESS",
    }
    LegitimacySource => {
        ElectoralLegitimacy = "ELECTORAL_LEGITIMACY",
        TraditionalLegitimacy = "TRADITIONAL_LEGITIMACY",
        CharismaticLegitimacy = "CHARISMATIC_LEGITIMACY",
        ReligiousLegitimacy = "RELIGIOUS_LEGITIMACY",
        PerformanceLegitimacy = "PERFORMANCE_LEGITIMACY",
        ConstitutionalLegitimacy = "CONSTITUTIONAL_LEGITIMACY",
        RevolutionaryLegitimacy = "REVOLUTIONARY_LEGITIMACY",
        HereditaryLegitimacy = "HEREDITARY_LEGITIMACY",
        InternationalRecognition = "INTERNATIONAL_RECOGNITION",
    }
    Institution => {
        RuleOfLaw = "RULE_OF_LAW",
        IndependentJudiciary = "INDEPENDENT_JUDICIARY",
        ProfessionalBureaucracy = "PROFESSIONAL_BUREAUCRACY",
        FreePress = "FREE_PRESS",
        BicameralLegislature = "BICAMERAL_LEGISLATURE",
        UnicameralLegislature = "UNICAMERAL_LEGISLATURE",
        ConstitutionalCourt = "CONSTITUTIONAL_COURT",
        CentralBank = "CENTRAL_BANK",
        Ombudsman = "OMBUDSMAN",
        ElectoralCommission = "ELECTORAL_COMMISSION",
        Monarchy = "MONARCHY",
        StateParty = "STATE_PARTY",
    }
    ControlMechanism => {
        ChecksAndBalances = "CHECKS_AND_BALANCES",
        SurveillanceState = "SURVEILLANCE_STATE",
        Censorship = "CENSORSHIP",
        SecretPolice = "SECRET_POLICE",
        TermLimits = "TERM_LIMITS",
        JudicialReview = "JUDICIAL_REVIEW",
        CivilianOversight = "CIVILIAN_OVERSIGHT",
        MartialLaw = "MARTIAL_LAW",
        TransparencyLaws = "TRANSPARENCY_LAWS",
        AntiCorruptionAgency = "ANTI_CORRUPTION_AGENCY",
    }
    EconomicGovernance => {
        FreeMarket = "FREE_MARKET",
        PlannedEconomy = "PLANNED_ECONOMY",
        MixedEconomy = "MIXED_ECONOMY",
        StateCapitalism = "STATE_CAPITALISM",
        WelfareState = "WELFARE_STATE",
        ProgressiveTaxation = "PROGRESSIVE_TAXATION",
        FlatTaxation = "FLAT_TAXATION",
        Protectionism = "PROTECTIONISM",
        FreeTrade = "FREE_TRADE",
        CooperativeEconomy = "COOPERATIVE_ECONOMY",
    }
    AdministrativeEfficiency => {
        DigitalGovernment = "DIGITAL_GOVERNMENT",
        MeritBasedCivilService = "MERIT_BASED_CIVIL_SERVICE",
        PatronageSystem = "PATRONAGE_SYSTEM",
        DecentralizedAdministration = "DECENTRALIZED_ADMINISTRATION",
        EProcurement = "E_PROCUREMENT",
        PerformanceBudgeting = "PERFORMANCE_BUDGETING",
        RegulatoryStreamlining = "REGULATORY_STREAMLINING",
        CentralPlanningOffice = "CENTRAL_PLANNING_OFFICE",
        OpenData = "OPEN_DATA",
    }
    SocialPolicy => {
        UniversalHealthcare = "UNIVERSAL_HEALTHCARE",
        UniversalEducation = "UNIVERSAL_EDUCATION",
        UniversalBasicIncome = "UNIVERSAL_BASIC_INCOME",
        SocialSecurity = "SOCIAL_SECURITY",
        LaborProtections = "LABOR_PROTECTIONS",
        MinorityRights = "MINORITY_RIGHTS",
        ReligiousFreedom = "RELIGIOUS_FREEDOM",
        StateReligion = "STATE_RELIGION",
        AssimilationPolicy = "ASSIMILATION_POLICY",
        Multiculturalism = "MULTICULTURALISM",
    }
    InternationalRelations => {
        Multilateralism = "MULTILATERALISM",
        Isolationism = "ISOLATIONISM",
        NonAlignment = "NON_ALIGNMENT",
        MilitaryAlliance = "MILITARY_ALLIANCE",
        EconomicUnion = "ECONOMIC_UNION",
        Expansionism = "EXPANSIONISM",
        SoftPowerDiplomacy = "SOFT_POWER_DIPLOMACY",
        Neutrality = "NEUTRALITY",
        SanctionsRegime = "SANCTIONS_REGIME",
    }
    Innovation => {
        ResearchFunding = "RESEARCH_FUNDING",
        IntellectualProperty = "INTELLECTUAL_PROPERTY",
        OpenInnovation = "OPEN_INNOVATION",
        TechnologyTransfer = "TECHNOLOGY_TRANSFER",
        StartupEcosystem = "STARTUP_ECOSYSTEM",
        StateResearchPrograms = "STATE_RESEARCH_PROGRAMS",
        InnovationSandbox = "INNOVATION_SANDBOX",
        AcademicFreedom = "ACADEMIC_FREEDOM",
    }
    CrisisManagement => {
        EmergencyPowers = "EMERGENCY_POWERS",
        DisasterResponseAgency = "DISASTER_RESPONSE_AGENCY",
        StrategicReserves = "STRATEGIC_RESERVES",
        CivilDefense = "CIVIL_DEFENSE",
        PandemicPreparedness = "PANDEMIC_PREPAREDNESS",
        ContinuityOfGovernment = "CONTINUITY_OF_GOVERNMENT",
        RapidResponseForce = "RAPID_RESPONSE_FORCE",
        EarlyWarningSystem = "EARLY_WARNING_SYSTEM",
        CrisisCommunication = "CRISIS_COMMUNICATION",
    }
}

impl ComponentType {
    /// Parse a component type from text
    ///
    /// Case-insensitive; dashes and spaces are accepted in place of
    /// underscores (`"rule-of-law"` resolves to [`ComponentType::RuleOfLaw`]).
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        Self::from_canonical(&normalized)
    }

    /// Iterate over the component types belonging to a category
    pub fn in_category(category: Category) -> impl Iterator<Item = ComponentType> {
        Self::ALL.into_iter().filter(move |c| c.category() == category)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown component type: {}", s))
    }
}

impl Serialize for ComponentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ComponentType::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown component type `{}`", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_domain_size() {
        assert_eq!(ComponentType::ALL.len(), 106);
        let unique: HashSet<_> = ComponentType::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(unique.len(), 106);
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in Category::ALL {
            assert!(
                ComponentType::in_category(category).count() > 0,
                "{} has no components",
                category
            );
        }
        let total: usize = Category::ALL
            .iter()
            .map(|c| ComponentType::in_category(*c).count())
            .sum();
        assert_eq!(total, COMPONENT_COUNT);
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!(ComponentType::parse("DEMOCRATIC_PROCESS"), Some(ComponentType::DemocraticProcess));
        assert_eq!(ComponentType::parse("rule-of-law"), Some(ComponentType::RuleOfLaw));
        assert_eq!(ComponentType::parse(" e procurement "), Some(ComponentType::EProcurement));
        assert_eq!(ComponentType::parse("PHILOSOPHER_KING"), None);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for component in ComponentType::ALL {
            assert_eq!(ComponentType::parse(component.as_str()), Some(component));
        }
    }

    #[test]
    fn test_order_follows_declaration() {
        assert!(ComponentType::CentralizedPower < ComponentType::DemocraticProcess);
        assert!(ComponentType::DemocraticProcess < ComponentType::AutocraticProcess);
        assert!(ComponentType::AutocraticProcess < ComponentType::CrisisCommunication);
    }

    #[test]
    fn test_reference_categories() {
        assert_eq!(ComponentType::DemocraticProcess.category(), Category::DecisionProcess);
        assert_eq!(ComponentType::ElectoralLegitimacy.category(), Category::LegitimacySource);
        assert_eq!(ComponentType::RuleOfLaw.category(), Category::Institution);
    }
}
