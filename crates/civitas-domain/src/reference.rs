//! Reference data - the built-in catalog and relationship table
//!
//! This is the versioned static table the engine ships with. Data-driven
//! catalogs (see the `civitas-catalog` crate) replace it wholesale; they never
//! patch it.

use crate::error::CatalogLoadError;
use crate::{ComplexityTier, ComponentDefinition, ComponentType, RelationshipEntry, RelationshipKind};

/// Version identifier of the built-in tables
pub const REFERENCE_VERSION: &str = "reference-1";

/// Magnitude of every additive rule in the reference table
pub const SYNERGY_MAGNITUDE: f64 = 10.0;

/// Magnitude of every conflicting rule in the reference table
pub const CONFLICT_MAGNITUDE: f64 = -15.0;

use ComplexityTier::{Extreme, High, Low, Moderate};
use ComponentType as C;

/// Every reference component definition, in canonical order
pub fn component_definitions() -> Vec<ComponentDefinition> {
    // (component, base, implementation cost, maintenance cost, capacity, complexity, technology)
    let rows: [(ComponentType, f64, u32, u32, u8, ComplexityTier, bool); 106] = [
        // Power distribution
        (C::CentralizedPower, 70.0, 30, 15, 40, Low, false),
        (C::FederalPower, 78.0, 65, 35, 65, High, false),
        (C::ConfederalPower, 55.0, 40, 20, 45, Moderate, false),
        (C::UnitaryState, 72.0, 35, 20, 45, Moderate, false),
        (C::SeparationOfPowers, 85.0, 60, 30, 70, High, false),
        (C::FusionOfPowers, 68.0, 30, 15, 45, Moderate, false),
        (C::DevolvedPower, 74.0, 50, 30, 60, Moderate, false),
        (C::ConsociationalPower, 66.0, 55, 35, 65, High, false),
        (C::Subsidiarity, 76.0, 45, 25, 60, Moderate, false),
        (C::OligarchicPower, 52.0, 20, 15, 30, Low, false),
        // Decision process
        (C::DemocraticProcess, 75.0, 60, 40, 65, High, false),
        (C::AutocraticProcess, 88.0, 25, 20, 35, Low, false),
        (C::TechnocraticProcess, 82.0, 55, 35, 75, High, false),
        (C::ConsensusProcess, 64.0, 40, 30, 55, Moderate, false),
        (C::DeliberativeProcess, 70.0, 50, 35, 65, High, false),
        (C::DirectDemocracy, 62.0, 70, 45, 70, High, true),
        (C::RepresentativeDemocracy, 78.0, 55, 35, 60, Moderate, false),
        (C::CouncilProcess, 67.0, 35, 25, 50, Moderate, false),
        (C::TheocraticProcess, 60.0, 30, 20, 35, Low, false),
        (C::AlgorithmicProcess, 73.0, 85, 50, 85, Extreme, true),
        // Legitimacy source
        (C::ElectoralLegitimacy, 80.0, 50, 30, 60, Moderate, false),
        (C::TraditionalLegitimacy, 63.0, 15, 10, 25, Low, false),
        (C::CharismaticLegitimacy, 58.0, 10, 25, 20, Low, false),
        (C::ReligiousLegitimacy, 61.0, 15, 15, 25, Low, false),
        (C::PerformanceLegitimacy, 77.0, 45, 40, 65, Moderate, false),
        (C::ConstitutionalLegitimacy, 86.0, 55, 25, 65, High, false),
        (C::RevolutionaryLegitimacy, 54.0, 25, 30, 30, Moderate, false),
        (C::HereditaryLegitimacy, 57.0, 10, 15, 20, Low, false),
        (C::InternationalRecognition, 69.0, 35, 20, 40, Moderate, false),
        // Institution
        (C::RuleOfLaw, 92.0, 70, 40, 75, High, false),
        (C::IndependentJudiciary, 88.0, 65, 40, 75, High, false),
        (C::ProfessionalBureaucracy, 84.0, 60, 45, 70, High, false),
        (C::FreePress, 79.0, 30, 20, 45, Moderate, false),
        (C::BicameralLegislature, 73.0, 55, 40, 60, Moderate, false),
        (C::UnicameralLegislature, 71.0, 40, 30, 50, Moderate, false),
        (C::ConstitutionalCourt, 83.0, 60, 35, 70, High, false),
        (C::CentralBank, 85.0, 70, 30, 70, High, false),
        (C::Ombudsman, 72.0, 25, 15, 45, Low, false),
        (C::ElectoralCommission, 77.0, 40, 25, 55, Moderate, false),
        (C::Monarchy, 62.0, 20, 35, 30, Low, false),
        (C::StateParty, 66.0, 35, 30, 45, Moderate, false),
        // Control mechanism
        (C::ChecksAndBalances, 87.0, 55, 30, 70, High, false),
        (C::SurveillanceState, 71.0, 80, 60, 70, High, true),
        (C::Censorship, 56.0, 40, 35, 45, Moderate, true),
        (C::SecretPolice, 59.0, 45, 45, 50, Moderate, false),
        (C::TermLimits, 75.0, 15, 10, 40, Low, false),
        (C::JudicialReview, 82.0, 45, 25, 65, High, false),
        (C::CivilianOversight, 78.0, 35, 25, 55, Moderate, false),
        (C::MartialLaw, 50.0, 30, 50, 40, Moderate, false),
        (C::TransparencyLaws, 80.0, 30, 20, 50, Moderate, false),
        (C::AntiCorruptionAgency, 81.0, 50, 35, 60, Moderate, false),
        // Economic governance
        (C::FreeMarket, 80.0, 35, 20, 50, Moderate, false),
        (C::PlannedEconomy, 58.0, 75, 60, 80, Extreme, false),
        (C::MixedEconomy, 79.0, 50, 35, 60, Moderate, false),
        (C::StateCapitalism, 74.0, 65, 45, 70, High, false),
        (C::WelfareState, 76.0, 85, 70, 75, High, false),
        (C::ProgressiveTaxation, 73.0, 40, 30, 60, Moderate, false),
        (C::FlatTaxation, 68.0, 25, 15, 40, Low, false),
        (C::Protectionism, 60.0, 30, 25, 40, Low, false),
        (C::FreeTrade, 77.0, 30, 15, 45, Moderate, false),
        (C::CooperativeEconomy, 65.0, 45, 30, 50, Moderate, false),
        // Administrative efficiency
        (C::DigitalGovernment, 83.0, 80, 40, 70, High, true),
        (C::MeritBasedCivilService, 86.0, 55, 35, 65, Moderate, false),
        (C::PatronageSystem, 45.0, 15, 40, 20, Low, false),
        (C::DecentralizedAdministration, 72.0, 50, 35, 55, Moderate, false),
        (C::EProcurement, 78.0, 55, 25, 60, Moderate, true),
        (C::PerformanceBudgeting, 75.0, 40, 25, 60, Moderate, false),
        (C::RegulatoryStreamlining, 74.0, 35, 15, 50, Moderate, false),
        (C::CentralPlanningOffice, 63.0, 60, 45, 70, High, false),
        (C::OpenData, 76.0, 45, 20, 55, Moderate, true),
        // Social policy
        (C::UniversalHealthcare, 81.0, 90, 80, 75, Extreme, false),
        (C::UniversalEducation, 85.0, 85, 70, 70, High, false),
        (C::UniversalBasicIncome, 66.0, 95, 90, 70, High, true),
        (C::SocialSecurity, 77.0, 70, 65, 65, High, false),
        (C::LaborProtections, 72.0, 30, 20, 45, Moderate, false),
        (C::MinorityRights, 78.0, 25, 15, 45, Moderate, false),
        (C::ReligiousFreedom, 79.0, 15, 10, 35, Low, false),
        (C::StateReligion, 58.0, 20, 20, 25, Low, false),
        (C::AssimilationPolicy, 55.0, 35, 30, 40, Moderate, false),
        (C::Multiculturalism, 71.0, 40, 30, 50, Moderate, false),
        // International relations
        (C::Multilateralism, 78.0, 40, 30, 55, Moderate, false),
        (C::Isolationism, 52.0, 15, 10, 25, Low, false),
        (C::NonAlignment, 64.0, 20, 15, 35, Low, false),
        (C::MilitaryAlliance, 74.0, 60, 50, 60, High, false),
        (C::EconomicUnion, 80.0, 70, 40, 70, High, false),
        (C::Expansionism, 56.0, 75, 65, 65, High, false),
        (C::SoftPowerDiplomacy, 76.0, 35, 30, 50, Moderate, false),
        (C::Neutrality, 67.0, 15, 15, 35, Low, false),
        (C::SanctionsRegime, 61.0, 30, 25, 50, Moderate, false),
        // Innovation
        (C::ResearchFunding, 82.0, 70, 55, 65, High, true),
        (C::IntellectualProperty, 73.0, 35, 25, 55, Moderate, false),
        (C::OpenInnovation, 75.0, 30, 20, 50, Moderate, true),
        (C::TechnologyTransfer, 72.0, 45, 25, 60, Moderate, true),
        (C::StartupEcosystem, 77.0, 50, 30, 60, Moderate, true),
        (C::StateResearchPrograms, 74.0, 80, 60, 75, High, true),
        (C::InnovationSandbox, 70.0, 25, 15, 55, Moderate, true),
        (C::AcademicFreedom, 81.0, 10, 10, 40, Low, false),
        // Crisis management
        (C::EmergencyPowers, 65.0, 10, 15, 35, Low, false),
        (C::DisasterResponseAgency, 80.0, 60, 40, 60, Moderate, false),
        (C::StrategicReserves, 74.0, 65, 35, 50, Moderate, false),
        (C::CivilDefense, 71.0, 50, 35, 55, Moderate, false),
        (C::PandemicPreparedness, 78.0, 60, 45, 65, High, true),
        (C::ContinuityOfGovernment, 76.0, 45, 25, 60, High, false),
        (C::RapidResponseForce, 73.0, 70, 55, 60, High, false),
        (C::EarlyWarningSystem, 82.0, 65, 30, 65, High, true),
        (C::CrisisCommunication, 75.0, 25, 15, 45, Moderate, true),
    ];

    rows.into_iter()
        .map(|(component, base, implementation, maintenance, capacity, tier, tech)| {
            ComponentDefinition::new(component, base, implementation, maintenance, capacity, tier, tech)
        })
        .collect()
}

/// Every reference relationship rule
///
/// # Errors
/// Propagates [`CatalogLoadError`] from entry construction; the table is
/// covered by tests, so this only fails if the table itself is edited badly.
pub fn relationship_entries() -> Result<Vec<RelationshipEntry>, CatalogLoadError> {
    use RelationshipKind::{Additive, Conflicting};

    let rules: [(ComponentType, ComponentType, RelationshipKind, &str); 91] = [
        // Synergies
        (C::DemocraticProcess, C::ElectoralLegitimacy, Additive, "Elections give democratic decisions a popular mandate"),
        (C::DemocraticProcess, C::RuleOfLaw, Additive, "Majorities operate within predictable legal limits"),
        (C::ElectoralLegitimacy, C::RuleOfLaw, Additive, "Lawful elections are trusted by winners and losers alike"),
        (C::DemocraticProcess, C::FreePress, Additive, "Informed voters make better collective choices"),
        (C::DemocraticProcess, C::ElectoralCommission, Additive, "Independent administration keeps votes credible"),
        (C::ElectoralLegitimacy, C::ElectoralCommission, Additive, "Certified results strengthen the electoral mandate"),
        (C::RuleOfLaw, C::IndependentJudiciary, Additive, "Courts free from interference enforce the law evenly"),
        (C::IndependentJudiciary, C::JudicialReview, Additive, "Independent judges can strike down unlawful acts"),
        (C::ConstitutionalCourt, C::JudicialReview, Additive, "A dedicated court gives review a clear home"),
        (C::SeparationOfPowers, C::ChecksAndBalances, Additive, "Separated branches have the means to restrain each other"),
        (C::ChecksAndBalances, C::IndependentJudiciary, Additive, "The judiciary acts as a reliable check"),
        (C::ConstitutionalLegitimacy, C::ConstitutionalCourt, Additive, "A guardian court defends the constitutional order"),
        (C::ConstitutionalLegitimacy, C::RuleOfLaw, Additive, "Authority derived from law reinforces legal supremacy"),
        (C::FederalPower, C::Subsidiarity, Additive, "Decisions settle at the lowest competent level"),
        (C::DevolvedPower, C::DecentralizedAdministration, Additive, "Devolved authority comes with local delivery capacity"),
        (C::ConsociationalPower, C::Multiculturalism, Additive, "Power sharing reflects a plural society"),
        (C::ConsociationalPower, C::ConsensusProcess, Additive, "Segment elites govern by agreement"),
        (C::DeliberativeProcess, C::FreePress, Additive, "Open media feeds public deliberation"),
        (C::RepresentativeDemocracy, C::BicameralLegislature, Additive, "Two chambers represent people and regions"),
        (C::RepresentativeDemocracy, C::ElectoralLegitimacy, Additive, "Representatives owe their seats to voters"),
        (C::DirectDemocracy, C::DigitalGovernment, Additive, "Digital channels make frequent referendums practical"),
        (C::TechnocraticProcess, C::MeritBasedCivilService, Additive, "Expert rule is staffed by qualified officials"),
        (C::TechnocraticProcess, C::PerformanceLegitimacy, Additive, "Competent outcomes justify expert decision making"),
        (C::ProfessionalBureaucracy, C::MeritBasedCivilService, Additive, "Merit hiring sustains a professional service"),
        (C::PerformanceBudgeting, C::PerformanceLegitimacy, Additive, "Measured results back the claim to govern well"),
        (C::TransparencyLaws, C::FreePress, Additive, "Access to information gives journalists material"),
        (C::TransparencyLaws, C::OpenData, Additive, "Disclosure duties are met through published datasets"),
        (C::AntiCorruptionAgency, C::Ombudsman, Additive, "Complaints reach investigators with teeth"),
        (C::AntiCorruptionAgency, C::EProcurement, Additive, "Auditable tenders expose kickbacks"),
        (C::DigitalGovernment, C::OpenData, Additive, "Digital services publish data as a by-product"),
        (C::DigitalGovernment, C::EProcurement, Additive, "Procurement runs on shared digital infrastructure"),
        (C::CentralBank, C::FreeMarket, Additive, "Stable money lets prices coordinate markets"),
        (C::MixedEconomy, C::WelfareState, Additive, "Market output funds social provision"),
        (C::WelfareState, C::UniversalHealthcare, Additive, "Healthcare is a core welfare guarantee"),
        (C::WelfareState, C::SocialSecurity, Additive, "Pensions and insurance anchor the welfare system"),
        (C::ProgressiveTaxation, C::UniversalBasicIncome, Additive, "Progressive revenue finances a universal floor"),
        (C::FreeTrade, C::EconomicUnion, Additive, "A union removes internal trade barriers"),
        (C::FreeTrade, C::Multilateralism, Additive, "Trade rules are negotiated in multilateral forums"),
        (C::Multilateralism, C::SoftPowerDiplomacy, Additive, "Coalitions amplify attraction-based influence"),
        (C::Multilateralism, C::InternationalRecognition, Additive, "Active membership confers standing abroad"),
        (C::MilitaryAlliance, C::RapidResponseForce, Additive, "Deployable forces honour alliance commitments"),
        (C::ResearchFunding, C::AcademicFreedom, Additive, "Funded researchers follow evidence where it leads"),
        (C::ResearchFunding, C::UniversalEducation, Additive, "An educated population supplies researchers"),
        (C::OpenInnovation, C::StartupEcosystem, Additive, "Shared knowledge lowers barriers for new firms"),
        (C::InnovationSandbox, C::RegulatoryStreamlining, Additive, "Lean rules let pilots graduate quickly"),
        (C::TechnologyTransfer, C::StateResearchPrograms, Additive, "Public research reaches industry"),
        (C::StartupEcosystem, C::IntellectualProperty, Additive, "Protected inventions attract venture capital"),
        (C::EarlyWarningSystem, C::DisasterResponseAgency, Additive, "Warnings trigger responses before impact"),
        (C::PandemicPreparedness, C::UniversalHealthcare, Additive, "A universal system scales up in outbreaks"),
        (C::CivilDefense, C::CrisisCommunication, Additive, "Clear instructions mobilize trained civilians"),
        (C::ContinuityOfGovernment, C::ProfessionalBureaucracy, Additive, "Career officials keep the state running"),
        (C::MinorityRights, C::ReligiousFreedom, Additive, "Protecting minorities includes protecting faiths"),
        (C::TermLimits, C::ElectoralLegitimacy, Additive, "Regular turnover renews the mandate"),
        (C::CivilianOversight, C::RapidResponseForce, Additive, "Accountable forces can be trusted with speed"),
        (C::TraditionalLegitimacy, C::Monarchy, Additive, "Custom sustains the crown"),
        (C::HereditaryLegitimacy, C::Monarchy, Additive, "Succession rules settle who reigns"),
        (C::ReligiousLegitimacy, C::TheocraticProcess, Additive, "Clerical rule draws on divine sanction"),
        (C::CharismaticLegitimacy, C::AutocraticProcess, Additive, "A magnetic leader centralizes decisions"),
        (C::StateParty, C::PlannedEconomy, Additive, "The party apparatus transmits the plan"),
        (C::CentralizedPower, C::UnitaryState, Additive, "A single centre governs a single state"),
        (C::StateCapitalism, C::StateResearchPrograms, Additive, "State firms commercialize public research"),
        (C::PlannedEconomy, C::CentralPlanningOffice, Additive, "A planning office drafts and tracks targets"),
        // Conflicts
        (C::DemocraticProcess, C::AutocraticProcess, Conflicting, "Popular decision and one-person rule cannot both prevail"),
        (C::FreePress, C::Censorship, Conflicting, "A censored press is not free"),
        (C::DemocraticProcess, C::SecretPolice, Conflicting, "Fear of the secret police chills political participation"),
        (C::IndependentJudiciary, C::MartialLaw, Conflicting, "Military tribunals displace ordinary courts"),
        (C::RuleOfLaw, C::PatronageSystem, Conflicting, "Favours for loyalty bypass the law"),
        (C::MeritBasedCivilService, C::PatronageSystem, Conflicting, "Appointments cannot be both earned and granted"),
        (C::FreeMarket, C::PlannedEconomy, Conflicting, "Prices and quotas compete to allocate resources"),
        (C::FreeTrade, C::Protectionism, Conflicting, "Tariff walls contradict open trade commitments"),
        (C::Isolationism, C::Multilateralism, Conflicting, "Withdrawal undermines collective engagement"),
        (C::Neutrality, C::MilitaryAlliance, Conflicting, "Alliance obligations end neutrality"),
        (C::Expansionism, C::SoftPowerDiplomacy, Conflicting, "Conquest erodes the appeal soft power relies on"),
        (C::ReligiousFreedom, C::StateReligion, Conflicting, "An established faith disadvantages others"),
        (C::Multiculturalism, C::AssimilationPolicy, Conflicting, "Pluralism and enforced conformity pull apart"),
        (C::CentralizedPower, C::Subsidiarity, Conflicting, "The centre keeps what subsidiarity would hand down"),
        (C::FederalPower, C::UnitaryState, Conflicting, "Shared sovereignty contradicts a single centre"),
        (C::SeparationOfPowers, C::FusionOfPowers, Conflicting, "Branches cannot be both separate and merged"),
        (C::AcademicFreedom, C::Censorship, Conflicting, "Scholarship cannot be both free and censored"),
        (C::TransparencyLaws, C::SecretPolice, Conflicting, "Covert agencies resist disclosure"),
        (C::ProgressiveTaxation, C::FlatTaxation, Conflicting, "A tax schedule cannot be both graduated and flat"),
        (C::ElectoralLegitimacy, C::HereditaryLegitimacy, Conflicting, "Birthright and the ballot compete as title to rule"),
        (C::TermLimits, C::CharismaticLegitimacy, Conflicting, "Personal rule chafes against mandated exits"),
        (C::AntiCorruptionAgency, C::OligarchicPower, Conflicting, "Investigators collide with entrenched elites"),
        (C::ChecksAndBalances, C::EmergencyPowers, Conflicting, "Emergency rule suspends ordinary restraints"),
        (C::DirectDemocracy, C::TechnocraticProcess, Conflicting, "Popular votes override expert judgement"),
        (C::NonAlignment, C::MilitaryAlliance, Conflicting, "Bloc membership ends non-alignment"),
        (C::OpenInnovation, C::IntellectualProperty, Conflicting, "Exclusive rights restrict knowledge sharing"),
        (C::DemocraticProcess, C::StateParty, Conflicting, "A single legal party forecloses electoral choice"),
        (C::MinorityRights, C::AssimilationPolicy, Conflicting, "Forced conformity erodes minority protections"),
        (C::ConfederalPower, C::CentralizedPower, Conflicting, "Sovereign members resist central command"),
    ];

    rules
        .into_iter()
        .map(|(a, b, kind, description)| {
            let magnitude = match kind {
                Additive => SYNERGY_MAGNITUDE,
                Conflicting => CONFLICT_MAGNITUDE,
            };
            RelationshipEntry::new(a, b, kind, magnitude, description)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(component_definitions().len(), 106);
        assert_eq!(relationship_entries().unwrap().len(), 91);
    }

    #[test]
    fn test_definitions_follow_canonical_order() {
        let order: Vec<_> = component_definitions().iter().map(|d| d.component).collect();
        assert_eq!(order, ComponentType::ALL.to_vec());
    }

    #[test]
    fn test_no_pair_defined_twice() {
        let entries = relationship_entries().unwrap();
        let pairs: HashSet<_> = entries.iter().map(|e| e.pair()).collect();
        assert_eq!(pairs.len(), entries.len());
    }

    #[test]
    fn test_split_between_kinds() {
        let entries = relationship_entries().unwrap();
        let synergies = entries.iter().filter(|e| e.is_additive()).count();
        assert_eq!(synergies, 62);
        assert_eq!(entries.len() - synergies, 29);
    }
}
