//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use civitas_domain::{ComponentDefinition, ComponentType, RelationshipEntry};
use civitas_engine::{EffectivenessResult, RankedResult, SelectionProfile};
use civitas_validator::{Selection, SelectionWarning, ValidationError, Violation};
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a scored selection.
    pub fn format_score(
        &self,
        selection: &Selection,
        result: &EffectivenessResult,
        profile: Option<&SelectionProfile>,
    ) -> Result<String> {
        if self.format == OutputFormat::Json {
            let value = json!({
                "selection": selection,
                "result": result,
                "profile": profile,
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut sections = Vec::new();

        let mut builder = Builder::default();
        builder.push_record(["Measure", "Value"]);
        builder.push_record(["Components".to_string(), result.component_count.to_string()]);
        builder.push_record(["Pairs evaluated".to_string(), result.pairs_evaluated.to_string()]);
        builder.push_record(["Base effectiveness".to_string(), format!("{:.2}", result.base_effectiveness)]);
        builder.push_record([
            "Synergy bonus".to_string(),
            format!("+{:.2} ({})", result.synergy_bonus, result.synergy_count),
        ]);
        builder.push_record([
            "Conflict penalty".to_string(),
            format!("-{:.2} ({})", result.conflict_penalty, result.conflict_count),
        ]);
        builder.push_record(["Raw total".to_string(), format!("{:.2}", result.raw_total)]);
        builder.push_record(["Total".to_string(), self.score_text(result.total_effectiveness)]);
        sections.push(finish(builder));

        if !result.fired_relationships.is_empty() {
            sections.push(self.relationship_table(&result.fired_relationships));
        }

        if let Some(profile) = profile {
            sections.push(profile_table(profile));
        }

        for warning in selection.warnings() {
            sections.push(self.warning(&describe_warning(warning)));
        }

        if result.is_capped() {
            sections.push(self.info(&format!(
                "Score capped; {:.2} points above the maximum",
                result.clamp_adjustment()
            )));
        } else if result.is_floored() {
            sections.push(self.info(&format!(
                "Score floored; {:.2} points below the minimum",
                -result.clamp_adjustment()
            )));
        }

        sections.push(format!("Catalog version: {}", result.catalog_version));
        Ok(sections.join("\n"))
    }

    /// Format an accepted selection.
    pub fn format_selection(&self, selection: &Selection) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(selection)?);
        }

        let names: Vec<&str> = selection.iter().map(|c| c.as_str()).collect();
        let mut lines = vec![self.success(&format!(
            "Selection is valid ({} components)",
            selection.len()
        ))];
        lines.push(names.join(", "));
        for warning in selection.warnings() {
            lines.push(self.warning(&describe_warning(warning)));
        }
        Ok(lines.join("\n"))
    }

    /// Format every violation of a rejected selection.
    pub fn format_rejection(&self, error: &ValidationError) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(error)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Rule", "Detail"]);
        for violation in error.violations() {
            builder.push_record([violation_rule(violation).to_string(), violation.to_string()]);
        }

        Ok(format!(
            "{}\n{}",
            self.error("Selection rejected"),
            finish(builder)
        ))
    }

    /// Format ranked selections, best first.
    pub fn format_ranking(&self, selections: &[Selection], ranked: &[RankedResult]) -> Result<String> {
        if self.format == OutputFormat::Json {
            let rows: Vec<_> = ranked
                .iter()
                .enumerate()
                .map(|(position, entry)| {
                    json!({
                        "rank": position + 1,
                        "input": entry.index + 1,
                        "components": selections.get(entry.index).map(|s| s.components()),
                        "result": entry.result,
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&rows)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Rank", "Input", "Total", "Raw", "Synergies", "Conflicts", "Components"]);
        for (position, entry) in ranked.iter().enumerate() {
            let components = selections
                .get(entry.index)
                .map(|s| s.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            builder.push_record([
                (position + 1).to_string(),
                (entry.index + 1).to_string(),
                self.score_text(entry.result.total_effectiveness),
                format!("{:.2}", entry.result.raw_total),
                entry.result.synergy_count.to_string(),
                entry.result.conflict_count.to_string(),
                components,
            ]);
        }

        Ok(finish(builder))
    }

    /// Format component definitions.
    pub fn format_components(&self, definitions: &[&ComponentDefinition]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(definitions)?);
        }

        if definitions.is_empty() {
            return Ok(self.colorize("No components found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Component", "Category", "Base", "Impl. cost", "Maint. cost", "Capacity", "Complexity", "Tech",
        ]);
        for def in definitions {
            builder.push_record([
                def.component.as_str().to_string(),
                def.category.label().to_string(),
                format!("{:.1}", def.base_effectiveness),
                def.implementation_cost.to_string(),
                def.maintenance_cost.to_string(),
                def.capacity_required.to_string(),
                def.complexity_tier.as_str().to_string(),
                if def.technology_required { "yes" } else { "no" }.to_string(),
            ]);
        }

        Ok(finish(builder))
    }

    /// Format the relationships of one component.
    pub fn format_relations(&self, component: ComponentType, entries: &[&RelationshipEntry]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(entries)?);
        }

        if entries.is_empty() {
            return Ok(self.colorize(&format!("{} has no curated relationships.", component), "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Partner", "Kind", "Magnitude", "Description"]);
        for entry in entries {
            let partner = entry
                .pair()
                .other(component)
                .map(|c| c.as_str())
                .unwrap_or_default();
            builder.push_record([
                partner.to_string(),
                self.kind_text(entry),
                format!("{:+.1}", entry.magnitude()),
                entry.description().to_string(),
            ]);
        }

        Ok(finish(builder))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn relationship_table(&self, entries: &[RelationshipEntry]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Pair", "Kind", "Magnitude", "Description"]);
        for entry in entries {
            builder.push_record([
                entry.pair().to_string(),
                self.kind_text(entry),
                format!("{:+.1}", entry.magnitude()),
                entry.description().to_string(),
            ]);
        }
        finish(builder)
    }

    fn kind_text(&self, entry: &RelationshipEntry) -> String {
        let color = if entry.is_additive() { "green" } else { "red" };
        self.colorize(entry.kind().as_str(), color)
    }

    fn score_text(&self, score: f64) -> String {
        let color = match score {
            s if s >= 75.0 => "green",
            s if s >= 50.0 => "yellow",
            _ => "red",
        };
        self.colorize(&format!("{:.2}", score), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn finish(builder: Builder) -> String {
    let mut table: Table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn profile_table(profile: &SelectionProfile) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Requirement", "Value"]);
    builder.push_record(["Implementation cost".to_string(), profile.implementation_cost.to_string()]);
    builder.push_record(["Maintenance cost".to_string(), profile.maintenance_cost.to_string()]);
    builder.push_record(["Peak capacity".to_string(), profile.peak_capacity_required.to_string()]);
    builder.push_record([
        "Max complexity".to_string(),
        profile
            .max_complexity
            .map(|tier| tier.as_str().to_string())
            .unwrap_or_else(|| "-".to_string()),
    ]);
    builder.push_record([
        "Technology".to_string(),
        if profile.technology_required { "required" } else { "not required" }.to_string(),
    ]);
    finish(builder)
}

/// Human-readable text for a validation warning.
pub fn describe_warning(warning: &SelectionWarning) -> String {
    match warning {
        SelectionWarning::DuplicateRemoved { component, occurrences } => {
            format!("{} listed {} times; counted once", component, occurrences)
        }
        SelectionWarning::MissingCategory { category } => {
            format!("No {} component selected", category)
        }
    }
}

fn violation_rule(violation: &Violation) -> &'static str {
    match violation {
        Violation::BelowMinimumSize { .. } => "minimum size",
        Violation::AboveMaximumSize { .. } => "maximum size",
        Violation::MissingRequiredCategory { .. } => "required category",
        Violation::UnknownComponentType { .. } => "unknown component",
    }
}
