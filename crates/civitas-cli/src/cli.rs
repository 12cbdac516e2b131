//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Civitas - score governance designs built from atomic components.
#[derive(Debug, Parser)]
#[command(name = "civitas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CIVITAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog file (.toml or .json) to use instead of the built-in one
    #[arg(long, global = true, env = "CIVITAS_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a selection and compute its effectiveness
    Score(ScoreArgs),

    /// Check a selection against the rules without scoring it
    Validate(ValidateArgs),

    /// Score several selections and rank them
    Compare(CompareArgs),

    /// List catalog components
    Components(ComponentsArgs),

    /// Show the synergies and conflicts of one component
    Relations(RelationsArgs),

    /// Write the active catalog as a document
    Export(ExportArgs),
}

/// Rule overrides shared by the selection commands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct RuleArgs {
    /// Report missing required categories as warnings instead of errors
    #[arg(long, conflicts_with = "preview")]
    pub lenient: bool,

    /// Accept any non-empty selection (no size floor, no category rules)
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Component identifiers (e.g. RULE_OF_LAW, rule-of-law)
    #[arg(required = true, value_delimiter = ',')]
    pub components: Vec<String>,

    #[command(flatten)]
    pub rules: RuleArgs,

    /// Also show cost and capacity totals
    #[arg(short, long)]
    pub profile: bool,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Component identifiers
    #[arg(required = true, value_delimiter = ',')]
    pub components: Vec<String>,

    #[command(flatten)]
    pub rules: RuleArgs,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Selections to rank, each a comma-separated list of components
    #[arg(required = true, num_args = 2..)]
    pub selections: Vec<String>,

    #[command(flatten)]
    pub rules: RuleArgs,
}

/// Arguments for the components command.
#[derive(Debug, Parser)]
pub struct ComponentsArgs {
    /// Only list components in this category (e.g. "decision process")
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the relations command.
#[derive(Debug, Parser)]
pub struct RelationsArgs {
    /// Component identifier
    pub component: String,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output file; format follows the extension. Prints to stdout if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
