//! Civitas CLI - score governance designs from the command line.

use anyhow::Context as _;
use civitas_catalog::CatalogBundle;
use civitas_cli::commands::{self, Context};
use civitas_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;

    // --catalog overrides the config file
    let catalog_path = cli.catalog.or(config.catalog_path);
    let bundle = CatalogBundle::load_or_reference(catalog_path.as_deref()).with_context(|| match &catalog_path {
        Some(path) => format!("Failed to load catalog {}", path.display()),
        None => "Failed to build reference catalog".to_string(),
    })?;
    tracing::debug!(version = bundle.version(), "Catalog ready");

    let ctx = Context {
        bundle,
        validation: config.validation,
        formatter: Formatter::new(format, color_enabled),
    };

    match cli.command {
        Command::Score(args) => commands::execute_score(args, &ctx)?,
        Command::Validate(args) => commands::execute_validate(args, &ctx)?,
        Command::Compare(args) => commands::execute_compare(args, &ctx)?,
        Command::Components(args) => commands::execute_components(args, &ctx)?,
        Command::Relations(args) => commands::execute_relations(args, &ctx)?,
        Command::Export(args) => commands::execute_export(args, &ctx)?,
    }

    Ok(())
}
