//! Export command implementation.

use super::Context;
use crate::cli::ExportArgs;
use crate::error::Result;
use civitas_catalog::DocumentFormat;

/// Execute the export command.
pub fn execute_export(args: ExportArgs, ctx: &Context) -> Result<()> {
    let document = ctx.bundle.to_document();
    let format = export_format(&args)?;
    let rendered = document.render(format)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            eprintln!(
                "{}",
                ctx.formatter.success(&format!(
                    "Exported catalog {} to {}",
                    document.version,
                    path.display()
                ))
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// `--json` wins; otherwise the output extension decides, defaulting to TOML.
fn export_format(args: &ExportArgs) -> Result<DocumentFormat> {
    if args.json {
        return Ok(DocumentFormat::Json);
    }
    match &args.output {
        Some(path) => Ok(DocumentFormat::from_path(path)?),
        None => Ok(DocumentFormat::Toml),
    }
}
