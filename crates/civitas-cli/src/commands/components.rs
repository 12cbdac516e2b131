//! Components command implementation.

use super::Context;
use crate::cli::ComponentsArgs;
use crate::error::{CliError, Result};
use civitas_domain::Category;

/// Execute the components command.
pub fn execute_components(args: ComponentsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.bundle.catalog();

    let definitions: Vec<_> = match args.category.as_deref() {
        Some(name) => {
            let category = Category::parse(name)
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown category: {}", name)))?;
            catalog.in_category(category).collect()
        }
        None => catalog.iter().collect(),
    };

    println!("{}", ctx.formatter.format_components(&definitions)?);
    Ok(())
}
