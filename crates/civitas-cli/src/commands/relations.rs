//! Relations command implementation.

use super::{parse_component, Context};
use crate::cli::RelationsArgs;
use crate::error::Result;

/// Execute the relations command.
pub fn execute_relations(args: RelationsArgs, ctx: &Context) -> Result<()> {
    let component = parse_component(&args.component)?;
    let entries: Vec<_> = ctx.bundle.registry().relationships_for(component).collect();

    println!("{}", ctx.formatter.format_relations(component, &entries)?);
    Ok(())
}
