//! Validate command implementation.

use super::Context;
use crate::cli::ValidateArgs;
use crate::error::Result;

/// Execute the validate command.
pub fn execute_validate(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let selection = ctx.select(&args.components, args.rules)?;
    println!("{}", ctx.formatter.format_selection(&selection)?);
    Ok(())
}
