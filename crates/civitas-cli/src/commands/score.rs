//! Score command implementation.

use super::Context;
use crate::cli::ScoreArgs;
use crate::error::Result;
use civitas_engine::EffectivenessCalculator;

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, ctx: &Context) -> Result<()> {
    let selection = ctx.select(&args.components, args.rules)?;

    let calculator = EffectivenessCalculator::new(ctx.bundle.catalog(), ctx.bundle.registry());
    let result = calculator.calculate(&selection);
    let profile = args.profile.then(|| calculator.profile(&selection));

    println!(
        "{}",
        ctx.formatter.format_score(&selection, &result, profile.as_ref())?
    );

    Ok(())
}
