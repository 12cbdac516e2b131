//! Compare command implementation.

use super::Context;
use crate::cli::CompareArgs;
use crate::error::Result;
use civitas_engine::EffectivenessCalculator;

/// Execute the compare command.
pub fn execute_compare(args: CompareArgs, ctx: &Context) -> Result<()> {
    let selections = args
        .selections
        .iter()
        .map(|raw| ctx.select(&split_selection(raw), args.rules))
        .collect::<Result<Vec<_>>>()?;

    let ranked = EffectivenessCalculator::new(ctx.bundle.catalog(), ctx.bundle.registry()).rank(&selections);
    println!("{}", ctx.formatter.format_ranking(&selections, &ranked)?);

    Ok(())
}

/// Split one comma-separated selection argument into component names.
fn split_selection(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_selection() {
        assert_eq!(
            split_selection(" RULE_OF_LAW, free-press ,,CENSORSHIP"),
            vec!["RULE_OF_LAW", "free-press", "CENSORSHIP"]
        );
        assert!(split_selection(" , ").is_empty());
    }
}
