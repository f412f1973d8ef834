//! Lookup command implementation.

use crate::cli::LookupArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use ladder_config::Registry;

/// Execute the lookup command.
///
/// A value outside every bucket is reported, not treated as a failure.
pub fn execute_lookup(args: LookupArgs, registry: &Registry, formatter: &Formatter) -> Result<()> {
    if args.value.is_nan() {
        return Err(CliError::InvalidInput("Value must be a number".to_string()));
    }

    let table = registry.table(&args.table)?;
    let hit = table.map.get_interval(&args.value);

    tracing::debug!(
        table = %args.table,
        value = args.value,
        hit = hit.is_some(),
        "Lookup"
    );

    println!("{}", formatter.format_lookup(&args.table, args.value, hit)?);
    Ok(())
}
