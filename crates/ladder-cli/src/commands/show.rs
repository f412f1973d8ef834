//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use ladder_config::Registry;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, registry: &Registry, formatter: &Formatter) -> Result<()> {
    let table = registry.table(&args.table)?;
    println!("{}", formatter.format_table(&args.table, table)?);
    Ok(())
}
