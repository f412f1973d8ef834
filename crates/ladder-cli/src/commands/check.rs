//! Check command implementation.

use crate::error::Result;
use crate::output::Formatter;
use ladder_config::Registry;

/// Execute the check command.
///
/// Loading the registry already validated every table; this reports what was found.
pub fn execute_check(registry: &Registry, formatter: &Formatter) -> Result<()> {
    for (name, table) in registry.iter() {
        let gaps = table.map.gaps().len();
        if gaps > 0 {
            tracing::info!(table = %name, gaps, "Table has uncovered ranges");
        }
    }

    println!("{}", formatter.format_check(registry)?);
    Ok(())
}
