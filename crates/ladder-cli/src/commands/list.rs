//! List command implementation.

use crate::error::Result;
use crate::output::Formatter;
use ladder_config::Registry;

/// Execute the list command.
pub fn execute_list(registry: &Registry, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_list(registry)?);
    Ok(())
}
