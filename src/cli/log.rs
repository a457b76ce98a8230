//! Operation log CLI command

use super::CliContext;
use crate::display::format_log_entries;
use crate::error::MovResult;

/// Print the most recent log entries
pub fn handle_log_command(ctx: &CliContext, limit: usize) -> MovResult<()> {
    let entries = ctx.logger().read_recent(limit)?;
    print!("{}", format_log_entries(&entries));
    let total = ctx.logger().entry_count()?;
    if total > entries.len() {
        println!("({} of {} entries shown)", entries.len(), total);
    }
    Ok(())
}
