//! Single-record CLI commands
//!
//! Indices are 0-based positions among the movement lines.

use std::path::PathBuf;

use clap::Subcommand;

use super::CliContext;
use crate::audit::AuditEntry;
use crate::display::format_movement_details;
use crate::error::MovResult;
use crate::models::MovementField;

/// Record subcommands
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Show every field of one movement
    Show {
        /// Movement file
        file: PathBuf,
        /// Movement index (0-based)
        index: usize,
    },
    /// Change one field of one movement
    Edit {
        /// Movement file
        file: PathBuf,
        /// Movement index (0-based)
        index: usize,
        /// Field: acquirer, movement-date, card, installments, value,
        /// sale-date, nsu, tax-id or order
        field: MovementField,
        /// New value; `value` takes a decimal amount such as 171.50
        value: String,
        /// Write the result here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remove one movement
    Delete {
        /// Movement file
        file: PathBuf,
        /// Movement index (0-based)
        index: usize,
        /// Write the result here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a record command
pub fn handle_record_command(ctx: &CliContext, cmd: RecordCommands) -> MovResult<()> {
    match cmd {
        RecordCommands::Show { file: path, index } => {
            let file = ctx.load(&path)?;
            let movement = file.movement(index)?;
            print!("{}", format_movement_details(index, movement, ctx.currency()));
        }
        RecordCommands::Edit {
            file: path,
            index,
            field,
            value,
            output,
        } => {
            let mut file = ctx.load(&path)?;
            let previous = file.edit(index, field, &value)?;
            let current = file.movement(index)?.field_text(field);

            println!(
                "Movement {}: {} changed from '{}' to '{}'",
                index, field, previous, current
            );
            println!(
                "Trailer: {} movements, total {}",
                file.trailer().record_count(),
                file.trailer().total_value().format_with_symbol(ctx.currency())
            );
            let change = AuditEntry::edit(&path, index, field.key(), &previous, &current);
            ctx.commit(&path, output.as_deref(), &file, change)?;
        }
        RecordCommands::Delete {
            file: path,
            index,
            output,
        } => {
            let mut file = ctx.load(&path)?;
            let removed = file.delete(index)?;

            println!(
                "Deleted movement {} ({})",
                index,
                removed.value().format_with_symbol(ctx.currency())
            );
            let change = AuditEntry::delete(&path, index, removed.encode());
            ctx.commit(&path, output.as_deref(), &file, change)?;
        }
    }

    Ok(())
}
