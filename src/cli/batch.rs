//! Batch CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use super::CliContext;
use crate::audit::{AuditEntry, Operation};
use crate::display::{format_batch_summary, format_selection};
use crate::error::{MovError, MovResult};
use crate::models::Money;
use crate::selection::{IndexSet, SelectionEngine};
use crate::services::{parse_index_set, BatchService};

/// Batch subcommands
#[derive(Subcommand)]
pub enum BatchCommands {
    /// Keep only the listed movements
    Keep {
        /// Movement file
        file: PathBuf,
        /// Indices to keep (0-based, comma or space separated)
        #[arg(required = true, num_args = 1..)]
        indices: Vec<String>,
        /// Write the result here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remove the listed movements
    Delete {
        /// Movement file
        file: PathBuf,
        /// Indices to remove (0-based, comma or space separated)
        #[arg(required = true, num_args = 1..)]
        indices: Vec<String>,
        /// Write the result here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remove every movement from one acquirer
    DeleteAcquirer {
        /// Movement file
        file: PathBuf,
        /// Two-digit acquirer code
        code: String,
        /// Write the result here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Keep only movements whose values add up exactly to a target
    SelectValue {
        /// Movement file
        file: PathBuf,
        /// Target amount, e.g. 271.00 or 271,00
        target: String,
        /// Report the selection without changing the file
        #[arg(long)]
        dry_run: bool,
        /// Write the result here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a batch command
pub fn handle_batch_command(ctx: &CliContext, cmd: BatchCommands) -> MovResult<()> {
    match cmd {
        BatchCommands::Keep {
            file: path,
            indices,
            output,
        } => {
            let indices = parse_indices(&indices)?;
            let mut file = ctx.load(&path)?;
            let summary = BatchService::new(&mut file).keep_only(&indices)?;

            let change = AuditEntry::new(
                Operation::KeepOnly,
                Some(path.as_path()),
                format!(
                    "kept {:?}: kept {}, removed {}",
                    indices, summary.kept, summary.removed
                ),
            );
            print!("{}", format_batch_summary(&summary));
            ctx.commit(&path, output.as_deref(), &file, change)?;
        }
        BatchCommands::Delete {
            file: path,
            indices,
            output,
        } => {
            let indices = parse_indices(&indices)?;
            let mut file = ctx.load(&path)?;
            let summary = BatchService::new(&mut file).delete_selected(&indices)?;

            let change = AuditEntry::new(
                Operation::DeleteSelected,
                Some(path.as_path()),
                format!(
                    "deleted {:?}: kept {}, removed {}",
                    indices, summary.kept, summary.removed
                ),
            );
            print!("{}", format_batch_summary(&summary));
            ctx.commit(&path, output.as_deref(), &file, change)?;
        }
        BatchCommands::DeleteAcquirer {
            file: path,
            code,
            output,
        } => {
            let mut file = ctx.load(&path)?;
            let summary = BatchService::new(&mut file).delete_by_acquirer(&code)?;

            let change = AuditEntry::new(
                Operation::DeleteByAcquirer,
                Some(path.as_path()),
                format!(
                    "acquirer {}: kept {}, removed {}",
                    code.trim(),
                    summary.kept,
                    summary.removed
                ),
            );
            print!("{}", format_batch_summary(&summary));
            ctx.commit(&path, output.as_deref(), &file, change)?;
        }
        BatchCommands::SelectValue {
            file: path,
            target,
            dry_run,
            output,
        } => {
            let target = Money::parse(&target).map_err(|e| {
                MovError::Validation(format!(
                    "Invalid target amount '{}'. Use a format like '271.00'. Error: {}",
                    target, e
                ))
            })?;
            let engine = SelectionEngine::new(ctx.settings.selection);
            let mut file = ctx.load(&path)?;

            if dry_run {
                let outcome = engine.find_in_file(&file, target);
                print!("{}", format_selection(&outcome, ctx.currency()));
                return Ok(());
            }

            let (outcome, summary) = BatchService::new(&mut file).keep_exact_value(&engine, target)?;
            print!("{}", format_selection(&outcome, ctx.currency()));

            match outcome.selection() {
                Some(selection) => {
                    let change = AuditEntry::new(
                        Operation::SelectByValue,
                        Some(path.as_path()),
                        format!(
                            "target {}: kept {:?} via {}",
                            target, selection.indices, selection.strategy
                        ),
                    );
                    print!("{}", format_batch_summary(&summary));
                    ctx.commit(&path, output.as_deref(), &file, change)?;
                }
                None => ctx.audit(AuditEntry::new(
                    Operation::SelectByValue,
                    Some(path.as_path()),
                    format!("target {}: no exact combination", target),
                )),
            }
        }
    }

    Ok(())
}

fn parse_indices(args: &[String]) -> MovResult<IndexSet> {
    parse_index_set(&args.join(","))
}
