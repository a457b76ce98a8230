//! Whole-file CLI commands: show and validate

use std::path::PathBuf;

use clap::Args;

use super::CliContext;
use crate::display::{format_file_summary, format_movement_table};
use crate::error::MovResult;
use crate::models::MovementFilter;

/// Arguments of `movedit show`
#[derive(Args)]
pub struct ShowArgs {
    /// Movement file
    pub file: PathBuf,
    /// Only movements from this acquirer code
    #[arg(short, long)]
    pub acquirer: Option<String>,
    /// Only movements with this movement date (YYYYMMDD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Only cards containing this text
    #[arg(short, long)]
    pub card: Option<String>,
    /// Only NSUs containing this text
    #[arg(short, long)]
    pub nsu: Option<String>,
}

impl ShowArgs {
    fn filter(&self) -> MovementFilter {
        MovementFilter {
            acquirer_code: self.acquirer.clone(),
            movement_date: self.date.clone(),
            card_contains: self.card.clone(),
            nsu_contains: self.nsu.clone(),
        }
    }
}

/// Print the header summary, the (filtered) movements and the trailer
pub fn handle_show_command(ctx: &CliContext, args: ShowArgs) -> MovResult<()> {
    let file = ctx.load(&args.file)?;
    let filter = args.filter();
    let indices = file.filter(&filter);

    print!("{}", format_file_summary(&file, ctx.currency()));
    println!();
    print!("{}", format_movement_table(&file, &indices, ctx.currency()));
    if !filter.is_empty() {
        println!();
        println!("{} of {} movements match.", indices.len(), file.len());
    }
    Ok(())
}

/// Load the file and report whether it is consistent
pub fn handle_validate_command(ctx: &CliContext, path: PathBuf) -> MovResult<()> {
    let file = ctx.load(&path)?;
    println!(
        "{} is valid: {} movements, total {}",
        path.display(),
        file.len(),
        file.total_value().format_with_symbol(ctx.currency())
    );
    Ok(())
}
