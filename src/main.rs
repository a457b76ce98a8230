use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use movedit::cli::{
    handle_batch_command, handle_log_command, handle_record_command, handle_show_command,
    handle_validate_command, BatchCommands, CliContext, RecordCommands, ShowArgs,
};
use movedit::config::{paths::MoveditPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "movedit",
    author = "Kaylee Beyene",
    version,
    about = "Editor for fixed-width settlement movement files",
    long_about = "movedit inspects and edits the fixed-width files card acquirers use \
                  to report settlement movements. Every change keeps the trailer's \
                  movement count and total in step with the movements, and every \
                  command is recorded in an operation log."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the header, movements and trailer of a file
    #[command(alias = "ls")]
    Show(ShowArgs),

    /// Check that a file is well formed and reconciled
    Validate {
        /// Movement file
        file: PathBuf,
    },

    /// Single movement commands
    #[command(subcommand)]
    Record(RecordCommands),

    /// Batch keep/delete commands
    #[command(subcommand)]
    Batch(BatchCommands),

    /// Show recent operation log entries
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MoveditPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = CliContext::new(&paths, settings);

    match cli.command {
        Some(Commands::Show(args)) => handle_show_command(&ctx, args)?,
        Some(Commands::Validate { file }) => handle_validate_command(&ctx, file)?,
        Some(Commands::Record(cmd)) => handle_record_command(&ctx, cmd)?,
        Some(Commands::Batch(cmd)) => handle_batch_command(&ctx, cmd)?,
        Some(Commands::Log { limit }) => handle_log_command(&ctx, limit)?,
        Some(Commands::Config) => {
            let limits = &ctx.settings.selection;
            println!("movedit Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!(
                "Settings file:  {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (defaults, not written)" }
            );
            println!("Operation log:  {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", ctx.settings.currency_symbol);
            println!("  Memo state budget:      {}", limits.memo_state_budget);
            println!("  Exhaustive max records: {}", limits.exhaustive_max_records);
            println!("  Exhaustive max size:    {}", limits.exhaustive_max_size);
            println!("  Greedy node budget:     {}", limits.greedy_node_budget);
        }
        None => {
            println!("movedit - settlement movement file editor");
            println!();
            println!("Run 'movedit --help' for usage information.");
        }
    }

    Ok(())
}
