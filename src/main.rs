use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use contact_book::cli::{
    handle_backup_command, handle_export_command, handle_history_command, run_shell,
    BackupCommands, ExportFormat,
};
use contact_book::config::{paths::ContactPaths, settings::Settings};
use contact_book::display::format_congratulations;
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal contact manager with birthday reminders",
    long_about = "Keeps your contacts' phone numbers and birthdays, and tells you \
                  whom to congratulate in the coming days. Run without a \
                  subcommand to start the interactive assistant."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assistant (default)
    Shell,

    /// Show upcoming birthdays
    Birthdays {
        /// Days to look ahead (defaults to the configured horizon)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Export all contacts to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show recent contact changes
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ContactPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_shell(storage, settings, stdin.lock(), &mut stdout)?;
        }
        Some(Commands::Birthdays { days }) => {
            let book = storage.load_book()?;
            let days = days.unwrap_or(settings.birthday_horizon_days);
            println!("{}", format_congratulations(&book.upcoming_birthdays(days)?));
        }
        Some(Commands::Export { output, format }) => {
            handle_export_command(&storage, &output, format)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, &settings, cmd)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, count)?;
        }
        Some(Commands::Config) => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Contacts file:    {}", paths.contacts_file().display());
            println!("Audit log:        {}", storage.audit().path().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Birthday horizon: {} day(s)", settings.birthday_horizon_days);
            println!("  Backup on exit:   {}", settings.backup_on_exit);
            println!("  Audit enabled:    {}", settings.audit_enabled);
            println!(
                "  Backup retention: {} daily, {} monthly",
                settings.backup_retention.daily_count, settings.backup_retention.monthly_count
            );
        }
    }

    Ok(())
}
