//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive shell with the service
//! layer.

pub mod backup;
pub mod export;
pub mod history;
pub mod shell;

pub use backup::{handle_backup_command, BackupCommands};
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;
pub use shell::{parse_input, run_shell, Reply, Shell};
