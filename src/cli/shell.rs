//! Interactive shell
//!
//! Line-oriented command loop over one address book. The shell owns the book
//! for the whole session, loads it on start and saves it on exit.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::backup::BackupManager;
use crate::config::settings::Settings;
use crate::display::{format_birthday, format_congratulations, format_contact_table, format_record};
use crate::error::{ContactError, ContactResult};
use crate::models::AddressBook;
use crate::services::{AddOutcome, ContactService};
use crate::storage::Storage;

pub const PROMPT: &str = "Enter a command: ";

pub const HELP_TEXT: &str = "Commands:
  hello                           - Greet the assistant
  add NAME [PHONE]                - Create a contact, or add a phone to an existing one
  change NAME OLD_PHONE NEW_PHONE - Replace a phone number
  phone NAME                      - Show a contact's phones
  remove-phone NAME PHONE         - Remove a phone number
  all                             - Show all contacts
  add-birthday NAME DD.MM.YYYY    - Set a contact's birthday
  show-birthday NAME              - Show a contact's birthday
  birthdays [DAYS]                - Show birthdays in the next DAYS days
  delete NAME                     - Delete a contact
  help                            - Show this list
  close, exit                     - Save and quit";

/// Split a line into a lowercased command word and verbatim arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Outcome of one shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message (if any) and read the next line
    Continue(String),
    /// Leave the loop
    Exit,
}

/// Shell session state
pub struct Shell {
    book: AddressBook,
    storage: Storage,
    settings: Settings,
}

impl Shell {
    pub fn new(book: AddressBook, storage: Storage, settings: Settings) -> Self {
        Self {
            book,
            storage,
            settings,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Execute one input line
    ///
    /// Errors are rendered into the reply; a bad command never ends the
    /// session.
    pub fn execute(&mut self, line: &str) -> Reply {
        let Some((command, args)) = parse_input(line) else {
            return Reply::Continue(String::new());
        };

        match command.as_str() {
            "close" | "exit" => Reply::Exit,
            _ => Reply::Continue(
                self.dispatch(&command, &args)
                    .unwrap_or_else(|e| e.to_string()),
            ),
        }
    }

    fn dispatch(&mut self, command: &str, args: &[String]) -> ContactResult<String> {
        let mut service = ContactService::new(&mut self.book, &self.storage);

        match command {
            "hello" => Ok("How can I help you?".to_string()),
            "help" => Ok(HELP_TEXT.to_string()),
            "add" => {
                let name = arg(args, 0, "add NAME [PHONE]")?;
                let phone = args.get(1).map(String::as_str);
                Ok(match service.add_contact(name, phone)? {
                    AddOutcome::Created(record) => {
                        format!("Contact added.\n{}", format_record(&record))
                    }
                    AddOutcome::Updated(record) => {
                        format!("Contact updated.\n{}", format_record(&record))
                    }
                })
            }
            "change" => {
                const USAGE: &str = "change NAME OLD_PHONE NEW_PHONE";
                let name = arg(args, 0, USAGE)?;
                let old = arg(args, 1, USAGE)?;
                let new = arg(args, 2, USAGE)?;
                let record = service.change_phone(name, old, new)?;
                Ok(format!("Phone updated.\n{}", format_record(&record)))
            }
            "phone" => {
                let name = arg(args, 0, "phone NAME")?;
                Ok(format_record(service.find(name)?))
            }
            "remove-phone" => {
                const USAGE: &str = "remove-phone NAME PHONE";
                let name = arg(args, 0, USAGE)?;
                let phone = arg(args, 1, USAGE)?;
                let record = service.remove_phone(name, phone)?;
                Ok(format!("Phone removed.\n{}", format_record(&record)))
            }
            "all" => Ok(format_contact_table(&self.book)),
            "add-birthday" => {
                const USAGE: &str = "add-birthday NAME DD.MM.YYYY";
                let name = arg(args, 0, USAGE)?;
                let date = arg(args, 1, USAGE)?;
                let record = service.set_birthday(name, date)?;
                Ok(format!("Birthday added.\n{}", format_record(&record)))
            }
            "show-birthday" => {
                let name = arg(args, 0, "show-birthday NAME")?;
                Ok(format_birthday(service.find(name)?))
            }
            "birthdays" => {
                let days = match args.first() {
                    Some(days) => days.parse::<u32>().map_err(|_| {
                        ContactError::Operation(format!("Invalid number of days '{}'", days))
                    })?,
                    None => self.settings.birthday_horizon_days,
                };
                Ok(format_congratulations(&service.upcoming_birthdays(days)?))
            }
            "delete" => {
                let name = arg(args, 0, "delete NAME")?;
                let removed = service.delete(name)?;
                Ok(format!("Contact deleted: {}", removed.name()))
            }
            _ => Ok("Invalid command.".to_string()),
        }
    }

    /// Persist the book
    pub fn save(&self) -> ContactResult<()> {
        self.storage.save_book(&self.book)
    }

    /// Take an exit backup when enabled
    ///
    /// Returns the backup path, or `None` when backups on exit are off.
    pub fn backup(&self) -> ContactResult<Option<PathBuf>> {
        if !self.settings.backup_on_exit {
            return Ok(None);
        }

        let manager = BackupManager::new(
            self.storage.paths().clone(),
            self.settings.backup_retention.clone(),
        );
        let (path, _pruned) = manager.create_backup_with_retention()?;
        Ok(Some(path))
    }
}

fn arg<'a>(args: &'a [String], index: usize, usage: &'static str) -> ContactResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(ContactError::Usage(usage))
}

/// Run the shell until `close`/`exit` or end of input
///
/// The book is saved on the way out. A corrupt contacts file is reported and
/// replaced by an empty book.
pub fn run_shell<R, W>(storage: Storage, settings: Settings, input: R, output: &mut W) -> ContactResult<()>
where
    R: BufRead,
    W: Write,
{
    let book = match storage.load_book() {
        Ok(book) => book,
        Err(e) => {
            writeln!(output, "Warning: {}", e)?;
            writeln!(output, "Starting with an empty address book.")?;
            AddressBook::new()
        }
    };
    let mut shell = Shell::new(book, storage, settings);

    writeln!(output, "Welcome to the assistant bot!")?;
    writeln!(output, "Type 'help' for a list of available commands")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };

        match shell.execute(&line?) {
            Reply::Continue(message) => {
                if !message.is_empty() {
                    writeln!(output, "{}", message)?;
                }
            }
            Reply::Exit => break,
        }
    }

    shell.save()?;
    if let Err(e) = shell.backup() {
        writeln!(output, "Warning: backup failed: {}", e)?;
    }
    writeln!(output, "Good bye!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ContactPaths;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_shell() -> (TempDir, Shell) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let shell = Shell::new(AddressBook::new(), storage, Settings::default());
        (temp_dir, shell)
    }

    fn reply_text(reply: Reply) -> String {
        match reply {
            Reply::Continue(message) => message,
            Reply::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input("  ADD Ann 1112223333 "),
            Some(("add".to_string(), vec!["Ann".to_string(), "1112223333".to_string()]))
        );
        assert_eq!(parse_input("Hello"), Some(("hello".to_string(), vec![])));
        assert_eq!(parse_input("   "), None);
    }

    #[test]
    fn test_arguments_keep_case() {
        let (_temp_dir, mut shell) = create_test_shell();
        shell.execute("ADD Ann 1112223333");
        assert!(shell.book().contains("Ann"));
        assert!(!shell.book().contains("ann"));
    }

    #[test]
    fn test_hello_and_unknown() {
        let (_temp_dir, mut shell) = create_test_shell();
        assert_eq!(reply_text(shell.execute("hello")), "How can I help you?");
        assert_eq!(reply_text(shell.execute("fly")), "Invalid command.");
        assert_eq!(reply_text(shell.execute("")), "");
    }

    #[test]
    fn test_exit_commands() {
        let (_temp_dir, mut shell) = create_test_shell();
        assert_eq!(shell.execute("exit"), Reply::Exit);
        assert_eq!(shell.execute("CLOSE"), Reply::Exit);
    }

    #[test]
    fn test_add_and_phone() {
        let (_temp_dir, mut shell) = create_test_shell();

        let reply = reply_text(shell.execute("add Ann 1112223333"));
        assert!(reply.starts_with("Contact added."));

        let reply = reply_text(shell.execute("add Ann 4445556666"));
        assert!(reply.starts_with("Contact updated."));

        assert_eq!(
            reply_text(shell.execute("phone Ann")),
            "Ann: Phones: 1112223333, 4445556666; Birthday: (not set)"
        );
    }

    #[test]
    fn test_errors_become_messages() {
        let (_temp_dir, mut shell) = create_test_shell();

        assert_eq!(
            reply_text(shell.execute("add")),
            "Not enough arguments. Usage: add NAME [PHONE]"
        );
        assert_eq!(
            reply_text(shell.execute("phone Ghost")),
            "Contact not found: Ghost"
        );
        assert!(reply_text(shell.execute("add Ann 123")).starts_with("Invalid phone number format"));
        assert!(!shell.book().contains("Ann"));

        shell.execute("add Bob 1112223333");
        assert!(reply_text(shell.execute("change Bob 9998887777 4445556666"))
            .starts_with("Phone not found"));
        assert!(reply_text(shell.execute("add-birthday Bob 31.02.2000"))
            .starts_with("Invalid date format"));
        assert!(reply_text(shell.execute("birthdays soon")).contains("Invalid number of days"));
    }

    #[test]
    fn test_change_and_remove_phone() {
        let (_temp_dir, mut shell) = create_test_shell();
        shell.execute("add Ann 1112223333");

        let reply = reply_text(shell.execute("change Ann 1112223333 4445556666"));
        assert!(reply.contains("4445556666"));

        shell.execute("remove-phone Ann 4445556666");
        assert!(shell.book().find("Ann").unwrap().phones().is_empty());
    }

    #[test]
    fn test_birthday_commands() {
        let (_temp_dir, mut shell) = create_test_shell();
        shell.execute("add Ann");

        assert_eq!(
            reply_text(shell.execute("show-birthday Ann")),
            "Ann has no birthday set."
        );
        shell.execute("add-birthday Ann 10.06.1990");
        assert_eq!(
            reply_text(shell.execute("show-birthday Ann")),
            "Birthday of Ann: 1990.06.10"
        );
    }

    #[test]
    fn test_birthdays_with_largest_horizon() {
        let (_temp_dir, mut shell) = create_test_shell();
        let today = chrono::Local::now().date_naive().format("%d.%m.%Y");
        shell.execute("add Ann");
        shell.execute(&format!("add-birthday Ann {}", today));

        let reply = reply_text(shell.execute("birthdays 4000000000"));
        assert!(reply.starts_with("Upcoming birthdays:"));
        assert!(reply.contains("Ann"));

        assert_eq!(reply_text(shell.execute("hello")), "How can I help you?");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, mut shell) = create_test_shell();
        shell.execute("add Ann 1112223333");

        assert_eq!(reply_text(shell.execute("delete Ann")), "Contact deleted: Ann");
        assert!(shell.book().is_empty());
        assert_eq!(
            reply_text(shell.execute("delete Ann")),
            "Contact not found: Ann"
        );
    }

    #[test]
    fn test_all() {
        let (_temp_dir, mut shell) = create_test_shell();
        assert_eq!(reply_text(shell.execute("all")), "No contacts found.");

        shell.execute("add Ann 1112223333");
        assert!(reply_text(shell.execute("all")).contains("Ann"));
    }

    #[test]
    fn test_run_shell_saves_on_exit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        let input = Cursor::new("hello\nadd Ann 1112223333\nexit\nadd Bob\n");
        let mut output = Vec::new();
        run_shell(storage, Settings::default(), input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Welcome to the assistant bot!"));
        assert!(text.contains("How can I help you?"));
        assert!(text.trim_end().ends_with("Good bye!"));

        let storage = Storage::new(paths.clone()).unwrap();
        let book = storage.load_book().unwrap();
        assert!(book.contains("Ann"));
        assert!(!book.contains("Bob"));

        let backups = BackupManager::new(paths, Default::default())
            .list_backups()
            .unwrap();
        assert_eq!(backups.len(), 1);
    }

    #[test]
    fn test_run_shell_saves_on_eof() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        let settings = Settings {
            backup_on_exit: false,
            ..Settings::default()
        };

        let mut output = Vec::new();
        run_shell(storage, settings, Cursor::new("add Ann\n"), &mut output).unwrap();

        assert!(String::from_utf8(output).unwrap().contains("Good bye!"));
        assert!(Storage::new(paths.clone()).unwrap().load_book().unwrap().contains("Ann"));
        assert!(!paths.backup_dir().read_dir().unwrap().any(|_| true));
    }

    #[test]
    fn test_run_shell_warns_on_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        std::fs::write(paths.contacts_file(), "not json").unwrap();

        let mut output = Vec::new();
        run_shell(storage, Settings::default(), Cursor::new("all\nexit\n"), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Warning:"));
        assert!(text.contains("No contacts found."));
    }
}
