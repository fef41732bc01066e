//! Interactive session.
//!
//! A [`Session`] owns one [`AddressBook`] for the lifetime of the process,
//! turns each input line into a [`Command`], runs it, and renders the result
//! (or the error) as a reply. Errors never end the session; only `exit` and
//! `close` do.

pub mod clock;
pub mod command;
mod repl;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{parse_input, Command};
pub use repl::run;

use crate::book::AddressBook;
use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::observability::MetricsTracker;
use tracing::{debug, info, warn};

/// What the interpreter should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next line.
    Continue(String),
    /// Print the reply and stop.
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(message) | Outcome::Exit(message) => message,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// One interpreter session and the address book it owns.
pub struct Session {
    book: AddressBook,
    config: Config,
    clock: Box<dyn Clock>,
    metrics: MetricsTracker,
    finished: bool,
}

impl Session {
    /// Create a session using the host's local date.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create a session with an explicit source of "today".
    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Self {
        info!(
            birthday_window_days = config.birthday_window_days,
            "Session started"
        );
        Self {
            book: AddressBook::new(),
            config,
            clock,
            metrics: MetricsTracker::new(),
            finished: false,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Whether [`finish`](Self::finish) has run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Log the session summary. Runs at most once, whether the session is
    /// left with `exit`/`close` or the input simply ends.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.metrics.log_summary();
        info!("Session ended");
    }

    /// Handle one line of user input.
    ///
    /// Every error is converted into a one-line reply here.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let Some((verb, args)) = parse_input(line) else {
            return Outcome::Continue(String::new());
        };

        let command = match Command::parse(&verb, args) {
            Ok(command) => command,
            Err(e) => {
                warn!(verb = %verb, error = %e, "Rejected command");
                self.metrics.track_command(&verb, false);
                return Outcome::Continue(e.to_string());
            }
        };

        debug!(verb = command.verb(), "Dispatching command");
        match self.dispatch(&command) {
            Ok(reply) if command == Command::Exit => {
                self.metrics.track_command(command.verb(), true);
                self.finish();
                Outcome::Exit(reply)
            }
            Ok(reply) => {
                self.metrics.track_command(command.verb(), true);
                Outcome::Continue(reply)
            }
            Err(e) => {
                warn!(verb = command.verb(), error = %e, "Command failed");
                self.metrics.track_command(command.verb(), false);
                Outcome::Continue(e.to_string())
            }
        }
    }

    fn dispatch(&mut self, command: &Command) -> CommandResult<String> {
        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add { name, phone } => self.add_contact(name, phone),
            Command::Change { name, phone } => self.change_contact(name, phone),
            Command::Phone { name } => self.show_phone(name),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday { name, date } => self.add_birthday(name, date),
            Command::ShowBirthday { name } => self.show_birthday(name),
            Command::Birthdays => Ok(self.upcoming_birthdays()),
            Command::Delete { name } => self.delete_contact(name),
            Command::Export => Ok(serde_json::to_string_pretty(&self.book)?),
            Command::Help => Ok(command::HELP.to_string()),
            Command::Exit => Ok("Good bye!".to_string()),
        }
    }

    /// Build a fresh record and store it, replacing any contact of that name.
    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;

        Ok(match self.book.add_record(record) {
            Some(_) => format!("Contact '{}' replaced.", name),
            None => {
                self.metrics.track_contact_added();
                format!("Contact '{}' added.", name)
            }
        })
    }

    /// Replace the phone list of an existing contact; the birthday is kept.
    fn change_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        let record = self.record_mut(name)?;
        record.replace_phones(phone)?;
        Ok(format!("Contact '{}' updated.", name))
    }

    fn show_phone(&self, name: &str) -> CommandResult<String> {
        let record = self.record(name)?;
        if record.phones().is_empty() {
            return Ok(format!("{} has no phone numbers.", name));
        }
        let phones = record
            .phones()
            .iter()
            .map(|phone| phone.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Ok(format!("{}: {}", name, phones))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts saved.".to_string();
        }
        self.book
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, name: &str, date: &str) -> CommandResult<String> {
        let record = self.record_mut(name)?;
        record.add_birthday(date)?;
        Ok(format!("Birthday for {} added.", name))
    }

    fn show_birthday(&self, name: &str) -> CommandResult<String> {
        let record = self.record(name)?;
        Ok(match record.birthday() {
            Some(birthday) => format!("{} birthday: {}", name, birthday),
            None => format!("{} has no birthday set.", name),
        })
    }

    fn upcoming_birthdays(&self) -> String {
        let today = self.clock.today();
        let upcoming = self
            .book
            .upcoming_birthdays_within(today, self.config.birthday_window_days);

        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }

        let mut lines = vec!["Upcoming birthdays:".to_string()];
        lines.extend(upcoming.iter().map(|entry| {
            format!(
                " Don't forget to congratulate {} on {}",
                entry.name,
                entry
                    .congratulation_date
                    .format(crate::domain::birthday::DISPLAY_FORMAT)
            )
        }));
        lines.join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> CommandResult<String> {
        self.book
            .delete(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        self.metrics.track_contact_deleted();
        Ok(format!("Contact '{}' deleted.", name))
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}
