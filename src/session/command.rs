//! Tokenizer and command parser for the interpreter.

use crate::error::{CommandError, CommandResult};

const NAME_AND_PHONE: &str = "Give me name and phone please.";
const NAME_ONLY: &str = "Give me name please.";
const NAME_AND_DATE: &str = "Give me name and date please.";
const NO_ARGUMENTS: &str = "This command takes no arguments.";

/// One parsed interpreter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Export,
    Help,
    Exit,
}

/// Split a line into a lower-cased verb and its whitespace-separated
/// arguments. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((verb, args))
}

impl Command {
    /// Build a command from a verb and its arguments, checking arity.
    ///
    /// # Errors
    ///
    /// - `CommandError::UnknownCommand` for an unrecognised verb
    /// - `CommandError::Usage` when the argument count is wrong
    pub fn parse(verb: &str, args: Vec<String>) -> CommandResult<Self> {
        match verb {
            "hello" => no_args(args, Command::Hello),
            "add" => {
                let [name, phone] = exact::<2>(args, NAME_AND_PHONE)?;
                Ok(Command::Add { name, phone })
            }
            "change" => {
                let [name, phone] = exact::<2>(args, NAME_AND_PHONE)?;
                Ok(Command::Change { name, phone })
            }
            "phone" => {
                let [name] = exact::<1>(args, NAME_ONLY)?;
                Ok(Command::Phone { name })
            }
            "all" => no_args(args, Command::All),
            "add-birthday" => {
                let [name, date] = exact::<2>(args, NAME_AND_DATE)?;
                Ok(Command::AddBirthday { name, date })
            }
            "show-birthday" => {
                let [name] = exact::<1>(args, NAME_ONLY)?;
                Ok(Command::ShowBirthday { name })
            }
            "birthdays" => no_args(args, Command::Birthdays),
            "delete" => {
                let [name] = exact::<1>(args, NAME_ONLY)?;
                Ok(Command::Delete { name })
            }
            "export" => no_args(args, Command::Export),
            "help" => no_args(args, Command::Help),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// The canonical verb, used in logs and metrics.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add { .. } => "add",
            Command::Change { .. } => "change",
            Command::Phone { .. } => "phone",
            Command::All => "all",
            Command::AddBirthday { .. } => "add-birthday",
            Command::ShowBirthday { .. } => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete { .. } => "delete",
            Command::Export => "export",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

fn exact<const N: usize>(args: Vec<String>, usage: &'static str) -> CommandResult<[String; N]> {
    args.try_into().map_err(|_| CommandError::Usage(usage))
}

fn no_args(args: Vec<String>, command: Command) -> CommandResult<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Usage(NO_ARGUMENTS))
    }
}

/// Text shown by the `help` command.
pub const HELP: &str = "\
Available commands:
  hello                        greet the assistant
  add <name> <phone>           create a contact with one phone
  change <name> <phone>        replace a contact's phones with <phone>
  phone <name>                 show a contact's phones
  all                          list every contact
  add-birthday <name> <date>   set a birthday (DD-MM-YYYY)
  show-birthday <name>         show a contact's birthday
  birthdays                    birthdays to acknowledge in the coming days
  delete <name>                remove a contact
  export                       print all contacts as JSON
  help                         show this message
  close | exit                 leave the assistant";
