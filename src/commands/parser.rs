//! Input line parsing.

use crate::error::{CommandError, CommandResult};

/// Split an input line into a lower-cased command word and its arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// A fully parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Delete {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Exit,
}

impl Command {
    /// Build a command from its word and arguments.
    ///
    /// Extra arguments are ignored.
    ///
    /// # Errors
    ///
    /// `UnknownCommand` for an unrecognised word, `MissingArguments` when
    /// required arguments are absent.
    pub fn parse(command: &str, args: &[String]) -> CommandResult<Self> {
        let parsed = match command {
            "hello" => Self::Hello,
            "add" => {
                let [name, phone] = take_args::<2>(args, "add", "add <name> <phone>")?;
                Self::Add { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] = take_args::<3>(
                    args,
                    "change",
                    "change <name> <old phone> <new phone>",
                )?;
                Self::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = take_args::<1>(args, "phone", "phone <name>")?;
                Self::Phone { name }
            }
            "all" => Self::All,
            "add-birthday" => {
                let [name, birthday] =
                    take_args::<2>(args, "add-birthday", "add-birthday <name> <DD.MM.YYYY>")?;
                Self::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take_args::<1>(args, "show-birthday", "show-birthday <name>")?;
                Self::ShowBirthday { name }
            }
            "birthdays" => Self::Birthdays,
            "delete" => {
                let [name] = take_args::<1>(args, "delete", "delete <name>")?;
                Self::Delete { name }
            }
            "remove-phone" => {
                let [name, phone] =
                    take_args::<2>(args, "remove-phone", "remove-phone <name> <phone>")?;
                Self::RemovePhone { name, phone }
            }
            "exit" | "close" => Self::Exit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(parsed)
    }
}

fn take_args<const N: usize>(
    args: &[String],
    command: &'static str,
    usage: &'static str,
) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments { command, usage });
    }
    Ok(std::array::from_fn(|i| args[i].clone()))
}
