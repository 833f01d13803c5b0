//! Command handlers: apply a parsed command to the address book.

use super::parser::Command;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// What the session should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep reading commands.
    Continue(String),
    /// Print the message and end the session.
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(message) | Self::Exit(message) => message,
        }
    }
}

/// Execute one command against the book.
///
/// `today` anchors the birthday query; handlers never read the clock.
pub fn execute(
    command: Command,
    book: &mut AddressBook,
    today: NaiveDate,
) -> CommandResult<Outcome> {
    let message = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => add_contact(book, name, &phone)?,
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_phone(book, &name, &old_phone, &new_phone)?,
        Command::Phone { name } => show_phones(book, &name)?,
        Command::All => show_all(book),
        Command::AddBirthday { name, birthday } => add_birthday(book, &name, &birthday)?,
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays => upcoming_birthdays(book, today),
        Command::Delete { name } => delete_contact(book, &name)?,
        Command::RemovePhone { name, phone } => remove_phone(book, &name, &phone)?,
        Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
    };
    Ok(Outcome::Continue(message))
}

fn find_record<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn add_contact(book: &mut AddressBook, name: String, phone: &str) -> CommandResult<String> {
    if let Some(record) = book.find_mut(&name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    // Validate the phone before the contact exists so a bad number adds nothing
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<String> {
    find_record(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Phone number updated.".to_string())
}

fn show_phones(book: &mut AddressBook, name: &str) -> CommandResult<String> {
    let record = find_record(book, name)?;
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}'s phones: {}", name, phones))
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.all_records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<String> {
    find_record(book, name)?.set_birthday(birthday)?;
    Ok("Birthday added successfully.".to_string())
}

fn show_birthday(book: &AddressBook, name: &str) -> String {
    match book.find(name).and_then(Record::birthday) {
        Some(birthday) => format!("{}'s birthday is on {}", name, birthday),
        None => "No birthday information found for this contact.".to_string(),
    }
}

fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No birthdays in the coming week.".to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn delete_contact(book: &mut AddressBook, name: &str) -> CommandResult<String> {
    book.delete(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    Ok("Contact deleted.".to_string())
}

fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    find_record(book, name)?.remove_phone(phone);
    Ok("Phone number removed.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn today() -> NaiveDate {
        // Monday
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    fn run(book: &mut AddressBook, command: Command) -> CommandResult<String> {
        execute(command, book, today()).map(|outcome| outcome.message().to_string())
    }

    fn add(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
        run(
            book,
            Command::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            },
        )
    }

    #[test]
    fn test_hello_and_exit() {
        let mut book = AddressBook::new();
        assert_eq!(
            execute(Command::Hello, &mut book, today()).unwrap(),
            Outcome::Continue("How can I help you?".to_string())
        );
        assert_eq!(
            execute(Command::Exit, &mut book, today()).unwrap(),
            Outcome::Exit("Good bye!".to_string())
        );
    }

    #[test]
    fn test_add_new_then_existing_contact() {
        let mut book = AddressBook::new();
        assert_eq!(add(&mut book, "Anna", "1111111111").unwrap(), "Contact added.");
        assert_eq!(add(&mut book, "Anna", "2222222222").unwrap(), "Contact updated.");
        assert_eq!(book.find("Anna").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add(&mut book, "Carl", "12345").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert!(book.find("Carl").is_none());
    }

    #[test]
    fn test_change_phone() {
        let mut book = AddressBook::new();
        add(&mut book, "Anna", "1111111111").unwrap();

        let message = run(
            &mut book,
            Command::Change {
                name: "Anna".to_string(),
                old_phone: "1111111111".to_string(),
                new_phone: "3333333333".to_string(),
            },
        )
        .unwrap();
        assert_eq!(message, "Phone number updated.");
        assert_eq!(book.find("Anna").unwrap().phones()[0].as_str(), "3333333333");
    }

    #[test]
    fn test_change_phone_unknown_contact() {
        let mut book = AddressBook::new();
        let err = run(
            &mut book,
            Command::Change {
                name: "Ghost".to_string(),
                old_phone: "1111111111".to_string(),
                new_phone: "3333333333".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, CommandError::ContactNotFound("Ghost".to_string()));
    }

    #[test]
    fn test_show_phones() {
        let mut book = AddressBook::new();
        add(&mut book, "Anna", "1111111111").unwrap();
        add(&mut book, "Anna", "2222222222").unwrap();

        let message = run(
            &mut book,
            Command::Phone {
                name: "Anna".to_string(),
            },
        )
        .unwrap();
        assert_eq!(message, "Anna's phones: 1111111111, 2222222222");
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, Command::All).unwrap(), "No contacts saved.");

        add(&mut book, "Bob", "2222222222").unwrap();
        add(&mut book, "Anna", "1111111111").unwrap();
        assert_eq!(
            run(&mut book, Command::All).unwrap(),
            "Contact name: Anna, phones: 1111111111, birthday: Not set\n\
             Contact name: Bob, phones: 2222222222, birthday: Not set"
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        add(&mut book, "Anna", "1111111111").unwrap();

        let show = Command::ShowBirthday {
            name: "Anna".to_string(),
        };
        assert_eq!(
            run(&mut book, show.clone()).unwrap(),
            "No birthday information found for this contact."
        );

        let message = run(
            &mut book,
            Command::AddBirthday {
                name: "Anna".to_string(),
                birthday: "05.06.1990".to_string(),
            },
        )
        .unwrap();
        assert_eq!(message, "Birthday added successfully.");
        assert_eq!(
            run(&mut book, show).unwrap(),
            "Anna's birthday is on 05.06.1990"
        );
        assert_eq!(
            run(&mut book, Command::Birthdays).unwrap(),
            "Anna: 2024.06.05"
        );
    }

    #[test]
    fn test_add_birthday_invalid_date() {
        let mut book = AddressBook::new();
        add(&mut book, "Anna", "1111111111").unwrap();
        let err = run(
            &mut book,
            Command::AddBirthday {
                name: "Anna".to_string(),
                birthday: "1990-06-05".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.user_message().contains("Use DD.MM.YYYY"));
    }

    #[test]
    fn test_no_upcoming_birthdays() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, Command::Birthdays).unwrap(),
            "No birthdays in the coming week."
        );
    }

    #[test]
    fn test_delete_and_remove_phone() {
        let mut book = AddressBook::new();
        add(&mut book, "Anna", "1111111111").unwrap();
        add(&mut book, "Anna", "2222222222").unwrap();

        let message = run(
            &mut book,
            Command::RemovePhone {
                name: "Anna".to_string(),
                phone: "1111111111".to_string(),
            },
        )
        .unwrap();
        assert_eq!(message, "Phone number removed.");
        assert_eq!(book.find("Anna").unwrap().phones().len(), 1);

        let delete = Command::Delete {
            name: "Anna".to_string(),
        };
        assert_eq!(run(&mut book, delete.clone()).unwrap(), "Contact deleted.");
        assert_eq!(
            run(&mut book, delete).unwrap_err(),
            CommandError::ContactNotFound("Anna".to_string())
        );
    }
}
