//! Command handlers.
//!
//! Each handler takes the book and the raw argument string and returns the
//! message to print, or a `CommandError` that the loop renders. Handlers
//! never touch the console; the one interactive decision (overwriting an
//! existing contact) is surfaced as [`AddReply::Confirm`] for the loop to
//! resolve.

use super::messages;
use crate::domain::ValidationError;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddOutcome, AddressBook, Record};
use chrono::NaiveDate;

/// Result of the add handler.
#[derive(Debug, PartialEq, Eq)]
pub enum AddReply {
    /// The contact was added; print this message.
    Done(String),

    /// The name is taken; ask the user whether to overwrite, then apply
    /// [`apply_overwrite`] with these values on «так».
    Confirm { name: String, phone: String },
}

/// `add NAME PHONE [BIRTHDAY]`
pub fn handle_add(book: &mut AddressBook, args: Option<&str>) -> CommandResult<AddReply> {
    let args = args.ok_or(CommandError::Usage(messages::USAGE_ADD))?;
    let (name, rest) = args
        .split_once(char::is_whitespace)
        .ok_or(CommandError::Usage(messages::USAGE_ADD))?;

    let mut parts = rest.split_whitespace();
    let phone = parts
        .next()
        .ok_or(CommandError::Usage(messages::USAGE_ADD))?;
    let birthday = parts.next();

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    if let Some(raw) = birthday {
        record.set_birthday(raw)?;
    }

    match book.add_record(record) {
        AddOutcome::Added => Ok(AddReply::Done(format!(
            "Контакт успішно доданий: {} - {}",
            name, phone
        ))),
        AddOutcome::NeedsConfirmation(_) => Ok(AddReply::Confirm {
            name: name.to_string(),
            phone: phone.to_string(),
        }),
    }
}

/// Apply a confirmed overwrite: replace the first phone of the existing
/// record with the candidate's phone.
pub fn apply_overwrite(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    book.edit_record(name, phone)?;
    Ok(format!("Контакт оновлено: {} - {}", name, phone))
}

/// `edit NAME PHONE`
pub fn handle_edit(book: &mut AddressBook, args: Option<&str>) -> CommandResult<String> {
    let args = args.ok_or(CommandError::Usage(messages::USAGE_EDIT))?;
    let (name, phone) = args
        .split_once(char::is_whitespace)
        .ok_or(CommandError::Usage(messages::USAGE_EDIT))?;
    let phone = phone.trim();

    book.edit_record(name, phone)?;
    Ok(format!("Контакт оновлено: {} - {}", name, phone))
}

/// `show-all`
pub fn handle_show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return messages::EMPTY_BOOK.to_string();
    }

    let mut out = messages::ALL_CONTACTS_HEADER.to_string();
    for record in book.iter() {
        out.push('\n');
        out.push_str(&record.summary());
    }
    out
}

/// `search QUERY`
pub fn handle_search(book: &AddressBook, args: Option<&str>) -> CommandResult<String> {
    let query = args.ok_or(CommandError::Usage(messages::USAGE_SEARCH))?;

    let results = book.search(query);
    if results.is_empty() {
        return Ok(messages::NO_MATCHES.to_string());
    }

    let mut out = messages::SEARCH_HEADER.to_string();
    for record in results {
        out.push('\n');
        out.push_str(&record.summary());
    }
    Ok(out)
}

/// `delete NAME`
pub fn handle_delete(book: &mut AddressBook, args: Option<&str>) -> CommandResult<String> {
    let name = args.ok_or(CommandError::Usage(messages::USAGE_NAME))?;
    book.delete(name)?;
    Ok(format!("Контакт {} видалено.", name))
}

/// `birthday NAME`
pub fn handle_birthday(
    book: &AddressBook,
    args: Option<&str>,
    today: NaiveDate,
) -> CommandResult<String> {
    let name = args.ok_or(CommandError::Usage(messages::USAGE_NAME))?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    match record.days_to_birthday(today) {
        Some(days) => Ok(format!("До дня народження {}: {} дн.", name, days)),
        None => Ok(format!(
            "У контакта {} не вказано день народження.",
            name
        )),
    }
}

/// Map a command failure to the exact line shown to the user, by kind.
pub fn render_error(err: &CommandError) -> &'static str {
    match err {
        CommandError::Usage(hint) => hint,
        CommandError::Book(BookError::ContactNotFound(_)) => messages::CONTACT_NOT_FOUND,
        CommandError::Book(BookError::PhoneNotFound(_)) => messages::PHONE_NOT_FOUND,
        CommandError::Book(BookError::Validation(ValidationError::InvalidPhone(_))) => {
            messages::INVALID_PHONE
        }
        CommandError::Book(BookError::Validation(ValidationError::InvalidBirthday(_))) => {
            messages::INVALID_BIRTHDAY
        }
    }
}
