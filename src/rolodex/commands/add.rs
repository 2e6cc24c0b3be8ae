use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use tracing::debug;

/// Builds the record for a new contact. Fails on an empty name or a birthday
/// that is not `YYYY.MM.DD`, before anything touches the book.
pub fn prepare(name: &str, birthday: Option<&str>) -> Result<Record> {
    Record::new(name, birthday)
}

/// Adds `phones` to `record` and stores it, replacing any contact with the
/// same name. Invalid phones are skipped with a warning.
pub fn run<P: AsRef<str>>(
    book: &mut AddressBook,
    mut record: Record,
    phones: &[P],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let name = record.name().to_string();

    for phone in phones {
        let phone = phone.as_ref();
        let update = record.add_phone(phone);
        if !update.is_accepted() {
            debug!(contact = %name, phone, "rejected phone number");
        }
        result.push_phone_update(update, format!("Phone {} added to {}", phone, name));
    }

    let replaced = book.add_record(record.clone()).is_some();
    let verb = if replaced { "replaced" } else { "added" };
    result.add_message(CmdMessage::success(format!("Contact {}: {}", verb, name)));

    Ok(result.with_records(vec![record]))
}
