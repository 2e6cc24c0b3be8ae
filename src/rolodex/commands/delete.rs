use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use tracing::debug;

/// Removes the contact if present. Deleting an unknown name is a no-op.
pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.delete(name) {
        Some(record) => {
            result.add_message(CmdMessage::success(format!(
                "Contact deleted: {}",
                record.name()
            )));
            result.records.push(record);
        }
        None => debug!(name, "delete: no such contact"),
    }
    Ok(result)
}
