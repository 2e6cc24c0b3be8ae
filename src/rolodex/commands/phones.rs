use super::helpers::find_record_mut;
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;
    let mut result = CmdResult::default();
    let update = record.add_phone(phone);
    result.push_phone_update(update, format!("Phone {} added to {}", phone, record.name()));
    Ok(result.with_records(vec![record.clone()]))
}

/// Removes the first occurrence of `phone`. An unknown phone is an error.
pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;
    let removed = record.remove_phone(phone)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Phone {} removed from {}",
        removed,
        record.name()
    )));
    Ok(result.with_records(vec![record.clone()]))
}

pub fn edit(book: &mut AddressBook, name: &str, phone: &str, new_phone: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;
    let update = record.edit_phone(phone, new_phone)?;
    let mut result = CmdResult::default();
    result.push_phone_update(
        update,
        format!("Phone {} changed to {} for {}", phone, new_phone, record.name()),
    );
    Ok(result.with_records(vec![record.clone()]))
}
