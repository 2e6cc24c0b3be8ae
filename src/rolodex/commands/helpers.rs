use crate::book::AddressBook;
use crate::error::{Result, RolodexError};
use crate::model::Record;

pub fn find_record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.trim().to_string()))
}

pub fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.trim().to_string()))
}
