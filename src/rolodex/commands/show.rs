use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    if book.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No contacts yet."));
        return Ok(result);
    }
    Ok(CmdResult::default().with_pages(book.pages(page_size).collect()))
}
