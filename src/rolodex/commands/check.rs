use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, term: &str) -> Result<CmdResult> {
    let matches = book.check(term);
    let mut result = CmdResult::default();

    if matches.is_empty() {
        result.add_message(CmdMessage::info("No matches found."));
    }
    for found in &matches {
        result.add_message(CmdMessage::success(format!("Match found: {}", found)));
    }

    Ok(result.with_matches(matches))
}
