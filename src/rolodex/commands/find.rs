use super::helpers::find_record;
use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = find_record(book, name)?;
    Ok(CmdResult::default().with_records(vec![record.clone()]))
}
