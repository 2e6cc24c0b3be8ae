//! # API Facade
//!
//! [`RolodexApi`] is the single entry point for UI clients. It owns the
//! in-memory [`AddressBook`] and the [`BookStore`] it came from, and forwards
//! each operation to the matching function in [`crate::commands`].
//!
//! The book is read from the store by [`RolodexApi::load`] and written back
//! only by [`RolodexApi::save`]; everything in between works on memory.
//!
//! Like the commands, the API returns `Result<CmdResult>` and never prints.

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::model::Record;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Generic over `BookStore`: `RolodexApi<FileStore>` in production,
/// `RolodexApi<InMemoryStore>` in tests.
pub struct RolodexApi<S: BookStore> {
    store: S,
    book: AddressBook,
}

impl<S: BookStore> RolodexApi<S> {
    /// An API with an empty book; call [`load`](Self::load) to read the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            book: AddressBook::new(),
        }
    }

    /// Replaces the in-memory book with the stored one. A store with nothing
    /// saved yet leaves the book empty and says so.
    pub fn load(&mut self) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match self.store.load()? {
            Some(book) => {
                debug!(contacts = book.len(), "address book restored");
                self.book = book;
            }
            None => {
                self.book = AddressBook::new();
                result.add_message(CmdMessage::info(
                    "please note, there is currently no backup file",
                ));
            }
        }
        Ok(result)
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prepare_contact(&self, name: &str, birthday: Option<&str>) -> Result<Record> {
        commands::add::prepare(name, birthday)
    }

    pub fn add_contact<P: AsRef<str>>(&mut self, record: Record, phones: &[P]) -> Result<CmdResult> {
        commands::add::run(&mut self.book, record, phones)
    }

    pub fn show(&self, page_size: usize) -> Result<CmdResult> {
        commands::show::run(&self.book, page_size)
    }

    pub fn find(&self, name: &str) -> Result<CmdResult> {
        commands::find::run(&self.book, name)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::phones::add(&mut self.book, name, phone)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::phones::remove(&mut self.book, name, phone)
    }

    pub fn edit_phone(&mut self, name: &str, phone: &str, new_phone: &str) -> Result<CmdResult> {
        commands::phones::edit(&mut self.book, name, phone, new_phone)
    }

    pub fn birthday(&self, name: &str) -> Result<CmdResult> {
        self.birthday_on(name, Local::now().date_naive())
    }

    pub fn birthday_on(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::run(&self.book, name, today)
    }

    pub fn check(&self, term: &str) -> Result<CmdResult> {
        commands::check::run(&self.book, term)
    }

    pub fn delete(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, name)
    }
}

pub use crate::book::Match;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
