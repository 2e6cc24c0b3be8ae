//! # Storage Layer
//!
//! The address book lives in memory while the program runs. It is read from a
//! [`BookStore`] once at startup and written back once at shutdown.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single versioned JSON-lines file.
//! - [`memory::InMemoryStore`]: Keeps a copy of the last saved book. No
//!   persistence, used for testing the layers above.
//!
//! ## File Format
//!
//! ```text
//! {"format":"rolodex","version":1}                                      # header
//! {"schema":"record.v1","key":"Al","name":"Al","phones":["5551234567"]} # one per contact
//! {"schema":"record.v1","key":"Bo","name":"Bo","phones":[],"birthday":"1990-05-17"}
//! ```
//!
//! Each contact is written as its own line, in book order. Every entry names
//! its schema so the entity shape can change without breaking older files.
//! Loading reads lines until end of file; a later entry with an already seen
//! key replaces the earlier one.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Persistent home of an [`AddressBook`].
pub trait BookStore {
    /// Load the stored book. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<AddressBook>>;

    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
