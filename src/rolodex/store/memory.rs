use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<AddressBook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `book`, as if it had been saved earlier.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            saved: Some(book),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&AddressBook> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<Option<AddressBook>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.saved = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::book::AddressBook;
    use crate::model::Record;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        /// Adds `count` contacts named `Contact 1..=count`, each with one phone.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record = Record::new(&format!("Contact {}", i + 1), None).unwrap();
                record.add_phone(&format!("{:010}", i + 1));
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name, None).unwrap();
            for phone in phones {
                record.add_phone(phone);
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let record = Record::new(name, Some(birthday)).unwrap();
            self.book.add_record(record);
            self
        }

        pub fn build(self) -> AddressBook {
            self.book
        }
    }
}
