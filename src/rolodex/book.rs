//! # Address Book
//!
//! The [`AddressBook`] is the whole collection of contacts, keyed by the
//! contact's name and kept in insertion order. Replacing an existing contact
//! keeps its position; deleting one keeps the order of the rest.
//!
//! Lookups are linear. A contact list is small enough that keeping a single
//! ordered `Vec` is simpler than maintaining a separate key index.

use crate::model::Record;
use std::fmt;

/// A single hit from [`AddressBook::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    Name(String),
    Phone { name: String, phone: String },
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Match::Name(name) => write!(f, "{}", name),
            Match::Phone { name, phone } => write!(f, "{}: {}", name, phone),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    /// Inserts `record` under its name. An existing contact with the same name
    /// is replaced in place and returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(move |pos| &mut self.records[pos])
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|pos| self.records.remove(pos))
    }

    /// Every contact whose name contains `term`, and every phone containing it.
    /// For each contact the name hit (if any) comes before its phone hits.
    pub fn check(&self, term: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        for record in &self.records {
            let name = record.name().as_str();
            if name.contains(term) {
                matches.push(Match::Name(name.to_string()));
            }
            for phone in record.phones() {
                if phone.as_str().contains(term) {
                    matches.push(Match::Phone {
                        name: name.to_string(),
                        phone: phone.to_string(),
                    });
                }
            }
        }
        matches
    }

    /// Text blocks of up to `per_page` lines each; a page size of 0 is
    /// treated as 1.
    pub fn pages(&self, per_page: usize) -> Pages<'_> {
        Pages {
            records: &self.records,
            per_page: per_page.max(1),
            cursor: 0,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim();
        self.records.iter().position(|r| r.name().as_str() == key)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Lazy page iterator returned by [`AddressBook::pages`].
pub struct Pages<'a> {
    records: &'a [Record],
    per_page: usize,
    cursor: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.cursor >= self.records.len() {
            return None;
        }
        let end = (self.cursor + self.per_page).min(self.records.len());
        let block = self.records[self.cursor..end]
            .iter()
            .map(|record| format!("{}: {}\n", record.name(), record))
            .collect();
        self.cursor = end;
        Some(block)
    }
}
