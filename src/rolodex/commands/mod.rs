//! # Command Layer
//!
//! Each user-facing operation lives in its own submodule as plain functions
//! over an [`AddressBook`]. Commands never print, prompt or exit; they return a
//! [`CmdResult`] and leave rendering to the caller.
//!
//! Failures a user can cause on purpose (unknown contact, unknown phone,
//! malformed birthday) are returned as errors. Soft failures such as a phone
//! number with the wrong shape are reported as warning messages instead, and
//! the rest of the command still runs.
//!
//! Command tests build books with
//! [`BookFixture`](crate::store::memory::fixtures::BookFixture) and never touch
//! the filesystem.
//!
//! ## Command Modules
//!
//! - [`add`]: Add or replace a contact
//! - [`show`]: Paginated listing
//! - [`find`]: Look up one contact
//! - [`phones`]: Add/remove/edit a contact's phones
//! - [`birthday`]: Days until a contact's next birthday
//! - [`check`]: Substring search over names and phones
//! - [`delete`]: Remove a contact
//! - [`helpers`]: Shared lookups

use crate::book::Match;
use crate::model::{BirthdayCountdown, PhoneUpdate, Record};

pub mod add;
pub mod birthday;
pub mod check;
pub mod delete;
pub mod find;
pub mod helpers;
pub mod phones;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<Record>,
    pub matches: Vec<Match>,
    pub pages: Vec<String>,
    pub countdown: Option<BirthdayCountdown>,
    pub phone_updates: Vec<PhoneUpdate>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_matches(mut self, matches: Vec<Match>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    /// Records a phone write and the matching success/warning message.
    pub fn push_phone_update(&mut self, update: PhoneUpdate, accepted: impl Into<String>) {
        let message = match &update {
            PhoneUpdate::Accepted { .. } => CmdMessage::success(accepted),
            PhoneUpdate::Rejected { reason, .. } => CmdMessage::warning(reason.clone()),
        };
        self.add_message(message);
        self.phone_updates.push(update);
    }

    pub fn message_texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}
