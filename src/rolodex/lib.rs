//! # Rolodex Architecture
//!
//! Rolodex is a small contact manager: named records with phone numbers and an
//! optional birthday, kept in memory while the program runs and persisted to a
//! single local file between runs.
//!
//! It is built as a library with a console client on top:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Process args, the interactive prompt, colored output     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the AddressBook and its BookStore                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (book.rs, model.rs) and Storage (store/)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the CLI writes to stdout/stderr or exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user operation
//! - [`book`]: [`AddressBook`](book::AddressBook), search and pagination
//! - [`model`]: `Field`, `Name`, `Phone`, `Birthday`, `Record`
//! - [`store`]: Persistence behind the [`BookStore`](store::BookStore) trait
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
