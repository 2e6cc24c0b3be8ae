use colored::Colorize;
use rolodex::api::{CmdMessage, MessageLevel};
use std::io::{self, Write};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_error(error: impl std::fmt::Display) {
    println!("{}", error.to_string().red());
}

/// Pages are printed back to back; a dimmed marker separates them when there
/// is more than one.
pub(super) fn print_pages(pages: &[String]) {
    let total = pages.len();
    for (i, page) in pages.iter().enumerate() {
        if total > 1 {
            println!("{}", format!("--- page {}/{} ---", i + 1, total).dimmed());
        }
        print!("{}", page);
    }
}

pub(super) fn prompt(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}
