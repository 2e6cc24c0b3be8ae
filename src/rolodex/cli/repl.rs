use super::input::{Command, InputError, RecordCommand};
use super::print::{print_error, print_messages, print_pages, prompt};
use colored::Colorize;
use rolodex::api::RolodexApi;
use rolodex::error::Result;
use rolodex::store::BookStore;
use std::io::BufRead;
use tracing::debug;

const COMMAND_PROMPT: &str = "Enter a command: ";
const RECORD_PROMPT: &str = "Enter a record command: ";

/// Whether the loop keeps going after a command.
enum Flow {
    Continue,
    Exit,
}

pub(super) struct Repl<S: BookStore> {
    api: RolodexApi<S>,
    page_size: usize,
}

impl<S: BookStore> Repl<S> {
    pub(super) fn new(api: RolodexApi<S>, page_size: usize) -> Self {
        Self { api, page_size }
    }

    /// Loads the book, serves commands until an exit command or end of input,
    /// then saves the book. The save runs even when reading input fails.
    pub(super) fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let loaded = self.api.load()?;
        print_messages(&loaded.messages);

        let outcome = self.serve(&mut input);
        self.api.save()?;
        outcome?;
        println!("Good bye.");
        Ok(())
    }

    fn serve<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        loop {
            prompt(COMMAND_PROMPT);
            let Some(line) = read_line(input)? else {
                println!();
                return Ok(());
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(InputError::Empty) => continue,
                Err(e) => {
                    debug!(input = %line, reason = %e, "ignoring command");
                    continue;
                }
            };

            if let Flow::Exit = self.dispatch(command, input)? {
                return Ok(());
            }
        }
    }

    fn dispatch<R: BufRead>(&mut self, command: Command, input: &mut R) -> Result<Flow> {
        match command {
            Command::Hello => println!("hi, I'm your AddressBook bot"),
            Command::Show { page_size } => self.handle_show(page_size),
            Command::Add { name, birthday } => self.handle_add(&name, birthday.as_deref(), input)?,
            Command::Find { name } => self.handle_find(&name, input)?,
            Command::Check { term } => self.report(self.api.check(&term)),
            Command::Delete { name } => {
                let result = self.api.delete(&name);
                self.report(result)
            }
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn handle_show(&self, page_size: Option<usize>) {
        match self.api.show(page_size.unwrap_or(self.page_size)) {
            Ok(result) => {
                print_pages(&result.pages);
                print_messages(&result.messages);
            }
            Err(e) => print_error(e),
        }
    }

    fn handle_add<R: BufRead>(
        &mut self,
        name: &str,
        birthday: Option<&str>,
        input: &mut R,
    ) -> Result<()> {
        let record = match self.api.prepare_contact(name, birthday) {
            Ok(record) => record,
            Err(e) => {
                print_error(e);
                return Ok(());
            }
        };

        prompt(&format!(
            "provide phone numbers for {} as list or press enter to skip: ",
            record.name()
        ));
        let phones = read_line(input)?.unwrap_or_default();
        let phones: Vec<&str> = phones.split_whitespace().collect();

        let result = self.api.add_contact(record, &phones);
        self.report(result);
        Ok(())
    }

    fn handle_find<R: BufRead>(&mut self, name: &str, input: &mut R) -> Result<()> {
        let found = match self.api.find(name) {
            Ok(found) => found,
            Err(e) => {
                print_error(e);
                return Ok(());
            }
        };
        let Some(record) = found.records.first() else {
            return Ok(());
        };
        let name = record.name().to_string();

        println!("{}", record.to_string().bold());
        println!(
            "you may now check if {0} has birthday, or add, edit and remove {0} phones",
            name
        );
        prompt(RECORD_PROMPT);
        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        let command = match line.parse::<RecordCommand>() {
            Ok(command) => command,
            Err(e) => {
                debug!(input = %line, reason = %e, "ignoring record command");
                return Ok(());
            }
        };

        let result = match command {
            RecordCommand::Skip => return Ok(()),
            RecordCommand::Birthday => self.api.birthday(&name),
            RecordCommand::Add { phone } => self.api.add_phone(&name, &phone),
            RecordCommand::Remove { phone } => self.api.remove_phone(&name, &phone),
            RecordCommand::Edit { phone, new_phone } => {
                self.api.edit_phone(&name, &phone, &new_phone)
            }
        };
        self.report(result);
        Ok(())
    }

    /// Prints a command's messages, or its error. Command errors never end
    /// the session.
    fn report(&self, result: Result<rolodex::api::CmdResult>) {
        match result {
            Ok(result) => print_messages(&result.messages),
            Err(e) => print_error(e),
        }
    }
}

/// Reads one line without its line ending. Bytes that are not UTF-8 are
/// replaced rather than treated as an error.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    let line = match String::from_utf8(buf) {
        Ok(line) => line,
        Err(e) => {
            debug!("input line is not valid UTF-8");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(Some(line))
}
