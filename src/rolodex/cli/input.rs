//! Parsing of prompt input into commands.
//!
//! The first word selects the command and is matched case-insensitively;
//! arguments keep their case. Multi-word names are allowed everywhere a name is
//! taken. For `add`, a trailing word starting with a digit is the birthday.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Show { page_size: Option<usize> },
    Add { name: String, birthday: Option<String> },
    Find { name: String },
    Check { term: String },
    Delete { name: String },
    Exit,
}

/// Follow-up commands accepted after `find <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCommand {
    Skip,
    Birthday,
    Add { phone: String },
    Remove { phone: String },
    Edit { phone: String, new_phone: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("invalid argument for '{command}': {value}")]
    InvalidArgument { command: &'static str, value: String },
}

fn split(input: &str) -> Result<(String, Vec<&str>), InputError> {
    let mut words = input.split_whitespace();
    let head = words.next().ok_or(InputError::Empty)?.to_lowercase();
    Ok((head, words.collect()))
}

fn joined(
    args: &[&str],
    command: &'static str,
    argument: &'static str,
) -> Result<String, InputError> {
    if args.is_empty() {
        return Err(InputError::MissingArgument { command, argument });
    }
    Ok(args.join(" "))
}

fn single(
    args: &[&str],
    idx: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<String, InputError> {
    args.get(idx)
        .map(|s| s.to_string())
        .ok_or(InputError::MissingArgument { command, argument })
}

fn is_exit(input: &str) -> bool {
    let normalized = input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    matches!(normalized.as_str(), "good bye" | "close" | "exit")
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if is_exit(input) {
            return Ok(Command::Exit);
        }
        let (head, args) = split(input)?;
        match head.as_str() {
            "hello" => Ok(Command::Hello),
            "show" => {
                let page_size = match args.first() {
                    None => None,
                    Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
                        InputError::InvalidArgument {
                            command: "show",
                            value: raw.to_string(),
                        }
                    })?),
                };
                Ok(Command::Show { page_size })
            }
            "add" => {
                let (name_args, birthday) = match args.split_last() {
                    Some((last, rest))
                        if !rest.is_empty()
                            && last.starts_with(|c: char| c.is_ascii_digit()) =>
                    {
                        (rest, Some(last.to_string()))
                    }
                    _ => (args.as_slice(), None),
                };
                Ok(Command::Add {
                    name: joined(name_args, "add", "a name")?,
                    birthday,
                })
            }
            "find" => Ok(Command::Find {
                name: joined(&args, "find", "a name")?,
            }),
            "check" => Ok(Command::Check {
                term: joined(&args, "check", "a search term")?,
            }),
            "delete" => Ok(Command::Delete {
                name: joined(&args, "delete", "a name")?,
            }),
            _ => Err(InputError::Unknown(head)),
        }
    }
}

impl FromStr for RecordCommand {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (head, args) = split(input)?;
        match head.as_str() {
            "skip" => Ok(RecordCommand::Skip),
            "birthday" => Ok(RecordCommand::Birthday),
            "add" => Ok(RecordCommand::Add {
                phone: single(&args, 0, "add", "a phone number")?,
            }),
            "remove" => Ok(RecordCommand::Remove {
                phone: single(&args, 0, "remove", "a phone number")?,
            }),
            "edit" => Ok(RecordCommand::Edit {
                phone: single(&args, 0, "edit", "the current phone number")?,
                new_phone: single(&args, 1, "edit", "the new phone number")?,
            }),
            _ => Err(InputError::Unknown(head)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(s: &str) -> Result<Command, InputError> {
        s.parse()
    }

    fn rec(s: &str) -> Result<RecordCommand, InputError> {
        s.parse()
    }

    #[test]
    fn simple_commands() {
        assert_eq!(cmd("hello"), Ok(Command::Hello));
        assert_eq!(cmd("  HeLLo "), Ok(Command::Hello));
        assert_eq!(cmd("show"), Ok(Command::Show { page_size: None }));
        assert_eq!(cmd("show 3"), Ok(Command::Show { page_size: Some(3) }));
    }

    #[test]
    fn exit_variants() {
        for input in ["exit", "close", "good bye", "Good   Bye", "EXIT"] {
            assert_eq!(cmd(input), Ok(Command::Exit), "{input:?}");
        }
        assert!(cmd("goodbye").is_err());
    }

    #[test]
    fn add_with_and_without_birthday() {
        assert_eq!(
            cmd("add Al"),
            Ok(Command::Add {
                name: "Al".into(),
                birthday: None
            })
        );
        assert_eq!(
            cmd("ADD Al 1990.05.17"),
            Ok(Command::Add {
                name: "Al".into(),
                birthday: Some("1990.05.17".into())
            })
        );
        assert_eq!(
            cmd("add Cy Young 1990-05-17"),
            Ok(Command::Add {
                name: "Cy Young".into(),
                birthday: Some("1990-05-17".into())
            })
        );
    }

    #[test]
    fn numeric_only_name_is_a_name() {
        assert_eq!(
            cmd("add 42"),
            Ok(Command::Add {
                name: "42".into(),
                birthday: None
            })
        );
    }

    #[test]
    fn name_arguments_are_joined() {
        assert_eq!(
            cmd("find Cy Young"),
            Ok(Command::Find {
                name: "Cy Young".into()
            })
        );
        assert_eq!(cmd("delete Al"), Ok(Command::Delete { name: "Al".into() }));
        assert_eq!(cmd("check 555"), Ok(Command::Check { term: "555".into() }));
    }

    #[test]
    fn missing_arguments() {
        assert!(matches!(
            cmd("find"),
            Err(InputError::MissingArgument { command: "find", .. })
        ));
        assert!(matches!(
            cmd("add"),
            Err(InputError::MissingArgument { command: "add", .. })
        ));
        assert!(matches!(
            cmd("show lots"),
            Err(InputError::InvalidArgument { command: "show", .. })
        ));
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(cmd("frobnicate x"), Err(InputError::Unknown("frobnicate".into())));
        assert_eq!(cmd("   "), Err(InputError::Empty));
    }

    #[test]
    fn record_commands() {
        assert_eq!(rec("skip"), Ok(RecordCommand::Skip));
        assert_eq!(rec("Birthday"), Ok(RecordCommand::Birthday));
        assert_eq!(
            rec("add 5551234567"),
            Ok(RecordCommand::Add {
                phone: "5551234567".into()
            })
        );
        assert_eq!(
            rec("remove 5551234567"),
            Ok(RecordCommand::Remove {
                phone: "5551234567".into()
            })
        );
        assert_eq!(
            rec("edit 1111111111 2222222222"),
            Ok(RecordCommand::Edit {
                phone: "1111111111".into(),
                new_phone: "2222222222".into()
            })
        );
    }

    #[test]
    fn record_command_errors() {
        assert!(matches!(
            rec("edit 1111111111"),
            Err(InputError::MissingArgument { command: "edit", .. })
        ));
        assert!(matches!(rec("remove"), Err(InputError::MissingArgument { .. })));
        assert!(matches!(rec("call"), Err(InputError::Unknown(_))));
    }
}
