//! # Command Parsing
//!
//! Turns one line of user input into a [`Command`].
//!
//! Only the command word is matched without regard to case. Arguments are
//! passed through exactly as typed, so `ADD Alice 555-ABC` stores `Alice` with
//! phone `555-ABC`.
//!
//! Arity rules:
//! - `add` and `remove` take exactly two arguments, `change` exactly three.
//!   Too few is [`AbookError::InsufficientArguments`], too many is
//!   [`AbookError::InvalidArgument`].
//! - `phone` and `search` need at least one argument and ignore the rest.
//! - `search` keeps the whole trimmed line, since its handler does its own
//!   tokenizing.

use crate::error::{AbookError, Result};
use std::str::FromStr;

const EXIT_PHRASES: [&str; 3] = ["good bye", "close", "exit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old: String,
        new: String,
    },
    Phone {
        name: String,
    },
    Remove {
        name: String,
        phone: String,
    },
    ShowAll,
    Search {
        input: String,
    },
    /// `farewell` is set for the spoken exit phrases, not for `.`.
    Exit {
        farewell: bool,
    },
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(word) = tokens.first() else {
            return Err(AbookError::UnknownCommand(String::new()));
        };

        let normalized = tokens.join(" ").to_lowercase();
        if normalized == "." {
            return Ok(Command::Exit { farewell: false });
        }
        if EXIT_PHRASES.contains(&normalized.as_str()) {
            return Ok(Command::Exit { farewell: true });
        }
        if normalized == "show all" {
            return Ok(Command::ShowAll);
        }

        let args = &tokens[1..];
        match word.to_lowercase().as_str() {
            "hello" if args.is_empty() => Ok(Command::Hello),
            "add" => {
                let [name, phone] = exact_args::<2>("add", args)?;
                Ok(Command::Add { name, phone })
            }
            "change" => {
                let [name, old, new] = exact_args::<3>("change", args)?;
                Ok(Command::Change { name, old, new })
            }
            "remove" => {
                let [name, phone] = exact_args::<2>("remove", args)?;
                Ok(Command::Remove { name, phone })
            }
            "phone" => {
                let name = args.first().ok_or(AbookError::InsufficientArguments)?;
                Ok(Command::Phone {
                    name: name.to_string(),
                })
            }
            "search" => {
                if args.is_empty() {
                    return Err(AbookError::InsufficientArguments);
                }
                Ok(Command::Search {
                    input: line.to_string(),
                })
            }
            _ => Err(AbookError::UnknownCommand(line.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = AbookError;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)
    }
}

fn exact_args<const N: usize>(command: &str, args: &[&str]) -> Result<[String; N]> {
    if args.len() < N {
        return Err(AbookError::InsufficientArguments);
    }
    if args.len() > N {
        return Err(AbookError::InvalidArgument(format!(
            "Too many arguments for '{}': expected {}, got {}",
            command,
            N,
            args.len()
        )));
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
