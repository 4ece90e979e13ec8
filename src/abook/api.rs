//! # API Facade
//!
//! A thin facade over the command handlers. [`AbookApi`] owns the
//! [`AddressBook`] for the lifetime of a session and is the single entry point
//! the command loop talks to.
//!
//! The facade dispatches and returns values. It does not print, and it does
//! not decide how errors look on screen; that is the loop's job.

use crate::book::AddressBook;
use crate::command::Command;
use crate::commands;
use crate::error::Result;
use tracing::debug;

/// What the loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit { farewell: bool },
}

#[derive(Debug, Default)]
pub struct AbookApi {
    book: AddressBook,
}

impl AbookApi {
    pub fn new(book: AddressBook) -> Self {
        Self { book }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!(?command, "dispatching");
        let reply = match command {
            Command::Hello => self.hello(),
            Command::Add { name, phone } => self.add(&name, &phone)?,
            Command::Change { name, old, new } => self.change(&name, &old, &new)?,
            Command::Phone { name } => self.phone(&name)?,
            Command::Remove { name, phone } => self.remove(&name, &phone)?,
            Command::ShowAll => self.show_all(),
            Command::Search { input } => self.search(&input)?,
            Command::Exit { farewell } => return Ok(Outcome::Exit { farewell }),
        };
        Ok(Outcome::Reply(reply))
    }

    pub fn hello(&self) -> String {
        commands::hello::run()
    }

    pub fn add(&mut self, name: &str, phone: &str) -> Result<String> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn change(&mut self, name: &str, old: &str, new: &str) -> Result<String> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn phone(&self, name: &str) -> Result<String> {
        commands::phone::run(&self.book, name)
    }

    pub fn remove(&mut self, name: &str, phone: &str) -> Result<String> {
        commands::remove::run(&mut self.book, name, phone)
    }

    pub fn show_all(&self) -> String {
        commands::show_all::run(&self.book)
    }

    pub fn search(&self, input: &str) -> Result<String> {
        commands::search::run(&self.book, input)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}
