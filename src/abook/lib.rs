//! # Abook Architecture
//!
//! Abook is an interactive address book that lives for one terminal session.
//! Contacts are kept in memory only; nothing is written to disk.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Loop (repl.rs, wired by main.rs)                   │
//! │  - Prompts, reads lines, prints replies and errors          │
//! │  - The ONLY place that writes to the terminal               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (command.rs) + API (api.rs)                         │
//! │  - Text line → Command enum                                 │
//! │  - Command → handler, returning an Outcome                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per command, returns Result<String>          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  AddressBook (book.rs) + Record (model.rs)                  │
//! │  - Case-insensitive keys, insertion order, substring search │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every layer returns [`error::Result`]. Bad input, unknown contacts and
//! unknown commands are ordinary errors that the loop prints before reading
//! the next line. Only I/O and config failures end the session.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade owning the address book
//! - [`book`]: The in-memory [`book::AddressBook`]
//! - [`command`]: Line parser producing [`command::Command`]
//! - [`commands`]: Handler per command
//! - [`config`]: `config.json` loading
//! - [`error`]: Error types
//! - [`logging`]: tracing subscriber setup
//! - [`model`]: [`model::Record`]
//! - [`repl`]: The interactive loop

pub mod api;
pub mod book;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repl;
