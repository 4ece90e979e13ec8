//! # Command Handlers
//!
//! One module per user command, each exposing a `run` function. Handlers take
//! plain string arguments and the [`AddressBook`](crate::book::AddressBook),
//! and return the text to show the user or a classified
//! [`AbookError`](crate::error::AbookError). They never print.

pub mod add;
pub mod change;
pub mod hello;
pub mod helpers;
pub mod phone;
pub mod remove;
pub mod search;
pub mod show_all;
