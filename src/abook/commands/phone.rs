use crate::book::AddressBook;
use crate::error::{AbookError, Result};

pub fn run(book: &AddressBook, name: &str) -> Result<String> {
    let record = book
        .get(name)
        .ok_or_else(|| AbookError::NotFound(name.to_string()))?;
    Ok(record.phones().join("\n"))
}
