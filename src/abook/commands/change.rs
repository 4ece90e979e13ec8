use crate::book::AddressBook;
use crate::error::{AbookError, Result};

pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<String> {
    let record = book
        .get_mut(name)
        .ok_or_else(|| AbookError::NotFound(name.to_string()))?;

    if !record.edit_phone(old, new) {
        return Err(AbookError::InvalidArgument(format!(
            "{} is not in {}'s phones",
            old, name
        )));
    }

    Ok(format!("Changed phone {} to {} for contact {}", old, new, name))
}
