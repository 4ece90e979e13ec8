use crate::book::AddressBook;
use crate::error::{AbookError, Result};

pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<String> {
    let record = book
        .get_mut(name)
        .ok_or_else(|| AbookError::NotFound(name.to_string()))?;

    if !record.remove_phone(phone) {
        return Err(AbookError::InvalidArgument(format!(
            "{} is not in {}'s phones",
            phone, name
        )));
    }

    Ok(format!("Removed phone {} from contact {}", phone, name))
}
