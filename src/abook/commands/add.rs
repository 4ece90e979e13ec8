use crate::book::AddressBook;
use crate::error::Result;
use crate::model::Record;
use tracing::info;

use super::helpers::require_not_blank;

pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<String> {
    require_not_blank(&[name, phone], "Please enter both name and phone number")?;

    match book.get_mut(name) {
        Some(record) => record.add_phone(phone),
        None => {
            info!(name, "creating contact");
            let mut record = Record::new(name);
            record.add_phone(phone);
            book.add_record(record);
        }
    }

    Ok(format!("Added phone {} for contact {}", phone, name))
}
