use crate::book::AddressBook;

use super::helpers::render_records;

pub fn run(book: &AddressBook) -> String {
    render_records(book.records())
}
