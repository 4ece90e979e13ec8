use crate::book::AddressBook;
use crate::error::{AbookError, Result};

use super::helpers::render_records;

/// Searches using the second whitespace-separated token of `input`.
///
/// `input` is the whole command line, command word included. Tokens after the
/// search term are ignored.
pub fn run(book: &AddressBook, input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Err(AbookError::InvalidArgument(
            "Please enter a search string".to_string(),
        ));
    }

    let term = input.split_whitespace().nth(1).ok_or_else(|| {
        AbookError::InvalidArgument(
            "Invalid search format. Please enter a search string and try again.".to_string(),
        )
    })?;

    let matches = book.search(term);
    if matches.is_empty() {
        return Ok(format!("No contacts found for '{}'", term));
    }
    Ok(render_records(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::BookFixture;

    fn book() -> AddressBook {
        BookFixture::new()
            .with_contact("alice", &["12345"])
            .with_contact("bob", &["67890", "555"])
            .with_contact("ali5", &["555"])
            .book
    }

    #[test]
    fn renders_matches() {
        let reply = run(&book(), "search 555").unwrap();
        assert_eq!(reply, "bob: 67890, 555\nali5: 555");
    }

    #[test]
    fn lists_a_contact_once_when_name_and_phone_match() {
        let reply = run(&book(), "search 5").unwrap();
        assert_eq!(reply.matches("ali5:").count(), 1);
        assert_eq!(reply.lines().count(), 3);
    }

    #[test]
    fn ignores_extra_tokens() {
        let reply = run(&book(), "search ALI whatever else").unwrap();
        assert_eq!(reply, "alice: 12345\nali5: 555");
    }

    #[test]
    fn reports_no_matches() {
        let reply = run(&book(), "search zzz").unwrap();
        assert_eq!(reply, "No contacts found for 'zzz'");
    }

    #[test]
    fn single_token_is_invalid_format() {
        let err = run(&book(), "foo").unwrap_err();
        assert!(matches!(err, AbookError::InvalidArgument(_)));
        assert!(err.to_string().starts_with("Invalid search format"));
    }

    #[test]
    fn blank_input_is_invalid() {
        let err = run(&book(), "   ").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a search string");
    }
}
