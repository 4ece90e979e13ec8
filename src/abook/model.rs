use std::fmt;

/// One contact: a display name and its phone numbers, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<String>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// Lookup key for this record inside an [`AddressBook`](crate::book::AddressBook).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn add_phone(&mut self, phone: impl Into<String>) {
        self.phones.push(phone.into());
    }

    /// Removes the first phone equal to `phone`. Returns false if none matched.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces the first phone equal to `old` with `new`. Returns false if none matched.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> bool {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new.into();
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_phone_keeps_duplicates_in_order() {
        let mut record = Record::new("alice");
        record.add_phone("1");
        record.add_phone("2");
        record.add_phone("1");
        assert_eq!(record.phones, vec!["1", "2", "1"]);
    }

    #[test]
    fn remove_phone_drops_only_the_first_match() {
        let mut record = Record::new("alice");
        record.add_phone("1");
        record.add_phone("1");

        assert!(record.remove_phone("1"));
        assert_eq!(record.phones, vec!["1"]);
        assert!(!record.remove_phone("9"));
    }

    #[test]
    fn edit_phone_replaces_first_match() {
        let mut record = Record::new("alice");
        record.add_phone("1");
        record.add_phone("1");

        assert!(record.edit_phone("1", "2"));
        assert_eq!(record.phones, vec!["2", "1"]);
        assert!(!record.edit_phone("9", "3"));
        assert_eq!(record.phones, vec!["2", "1"]);
    }

    #[test]
    fn displays_name_and_comma_joined_phones() {
        let mut record = Record::new("Alice");
        assert_eq!(record.to_string(), "Alice: ");
        record.add_phone("123");
        record.add_phone("456");
        assert_eq!(record.to_string(), "Alice: 123, 456");
        assert_eq!(record.key(), "alice");
    }
}
