//! # Address Book
//!
//! The in-memory store of all contacts. There is no persistence: the book is
//! created when the session starts and dropped when it ends.
//!
//! ## Keying
//!
//! Records are keyed by their name lowercased, so `Alice` and `alice` are the
//! same contact. The record itself keeps the name as first typed, and that is
//! what gets displayed.
//!
//! ## Ordering
//!
//! The book is backed by an [`IndexMap`], so listing and search results come
//! back in insertion order.

use crate::model::Record;
use indexmap::IndexMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing any record already stored under the same key.
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        let key = record.key();
        debug!(key = %key, "storing record");
        self.records.insert(key, record);
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(&name.to_lowercase())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&name.to_lowercase())
    }

    /// Records whose name contains `term` ignoring case, or that have a phone
    /// containing `term` exactly. Each record appears at most once.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        let term_lower = term.to_lowercase();
        let matches: Vec<&Record> = self
            .records
            .values()
            .filter(|record| {
                record.name().to_lowercase().contains(&term_lower)
                    || record.phones().iter().any(|phone| phone.contains(term))
            })
            .collect();
        debug!(term, hits = matches.len(), "searched address book");
        matches
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// --- Test Fixtures ---
