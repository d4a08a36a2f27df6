use alloc::string::String;

use crate::key::Key;
use crate::keyed::Keyed;

/// A dictionary entry: a [`Key`] and its payload.
///
/// The payload is opaque text: a definition, a translation, a file path or
/// a URL, depending on the key's type tag. Records are never edited in place.
///
/// # Examples
///
/// ```
/// use lexi_tree::{Key, Record};
///
/// let record = Record::new(Key::new("cat", 1), "A small feline.");
/// assert_eq!(record.key().label(), "cat");
/// assert_eq!(record.data(), "A small feline.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    key: Key,
    data: String,
}

impl Record {
    /// Creates a record storing `data` under `key`.
    #[must_use]
    pub fn new(key: Key, data: impl Into<String>) -> Self {
        Record { key, data: data.into() }
    }

    /// Returns the record's key.
    #[must_use]
    pub const fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the payload.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Splits the record into its key and payload.
    #[must_use]
    pub fn into_parts(self) -> (Key, String) {
        (self.key, self.data)
    }
}

impl Keyed for Record {
    type Key = Key;

    fn key(&self) -> &Key {
        &self.key
    }
}
