use alloc::vec::Vec;

use tracing::debug;

use crate::error::{Error, Result};
use crate::key::Key;
use crate::ordered_tree::{Iter, OrderedTree};
use crate::record::Record;

mod command;
mod seed;

pub use command::{Command, Reply};

/// An ordered dictionary of [`Record`]s keyed by `(label, type)`.
///
/// `Dictionary` is a thin facade over [`OrderedTree`]: `put` and `remove`
/// report failures as [`Error`]s, every lookup reports a miss as `None`.
///
/// # Examples
///
/// ```
/// use lexi_tree::{Dictionary, Error, Key, Record};
///
/// let mut dictionary = Dictionary::new();
/// dictionary.put(Record::new(Key::new("bee", 1), "A flying insect.")).unwrap();
/// dictionary.put(Record::new(Key::new("ant", 1), "A small insect.")).unwrap();
/// dictionary.put(Record::new(Key::new("apple", 2), "pomme")).unwrap();
///
/// let found: Vec<_> = dictionary.prefix_scan("A").iter().map(|record| record.key().label()).collect();
/// assert_eq!(found, ["ant", "apple"]);
///
/// assert_eq!(dictionary.smallest().map(|record| record.data()), Some("A small insect."));
/// assert_eq!(
///     dictionary.put(Record::new(Key::new("BEE", 1), "again")),
///     Err(Error::DuplicateKey)
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    tree: OrderedTree<Record>,
}

impl Dictionary {
    /// Makes a new, empty `Dictionary`.
    #[must_use]
    pub const fn new() -> Self {
        Dictionary { tree: OrderedTree::new() }
    }

    /// Creates an empty dictionary with room for at least `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary {
            tree: OrderedTree::with_capacity(capacity),
        }
    }

    /// Returns the number of record slots allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Reserves room for at least `additional` more records.
    pub fn reserve(&mut self, additional: usize) {
        self.tree.reserve(additional);
    }

    /// Shrinks the allocation as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.tree.shrink_to_fit();
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the dictionary holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the record stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Record> {
        self.tree.get(key)
    }

    /// Returns `true` if a record is stored under `key`.
    ///
    /// Tells an absent key apart from one without a neighbour, since
    /// [`successor`](Self::successor) and [`predecessor`](Self::predecessor)
    /// answer `None` for both.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.tree.contains_key(key)
    }

    /// Inserts `record`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if a record with the same key exists;
    /// the existing record is kept.
    pub fn put(&mut self, record: Record) -> Result<()> {
        self.tree.insert(record)
    }

    /// Removes and returns the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the dictionary holds no records, and
    /// [`Error::KeyNotFound`] if it holds none under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::{Dictionary, Error, Key, Record};
    ///
    /// let mut dictionary = Dictionary::new();
    /// assert_eq!(dictionary.remove(&Key::new("cat", 1)), Err(Error::Empty));
    ///
    /// dictionary.put(Record::new(Key::new("cat", 1), "A small feline.")).unwrap();
    /// assert_eq!(dictionary.remove(&Key::new("cat", 2)), Err(Error::KeyNotFound));
    /// assert!(dictionary.remove(&Key::new("cat", 1)).is_ok());
    /// ```
    pub fn remove(&mut self, key: &Key) -> Result<Record> {
        if self.tree.is_empty() {
            debug!(%key, "remove on empty dictionary");
            return Err(Error::Empty);
        }
        self.tree.remove(key)
    }

    /// Returns the record after `key` in key order.
    ///
    /// `None` when `key` is the largest key or is not in the dictionary.
    #[must_use]
    pub fn successor(&self, key: &Key) -> Option<&Record> {
        self.tree.successor(key)
    }

    /// Returns the record before `key` in key order.
    ///
    /// `None` when `key` is the smallest key or is not in the dictionary.
    #[must_use]
    pub fn predecessor(&self, key: &Key) -> Option<&Record> {
        self.tree.predecessor(key)
    }

    /// Returns the record with the smallest key.
    #[must_use]
    pub fn smallest(&self) -> Option<&Record> {
        self.tree.first()
    }

    /// Returns the record with the largest key.
    #[must_use]
    pub fn largest(&self) -> Option<&Record> {
        self.tree.last()
    }

    /// Returns every record whose label starts with `prefix`, ignoring case,
    /// in ascending key order.
    ///
    /// # Complexity
    ///
    /// O(n): every record is visited.
    #[must_use]
    pub fn prefix_scan(&self, prefix: &str) -> Vec<&Record> {
        let prefix = prefix.to_lowercase();
        self.tree.filter_in_order(|record| record.key().label().starts_with(prefix.as_str()))
    }

    /// Gets an iterator over the records in ascending key order.
    pub fn iter(&self) -> Iter<'_, Record> {
        self.tree.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Record;
    type IntoIter = Iter<'a, Record>;

    fn into_iter(self) -> Iter<'a, Record> {
        self.iter()
    }
}
