use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::error::Result;
use crate::keyed::Keyed;
use crate::raw::{Handle, RawTree};

mod capacity;

/// An ordered collection of [`Keyed`] entries backed by a plain
/// [binary search tree].
///
/// Every node keeps a link to its parent, so [`successor`](Self::successor),
/// [`predecessor`](Self::predecessor) and iteration step through the tree
/// without rescanning from the root. The tree is never rebalanced: its shape
/// is decided by insertion order, and inserting keys in sorted order produces
/// a chain whose height equals its length.
///
/// Unlike `BTreeMap`, inserting an entry whose key is already present is an
/// error rather than a replacement, and removing an absent key is an error
/// rather than `None`. Lookups report a miss as `None`.
///
/// # Examples
///
/// ```
/// use lexi_tree::{Error, OrderedTree};
///
/// let mut tree = OrderedTree::new();
/// tree.insert(("m", 1)).unwrap();
/// tree.insert(("a", 2)).unwrap();
/// tree.insert(("z", 3)).unwrap();
///
/// assert_eq!(tree.insert(("a", 9)), Err(Error::DuplicateKey));
/// assert_eq!(tree.get(&"a"), Some(&("a", 2)));
/// assert_eq!(tree.successor(&"a"), Some(&("m", 1)));
/// assert_eq!(tree.remove(&"m"), Ok(("m", 1)));
/// assert_eq!(tree.remove(&"m"), Err(Error::KeyNotFound));
///
/// let keys: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
/// assert_eq!(keys, ["a", "z"]);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
pub struct OrderedTree<T> {
    raw: RawTree<T>,
}

/// An iterator over the entries of an `OrderedTree`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedTree`].
///
/// [`iter`]: OrderedTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    raw: &'a RawTree<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<T> OrderedTree<T> {
    /// Makes a new, empty `OrderedTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<(u32, &str)> = OrderedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        OrderedTree { raw: RawTree::new() }
    }

    /// Returns the number of entries in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of nodes on the longest path from the root, or `0`
    /// for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for key in 0..10 {
    ///     tree.insert((key, ())).unwrap();
    /// }
    /// // Sorted insertion is the worst case.
    /// assert_eq!(tree.height(), 10);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Returns the entry with the smallest key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.first(), None);
    /// tree.insert((2, "b")).unwrap();
    /// tree.insert((1, "a")).unwrap();
    /// assert_eq!(tree.first(), Some(&(1, "a")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first().map(|handle| self.raw.entry(handle))
    }

    /// Returns the entry with the largest key, or `None` if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last().map(|handle| self.raw.entry(handle))
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert((3, "c")).unwrap();
    /// tree.insert((1, "a")).unwrap();
    /// tree.insert((2, "b")).unwrap();
    ///
    /// let values: Vec<_> = tree.iter().map(|(_, value)| *value).collect();
    /// assert_eq!(values, ["a", "b", "c"]);
    ///
    /// assert_eq!(tree.iter().next_back(), Some(&(3, "c")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) per step, O(n) for a full pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            raw: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Collects, in ascending key order, every entry for which `predicate`
    /// returns `true`.
    ///
    /// The whole tree is visited; the result is gathered eagerly.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for key in [5, 2, 8, 1, 9] {
    ///     tree.insert((key, ())).unwrap();
    /// }
    /// let odd: Vec<_> = tree.filter_in_order(|(key, _)| key % 2 == 1).into_iter().map(|(key, _)| *key).collect();
    /// assert_eq!(odd, [1, 5, 9]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn filter_in_order<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matched = Vec::new();
        self.raw.for_each_in_order(|entry| {
            if predicate(entry) {
                matched.push(entry);
            }
        });
        matched
    }
}

impl<T: Keyed> OrderedTree<T> {
    /// Returns the entry whose key equals `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert((1, "a")).unwrap();
    /// assert_eq!(tree.get(&1), Some(&(1, "a")));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.raw.get(key)
    }

    /// Returns `true` if the tree contains an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.raw.search(key).is_some()
    }

    /// Inserts `entry` as a new leaf.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`](crate::Error::DuplicateKey) if an entry
    /// with an equal key is already present. The tree is left unchanged and
    /// `entry` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::{Error, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.insert((37, "a")), Ok(()));
    /// assert_eq!(tree.insert((37, "b")), Err(Error::DuplicateKey));
    /// assert_eq!(tree.get(&37), Some(&(37, "a")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, entry: T) -> Result<()> {
        self.raw.insert(entry).map(|_| ())
    }

    /// Removes the entry whose key equals `key` and returns it.
    ///
    /// When the matched node has two children, its in-order successor's entry
    /// takes its place and the successor's node is unlinked instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`](crate::Error::KeyNotFound) if the tree
    /// is empty or holds no entry for `key`.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn remove(&mut self, key: &T::Key) -> Result<T> {
        self.raw.remove(key)
    }

    /// Returns the entry that follows `key` in key order.
    ///
    /// Returns `None` both when `key` is the largest key and when `key` is not
    /// in the tree; use [`contains_key`](Self::contains_key) to tell them apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for key in [20, 10, 30] {
    ///     tree.insert((key, ())).unwrap();
    /// }
    /// assert_eq!(tree.successor(&10), Some(&(20, ())));
    /// assert_eq!(tree.successor(&30), None);
    /// assert_eq!(tree.successor(&15), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn successor(&self, key: &T::Key) -> Option<&T> {
        self.raw.successor(key).map(|handle| self.raw.entry(handle))
    }

    /// Returns the entry that precedes `key` in key order.
    ///
    /// Returns `None` both when `key` is the smallest key and when `key` is not
    /// in the tree.
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn predecessor(&self, key: &T::Key) -> Option<&T> {
        self.raw.predecessor(key).map(|handle| self.raw.entry(handle))
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OrderedTree<T> {
    fn clone(&self) -> Self {
        OrderedTree { raw: self.raw.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.raw.next(handle);
        Some(self.raw.entry(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.raw.prev(handle);
        Some(self.raw.entry(handle))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn iterator_meets_in_the_middle() {
        let mut tree = OrderedTree::new();
        for key in [4, 2, 6, 1, 3, 5, 7] {
            tree.insert((key, ())).unwrap();
        }

        let mut iter = tree.iter();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some(&(1, ())));
        assert_eq!(iter.next_back(), Some(&(7, ())));
        let rest: Vec<i32> = iter.by_ref().map(|&(key, ())| key).collect();
        assert_eq!(rest, vec![2, 3, 4, 5, 6]);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = OrderedTree::new();
        tree.insert((1, 'a')).unwrap();
        let mut copy = tree.clone();
        copy.insert((2, 'b')).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.last(), Some(&(2, 'b')));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut tree = OrderedTree::new();
        tree.insert((1, ())).unwrap();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.first(), None);
        assert_eq!(tree.height(), 0);
        tree.insert((1, ())).unwrap();
        assert_eq!(tree.len(), 1);
    }
}
