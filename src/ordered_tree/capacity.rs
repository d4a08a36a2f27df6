use super::OrderedTree;
use crate::raw::RawTree;

impl<T> OrderedTree<T> {
    /// Creates an empty tree with node storage for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<(i32, i32)> = OrderedTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedTree {
            raw: RawTree::with_capacity(capacity),
        }
    }

    /// Returns the number of node slots allocated, live or vacant.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserves node storage for at least `additional` more entries.
    ///
    /// Slots vacated by earlier removals count toward the reservation.
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }

    /// Releases storage not needed by the current entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_capacity(64);
    /// tree.insert((1, ())).unwrap();
    /// tree.shrink_to_fit();
    /// assert!(tree.capacity() < 64);
    /// assert_eq!(tree.first(), Some(&(1, ())));
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
