/// An entry that carries its own ordering key.
///
/// [`OrderedTree`](crate::OrderedTree) orders its entries by [`Keyed::key`].
/// Pairs order by their first element, so `(K, V)` works as a plain map entry.
///
/// # Examples
///
/// ```
/// use lexi_tree::{Keyed, OrderedTree};
///
/// let mut tree = OrderedTree::new();
/// tree.insert((3, "c")).unwrap();
/// tree.insert((1, "a")).unwrap();
///
/// assert_eq!(tree.first().map(|entry| entry.key()), Some(&1));
/// ```
pub trait Keyed {
    /// The totally ordered key type.
    type Key: ?Sized + Ord;

    /// Returns the key this entry is ordered by.
    fn key(&self) -> &Self::Key;
}

impl<K: Ord, V> Keyed for (K, V) {
    type Key = K;

    #[inline]
    fn key(&self) -> &K {
        &self.0
    }
}
