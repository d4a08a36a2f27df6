use super::handle::Handle;

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A binary search tree cell.
///
/// Nodes only record their links; keeping a child's `parent` in step with the
/// parent's child slot is the job of `RawTree::set_child`, which can reach
/// both nodes through the arena.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    entry: T,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `entry`.
    pub(crate) const fn new(entry: T) -> Self {
        Self {
            entry,
            left: None,
            right: None,
            parent: None,
        }
    }

    #[inline]
    pub(crate) const fn entry(&self) -> &T {
        &self.entry
    }

    /// Replaces the entry, returning the previous one. Links are untouched.
    pub(crate) fn replace_entry(&mut self, entry: T) -> T {
        core::mem::replace(&mut self.entry, entry)
    }

    pub(crate) fn into_entry(self) -> T {
        self.entry
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Overwrites one child slot and returns what it held.
    pub(crate) fn replace_child(&mut self, side: Side, child: Option<Handle>) -> Option<Handle> {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        core::mem::replace(slot, child)
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    /// Returns true if the node has neither child.
    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
