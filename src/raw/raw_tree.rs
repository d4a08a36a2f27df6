use core::cmp::Ordering;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::error::{Error, Result};
use crate::keyed::Keyed;

/// Explicit traversal stack. Degenerate trees spill to the heap instead of
/// overflowing the call stack.
type Stack<E> = SmallVec<[E; 32]>;

/// The unbalanced binary search tree backing `OrderedTree`.
#[derive(Clone)]
pub(crate) struct RawTree<T> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<T> RawTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Every live arena slot holds a node reachable from `root`.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the entry stored at `handle`.
    #[inline]
    pub(crate) fn entry(&self, handle: Handle) -> &T {
        self.nodes.get(handle).entry()
    }

    /// Returns the handle of the smallest entry.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme_from(root, Side::Left))
    }

    /// Returns the handle of the largest entry.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme_from(root, Side::Right))
    }

    /// Returns the in-order successor of `handle`.
    pub(crate) fn next(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Right)
    }

    /// Returns the in-order predecessor of `handle`.
    pub(crate) fn prev(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Left)
    }

    /// Follows `side` links from `handle` until the slot is empty.
    fn extreme_from(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.nodes.get(handle).child(side) {
            handle = child;
        }
        handle
    }

    /// Moves one position in key order: rightward for the successor, leftward
    /// for the predecessor.
    ///
    /// With a child on that side the neighbour is the nearest entry inside
    /// that subtree. Otherwise it is the first ancestor reached from the
    /// opposite side; running out of ancestors means `handle` is the extremum.
    fn step(&self, handle: Handle, toward: Side) -> Option<Handle> {
        if let Some(child) = self.nodes.get(handle).child(toward) {
            return Some(self.extreme_from(child, toward.opposite()));
        }
        let mut current = handle;
        loop {
            let (parent, side) = self.side_of(current)?;
            if side != toward {
                return Some(parent);
            }
            current = parent;
        }
    }

    /// Returns the parent of `handle` and the slot it occupies there.
    fn side_of(&self, handle: Handle) -> Option<(Handle, Side)> {
        let parent = self.nodes.get(handle).parent()?;
        let side = if self.nodes.get(parent).left() == Some(handle) {
            Side::Left
        } else {
            Side::Right
        };
        Some((parent, side))
    }

    /// Points `parent`'s `side` slot at `child`.
    ///
    /// The new child's parent link is set to `parent`; a different node that
    /// previously held the slot gets its parent link cleared.
    fn set_child(&mut self, parent: Handle, side: Side, child: Option<Handle>) {
        let previous = self.nodes.get_mut(parent).replace_child(side, child);
        if let Some(previous) = previous
            && Some(previous) != child
        {
            self.nodes.get_mut(previous).set_parent(None);
        }
        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(Some(parent));
        }
    }

    /// Puts `replacement` in the position `handle` occupies, detaching `handle`.
    fn replace_in_parent(&mut self, handle: Handle, replacement: Option<Handle>) {
        match self.side_of(handle) {
            Some((parent, side)) => self.set_child(parent, side, replacement),
            None => {
                self.root = replacement;
                if let Some(replacement) = replacement {
                    self.nodes.get_mut(replacement).set_parent(None);
                }
            }
        }
        trace!(?replacement, "spliced node out of its slot");
    }

    /// Visits every entry in ascending key order.
    pub(crate) fn for_each_in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let mut stack: Stack<Handle> = SmallVec::new();
        let mut cursor = self.root;
        loop {
            while let Some(handle) = cursor {
                stack.push(handle);
                cursor = self.nodes.get(handle).left();
            }
            let Some(handle) = stack.pop() else {
                break;
            };
            let node = self.nodes.get(handle);
            visit(node.entry());
            cursor = node.right();
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Stack<(Handle, usize)> = SmallVec::new();
        stack.extend(self.root.map(|root| (root, 1)));
        while let Some((handle, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.nodes.get(handle);
            if node.is_leaf() {
                continue;
            }
            stack.extend([node.left(), node.right()].into_iter().flatten().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

impl<T: Keyed> RawTree<T> {
    /// Descends from the root to the node whose key equals `key`.
    pub(crate) fn search(&self, key: &T::Key) -> Option<Handle> {
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            cursor = match key.cmp(node.entry().key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns the entry whose key equals `key`.
    pub(crate) fn get(&self, key: &T::Key) -> Option<&T> {
        self.search(key).map(|handle| self.entry(handle))
    }

    /// Inserts `entry` as a new leaf.
    ///
    /// Fails with [`Error::DuplicateKey`] before any node is allocated when an
    /// equal key is already present.
    pub(crate) fn insert(&mut self, entry: T) -> Result<Handle> {
        let Some(mut current) = self.root else {
            let handle = self.nodes.alloc(Node::new(entry));
            self.root = Some(handle);
            trace!("planted root");
            return Ok(handle);
        };

        let side = loop {
            let node = self.nodes.get(current);
            let side = match entry.key().cmp(node.entry().key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    debug!(len = self.len(), "rejected duplicate key");
                    return Err(Error::DuplicateKey);
                }
            };
            match node.child(side) {
                Some(child) => current = child,
                None => break side,
            }
        };

        let handle = self.nodes.alloc(Node::new(entry));
        self.set_child(current, side, Some(handle));
        trace!(?side, len = self.len(), "attached leaf");
        Ok(handle)
    }

    /// Removes and returns the entry whose key equals `key`.
    ///
    /// A node with at most one child is replaced by that child. A node with two
    /// children stays in place: its in-order successor, which has no left
    /// child, is unlinked instead and its entry overwrites the matched one.
    pub(crate) fn remove(&mut self, key: &T::Key) -> Result<T> {
        let Some(found) = self.search(key) else {
            debug!(len = self.len(), "remove missed");
            return Err(Error::KeyNotFound);
        };

        let node = self.nodes.get(found);
        let removed = match (node.left(), node.right()) {
            (None, promoted) | (promoted @ Some(_), None) => {
                self.replace_in_parent(found, promoted);
                self.nodes.take(found).into_entry()
            }
            (Some(_), Some(right)) => {
                let successor = self.extreme_from(right, Side::Left);
                let promoted = self.nodes.get(successor).right();
                self.replace_in_parent(successor, promoted);
                let moved = self.nodes.take(successor).into_entry();
                trace!("moved successor entry into two-child node");
                self.nodes.get_mut(found).replace_entry(moved)
            }
        };
        Ok(removed)
    }

    /// Returns the node following `key`, or `None` when `key` is the largest
    /// key or is absent.
    pub(crate) fn successor(&self, key: &T::Key) -> Option<Handle> {
        self.search(key).and_then(|handle| self.next(handle))
    }

    /// Returns the node preceding `key`, or `None` when `key` is the smallest
    /// key or is absent.
    pub(crate) fn predecessor(&self, key: &T::Key) -> Option<Handle> {
        self.search(key).and_then(|handle| self.prev(handle))
    }
}
