use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes.
///
/// Vacated slots are recycled through `vacant`, so a handle stays valid until
/// the node behind it is taken and may then be reissued for a new node.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        // Vacant slots absorb part of the request.
        let needed = additional.saturating_sub(self.vacant.len());
        self.slots.reserve(needed);
    }

    /// Releases trailing vacant slots and excess capacity.
    pub(crate) fn shrink_to_fit(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        let live = self.slots.len();
        self.vacant.retain(|handle| handle.slot() < live);
        self.slots.shrink_to_fit();
        self.vacant.shrink_to_fit();
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.vacant.len())
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            self.slots[handle.slot()] = Some(element);
            return handle;
        }
        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX + 1
        );
        self.slots.push(Some(element));
        Handle::from_slot(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.slot()].as_ref().expect("`Arena::get()` - `handle` is vacant!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.slot()].as_mut().expect("`Arena::get_mut()` - `handle` is vacant!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.slot()].take().expect("`Arena::take()` - `handle` is vacant!");
        self.vacant.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vacated_slot_is_reissued() {
        let mut arena: Arena<&str> = Arena::new();
        let ant = arena.alloc("ant");
        let bee = arena.alloc("bee");
        assert_eq!(arena.take(ant), "ant");
        assert_eq!(arena.len(), 1);

        let cat = arena.alloc("cat");
        assert_eq!(cat, ant);
        assert_eq!(*arena.get(cat), "cat");
        assert_eq!(*arena.get(bee), "bee");
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is vacant!")]
    fn stale_handle_panics() {
        let mut arena: Arena<u32> = Arena::new();
        let handle = arena.alloc(7);
        arena.take(handle);
        let _ = arena.get(handle);
    }

    #[test]
    fn shrink_drops_trailing_vacancies() {
        let mut arena: Arena<u32> = Arena::with_capacity(16);
        let first = arena.alloc(1);
        let second = arena.alloc(2);
        arena.take(second);
        arena.shrink_to_fit();

        assert_eq!(arena.len(), 1);
        assert_eq!(*arena.get(first), 1);
        // The trailing slot is gone, so the next allocation appends.
        assert_eq!(arena.alloc(3), second);
    }

    proptest! {
        #[test]
        fn arena_tracks_live_elements(values in prop::collection::vec(any::<u32>(), 0..128), drop_every in 1usize..5) {
            let mut arena: Arena<u32> = Arena::new();
            let handles: Vec<(Handle, u32)> = values.iter().map(|&value| (arena.alloc(value), value)).collect();

            let mut live = Vec::new();
            for (i, &(handle, value)) in handles.iter().enumerate() {
                if i % drop_every == 0 {
                    assert_eq!(arena.take(handle), value);
                } else {
                    live.push((handle, value));
                }
            }

            assert_eq!(arena.len(), live.len());
            for &(handle, value) in &live {
                assert_eq!(*arena.get(handle), value);
            }
        }
    }
}
