use crate::types::ErrorVec;
use core::cell::RefCell;
use core::fmt::{self, Debug};
use std::rc::Rc;

/// A shared handle for accumulating items (failures recorded by a validation chain).
///
/// Cloning the handle aliases the same storage: every validator derived from,
/// or combined with, another sees the same list. Mutation goes through `&self`
/// so aliases never need exclusive access to one another.
pub struct Accumulator<T> {
    items: Rc<RefCell<ErrorVec<T>>>,
}

impl<T> Accumulator<T> {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self { items: Rc::new(RefCell::new(ErrorVec::new())) }
    }

    /// Adds a single item to the accumulator.
    #[inline]
    pub fn push(&self, item: T) {
        self.items.borrow_mut().push(item);
    }

    /// Extends the accumulator with items from an iterator.
    #[inline]
    pub fn extend<I: IntoIterator<Item = T>>(&self, iter: I) {
        self.items.borrow_mut().extend(iter);
    }

    /// Removes every item.
    #[inline]
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    /// Returns true if the accumulator is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Returns the number of items in the accumulator.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if both handles refer to the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> Accumulator<T> {
    /// Copies the current items out of the shared storage.
    #[inline]
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().iter().cloned().collect()
    }

    /// Appends every item of `other`; appending a handle to itself is a no-op.
    pub fn append_from(&self, other: &Self) {
        if self.ptr_eq(other) {
            return;
        }
        let items = other.snapshot();
        self.extend(items);
    }
}

impl<T> Clone for Accumulator<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { items: Rc::clone(&self.items) }
    }
}

impl<T> Default for Accumulator<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Accumulator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

impl<T> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: Rc::new(RefCell::new(iter.into_iter().collect())) }
    }
}
