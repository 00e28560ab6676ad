//! Growable array that notifies observers of every mutation.
//!
//! Each effective mutation fires exactly one [`ChangeEvent`] after the
//! array has been updated: `Added` for an insertion, `Removed` for a
//! removal, `Reset` for a clear. Calls that change nothing (out-of-range
//! `insert`/`remove_at`, `remove` of a missing value) fire nothing. `clear`
//! always fires `Reset`, even on an empty array.
//!
//! Observers run synchronously inside the mutating call and receive the
//! array's elements as a read-only slice next to the event. An observer that
//! shares ownership of the array through `Rc<RefCell<_>>` finds it already
//! borrowed and cannot mutate it from within the callback.

use crate::change::ChangeEvent;
use crate::growable::GrowableArray;
use crate::subscription::{SubscriptionId, SubscriptionManager};
use alloc::vec::Vec;
use core::slice;
use microlinq_core::Result;
use microlinq_query::{Sequence, SliceCursor};

/// A growable array with synchronous change notification.
#[derive(Debug)]
pub struct NotifyingArray<T> {
    array: GrowableArray<T>,
    observers: SubscriptionManager<T>,
}

impl<T> Default for NotifyingArray<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> NotifyingArray<T> {
    /// Creates an empty array. A negative capacity is an `OutOfRange` error.
    pub fn new(capacity: isize) -> Result<Self> {
        Ok(Self::from_array(GrowableArray::new(capacity)?))
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_array(GrowableArray::with_capacity(capacity))
    }

    /// Creates an array holding `initial`, with a capacity of at least
    /// `capacity`.
    pub fn with_contents(capacity: isize, initial: Vec<T>) -> Result<Self> {
        let array = GrowableArray::with_contents(capacity, initial)?;
        Ok(Self::from_array(array))
    }

    fn from_array(array: GrowableArray<T>) -> Self {
        Self {
            array,
            observers: SubscriptionManager::new(),
        }
    }

    /// Registers an observer. It is called with the elements after each
    /// mutation and the event describing it.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&[T], &ChangeEvent) + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Unregisters an observer. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Returns the number of registered observers.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Appends `value`, fires `Added`, and returns the new element's index.
    pub fn add(&mut self, value: T) -> usize {
        let index = self.array.len();
        self.insert(index, value);
        index
    }

    /// Inserts `value` at `index` and fires `Added`.
    ///
    /// Out of range (`index > len()`) is a silent no-op returning false.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        let inserted = self.array.insert(index, value);
        if inserted {
            self.notify(ChangeEvent::added());
        }
        inserted
    }

    /// Removes the element at `index` and fires `Removed`.
    ///
    /// Out of range is a silent no-op returning None.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let removed = self.array.remove_at(index)?;
        self.notify(ChangeEvent::removed());
        Some(removed)
    }

    /// Removes the first element equal to `value` and fires `Removed`.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.array.index_of(value)?;
        self.remove_at(index)
    }

    /// Removes every element and fires `Reset`.
    pub fn clear(&mut self) {
        tracing::debug!(len = self.array.len(), "clearing notifying array");
        self.array.clear();
        self.notify(ChangeEvent::reset());
    }

    fn notify(&self, event: ChangeEvent) {
        self.observers.notify_all(self.array.as_slice(), &event);
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.array.get(index)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Replacing an element does not fire an event.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.array.set(index, value)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.array.index_of(value)
    }

    /// Returns true if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.array.contains(value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.array.capacity()
    }

    /// Changes the logical capacity; see [`GrowableArray::set_capacity`].
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        self.array.set_capacity(capacity)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.array.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.array.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.array.to_vec()
    }

    /// Copies every element into `dest`, starting at `index`.
    pub fn copy_to(&self, dest: &mut [T], index: usize) -> Result<()>
    where
        T: Clone,
    {
        self.array.copy_to(dest, index)
    }
}

impl<T: Clone> Clone for NotifyingArray<T> {
    /// Copies the live elements. Observers are not carried over.
    fn clone(&self) -> Self {
        Self::from_array(self.array.clone())
    }
}

impl<T> From<Vec<T>> for NotifyingArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_array(GrowableArray::from(items))
    }
}

impl<T> From<NotifyingArray<T>> for Vec<T> {
    fn from(array: NotifyingArray<T>) -> Self {
        array.array.into()
    }
}

impl<T> FromIterator<T> for NotifyingArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_array(iter.into_iter().collect())
    }
}

impl<T: Clone> Sequence for NotifyingArray<T> {
    type Item = T;
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.array.as_slice())
    }

    fn direct_count(&self) -> Option<usize> {
        Some(self.array.len())
    }
}
