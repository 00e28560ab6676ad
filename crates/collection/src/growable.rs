//! Growable array with doubling capacity.
//!
//! `GrowableArray` keeps a logical capacity next to its element buffer. When
//! an insertion finds the array full, the capacity doubles (an empty array
//! grows to one slot) before any element is shifted.

use alloc::vec::Vec;
use core::mem;
use core::slice;
use microlinq_core::{Error, Result};
use microlinq_query::{Sequence, SliceCursor};

/// A contiguous, insertable array with a logical capacity.
///
/// Invariant: `len() <= capacity()`.
#[derive(Debug)]
pub struct GrowableArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> GrowableArray<T> {
    /// Creates an empty array.
    ///
    /// A negative capacity is an `OutOfRange` error.
    pub fn new(capacity: isize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self::with_capacity(capacity))
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates an array holding `initial`.
    ///
    /// The capacity is the larger of `capacity` and the number of initial
    /// elements, so no element is ever dropped.
    pub fn with_contents(capacity: isize, initial: Vec<T>) -> Result<Self> {
        let capacity = check_capacity(capacity)?.max(initial.len());
        let mut items = initial;
        items.reserve_exact(capacity - items.len());
        Ok(Self { items, capacity })
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the logical capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the logical capacity.
    ///
    /// Fails with `OutOfRange` if `capacity` is below the current length.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.items.len() {
            return Err(Error::out_of_range(
                "capacity",
                capacity as isize,
                self.items.len(),
            ));
        }
        if capacity > self.items.capacity() {
            self.items.reserve_exact(capacity - self.items.len());
        } else {
            self.items.shrink_to(capacity);
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Appends `value` and returns its index.
    pub fn add(&mut self, value: T) -> usize {
        let index = self.items.len();
        self.insert(index, value);
        index
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// Valid for `index <= len()`. Any other index leaves the array
    /// unchanged and returns false.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.grow_if_full();
        self.items.insert(index, value);
        true
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left. Returns None, leaving the array unchanged, if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        self.remove_at(index)
    }

    /// Removes every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }

    /// Returns the element at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    /// Returns true if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a copy of the elements.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Copies every element into `dest`, starting at `index`.
    ///
    /// Fails with `OutOfRange` if the elements do not fit.
    pub fn copy_to(&self, dest: &mut [T], index: usize) -> Result<()>
    where
        T: Clone,
    {
        let end = index
            .checked_add(self.items.len())
            .filter(|end| *end <= dest.len())
            .ok_or_else(|| Error::index_out_of_range(index, dest.len()))?;
        dest[index..end].clone_from_slice(&self.items);
        Ok(())
    }

    fn grow_if_full(&mut self) {
        if self.items.len() < self.capacity {
            return;
        }
        let grown = if self.capacity == 0 {
            1
        } else {
            self.capacity.saturating_mul(2)
        };
        tracing::debug!(from = self.capacity, to = grown, "growing array");
        self.items.reserve_exact(grown - self.items.len());
        self.capacity = grown;
    }
}

fn check_capacity(capacity: isize) -> Result<usize> {
    usize::try_from(capacity).map_err(|_| Error::out_of_range("capacity", capacity, 0))
}

impl<T: Clone> Clone for GrowableArray<T> {
    /// Copies the live elements only; the clone's capacity equals its length.
    fn clone(&self) -> Self {
        let items = self.items.clone();
        let capacity = items.len();
        Self { items, capacity }
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(items: Vec<T>) -> Self {
        let capacity = items.len();
        Self { items, capacity }
    }
}

impl<T> From<GrowableArray<T>> for Vec<T> {
    fn from(array: GrowableArray<T>) -> Self {
        array.items
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    /// Arrays are equal when their elements are; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Clone> Sequence for GrowableArray<T> {
    type Item = T;
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(&self.items)
    }

    fn direct_count(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use microlinq_query::Query;

    #[test]
    fn test_new_rejects_negative_capacity() {
        let err = GrowableArray::<i32>::new(-1).unwrap_err();
        assert_eq!(err, Error::out_of_range("capacity", -1, 0));

        let array = GrowableArray::<i32>::new(3).unwrap();
        assert_eq!(array.capacity(), 3);
        assert!(array.is_empty());
    }

    #[test]
    fn test_doubling_growth() {
        let mut array = GrowableArray::with_capacity(0);
        let mut seen = Vec::new();
        for i in 0..9 {
            array.add(i);
            seen.push(array.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn test_insert_shifts_right() {
        let mut array = GrowableArray::from(vec![5, 8]);
        assert!(array.insert(0, 9));
        assert!(array.insert(3, 1));
        assert_eq!(array.as_slice(), &[9, 5, 8, 1]);
    }

    #[test]
    fn test_out_of_range_insert_is_noop() {
        let mut array = GrowableArray::from(vec![1]);
        assert!(!array.insert(5, 2));
        assert_eq!(array.as_slice(), &[1]);
        assert_eq!(array.capacity(), 1);
    }

    #[test]
    fn test_remove_at_and_remove() {
        let mut array = GrowableArray::from(vec![1, 2, 3, 2]);
        assert_eq!(array.remove_at(0), Some(1));
        assert_eq!(array.remove_at(10), None);
        assert_eq!(array.remove(&2), Some(2));
        assert_eq!(array.remove(&7), None);
        assert_eq!(array.as_slice(), &[3, 2]);
    }

    #[test]
    fn test_clear_resets_len_keeps_capacity() {
        let mut array = GrowableArray::from(vec![1, 2, 3]);
        array.clear();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 3);
        assert!(array.get(0).is_err());
        assert_eq!(array.add(4), 0);
    }

    #[test]
    fn test_get_and_set() {
        let mut array = GrowableArray::from(vec![10, 20]);
        assert_eq!(*array.get(1).unwrap(), 20);
        assert_eq!(array.get(2).unwrap_err(), Error::index_out_of_range(2, 2));

        assert_eq!(array.set(0, 11).unwrap(), 10);
        assert_eq!(array.as_slice(), &[11, 20]);
        assert!(array.set(2, 0).is_err());

        *array.get_mut(1).unwrap() += 1;
        assert_eq!(array.as_slice(), &[11, 21]);
    }

    #[test]
    fn test_huge_index_reported_without_wrapping() {
        let array: GrowableArray<i32> = GrowableArray::with_capacity(0);
        let err = array.get(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                argument: "index",
                index: isize::MAX,
                len: 0,
            }
        );
    }

    #[test]
    fn test_with_contents_expands_capacity() {
        let array = GrowableArray::with_contents(1, vec![1, 2, 3]).unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 3);

        let roomy = GrowableArray::with_contents(10, vec![1]).unwrap();
        assert_eq!(roomy.capacity(), 10);

        assert!(GrowableArray::with_contents(-2, vec![1]).is_err());
    }

    #[test]
    fn test_set_capacity() {
        let mut array = GrowableArray::from(vec![1, 2, 3]);
        assert!(array.set_capacity(2).is_err());
        array.set_capacity(8).unwrap();
        assert_eq!(array.capacity(), 8);
        array.set_capacity(3).unwrap();
        assert_eq!(array.capacity(), 3);
        array.add(4);
        assert_eq!(array.capacity(), 6);
    }

    #[test]
    fn test_clone_has_no_slack() {
        let mut array = GrowableArray::with_capacity(16);
        array.add(1);
        array.add(2);
        let copy = array.clone();
        assert_eq!(copy, array);
        assert_eq!(copy.capacity(), 2);
    }

    #[test]
    fn test_copy_to() {
        let array = GrowableArray::from(vec![1, 2]);
        let mut dest = [0; 4];
        array.copy_to(&mut dest, 1).unwrap();
        assert_eq!(dest, [0, 1, 2, 0]);
        assert!(array.copy_to(&mut dest, 3).is_err());
        assert!(array.copy_to(&mut dest, usize::MAX).is_err());
    }

    #[test]
    fn test_conversions() {
        let array: GrowableArray<i32> = (1..=3).collect();
        assert_eq!(array.capacity(), 3);
        assert_eq!(array.to_vec(), vec![1, 2, 3]);
        assert_eq!(array.iter().sum::<i32>(), 6);
        let back: Vec<i32> = array.into();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn test_array_is_a_sequence() {
        let array = GrowableArray::from(vec![3, 1, 2]);
        assert_eq!(Query::count(&array), 3);
        assert_eq!(array.order_by_with(|x| *x, |a, b| a.cmp(b)), vec![1, 2, 3]);
        assert!(Query::contains(&array, &2));
    }
}
