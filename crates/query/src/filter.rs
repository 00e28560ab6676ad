//! Lazy filtering sequence.

use crate::delegate::Predicate;
use crate::sequence::{Cursor, Sequence};

/// A sequence of the source elements accepted by a predicate.
///
/// Building the sequence or obtaining a cursor never evaluates the
/// predicate; it runs only while the cursor advances.
#[derive(Clone, Debug)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    /// Creates a new filtering sequence.
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }

    /// Returns the source sequence.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a> = FilterCursor<'a, S::Cursor<'a>, P> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor::new(self.source.cursor(), &self.predicate)
    }
}

/// Cursor over a [`Filter`].
pub struct FilterCursor<'p, C, P> {
    inner: C,
    predicate: &'p P,
}

impl<'p, C, P> FilterCursor<'p, C, P> {
    /// Wraps `inner`, skipping elements rejected by `predicate`.
    pub fn new(inner: C, predicate: &'p P) -> Self {
        Self { inner, predicate }
    }
}

impl<C, P> Cursor for FilterCursor<'_, C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        while self.inner.advance() {
            match self.inner.current() {
                Some(item) if self.predicate.test(&item) => return true,
                _ => {}
            }
        }
        false
    }

    #[inline]
    fn current(&self) -> Option<C::Item> {
        self.inner.current()
    }

    #[inline]
    fn reset(&mut self) {
        self.inner.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn test_filter_basic() {
        let data = vec![10, 5, 15, 20];
        let filtered = Filter::new(&data, |x: &i32| *x > 8);
        assert_eq!(filtered.items().collect::<Vec<_>>(), vec![10, 15, 20]);
    }

    #[test]
    fn test_filter_no_match() {
        let data = vec![1, 2, 3];
        let filtered = Filter::new(&data, |x: &i32| *x > 100);
        let mut cursor = filtered.cursor();
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_predicate_is_lazy() {
        let calls = Cell::new(0);
        let data = vec![1, 2, 3, 4];
        let filtered = Filter::new(&data, |x: &i32| {
            calls.set(calls.get() + 1);
            x % 2 == 0
        });

        let mut cursor = filtered.cursor();
        assert_eq!(calls.get(), 0);

        // Skips 1, stops at 2.
        assert!(cursor.advance());
        assert_eq!(calls.get(), 2);
        assert_eq!(cursor.current(), Some(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_filter_reset_delegates() {
        let data = vec![1, 2, 3, 4];
        let filtered = Filter::new(&data, |x: &i32| x % 2 == 1);
        let mut cursor = filtered.cursor();
        while cursor.advance() {}

        cursor.reset();
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Some(1));
    }

    struct DropTracking<'a> {
        items: Vec<i32>,
        position: usize,
        dropped: &'a Cell<bool>,
    }

    impl Cursor for DropTracking<'_> {
        type Item = i32;

        fn advance(&mut self) -> bool {
            self.position += 1;
            self.position <= self.items.len()
        }

        fn current(&self) -> Option<i32> {
            self.position.checked_sub(1).and_then(|i| self.items.get(i)).copied()
        }
    }

    impl Drop for DropTracking<'_> {
        fn drop(&mut self) {
            self.dropped.set(true);
        }
    }

    #[test]
    fn test_dropping_filter_cursor_drops_source() {
        let dropped = Cell::new(false);
        let inner = DropTracking {
            items: vec![1, 2, 3],
            position: 0,
            dropped: &dropped,
        };
        let above_one = |x: &i32| *x > 1;
        let mut cursor = FilterCursor::new(inner, &above_one);
        assert!(cursor.advance());
        assert!(!dropped.get());

        drop(cursor);
        assert!(dropped.get());
    }

    #[test]
    fn test_reset_without_rewind_is_noop() {
        let dropped = Cell::new(false);
        let inner = DropTracking {
            items: vec![1, 2, 3],
            position: 0,
            dropped: &dropped,
        };
        let accept_all = |_: &i32| true;
        let mut cursor = FilterCursor::new(inner, &accept_all);
        assert!(cursor.advance());
        cursor.reset();
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Some(2));
    }
}
