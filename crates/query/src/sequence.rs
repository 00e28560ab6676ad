//! Cursor and sequence abstractions.
//!
//! A [`Sequence`] produces fresh [`Cursor`]s; a cursor walks the sequence
//! one element at a time. Cursors are pull-based: nothing is produced until
//! the consumer calls [`Cursor::advance`].
//!
//! Dropping a wrapping cursor drops the cursor it wraps, so resources held by
//! the innermost source are released when the outermost cursor goes out of
//! scope.

use alloc::vec::Vec;
use core::cell::RefCell;

/// A positioned cursor over a sequence.
///
/// A new cursor is positioned before the first element.
pub trait Cursor {
    /// The element type.
    type Item;

    /// Moves to the next element. Returns false once the sequence is exhausted.
    fn advance(&mut self) -> bool;

    /// Returns the element at the current position, or None when the cursor
    /// is before the first element or past the last one.
    fn current(&self) -> Option<Self::Item>;

    /// Rewinds to before the first element.
    ///
    /// Cursors that cannot rewind (single-pass sources) ignore this.
    fn reset(&mut self) {}
}

/// Adapts a cursor into a Rust [`Iterator`].
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: Cursor> CursorIter<C> {
    /// Wraps a cursor.
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the wrapped cursor.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.advance() {
            self.cursor.current()
        } else {
            None
        }
    }
}

/// Anything that can produce cursors.
///
/// Each call to [`Sequence::cursor`] starts from the beginning, except for
/// single-pass sources such as [`OnceSequence`].
pub trait Sequence {
    /// The element type.
    type Item;

    /// The cursor type, borrowing the sequence.
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Returns a cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Returns the number of elements when known without iterating.
    fn direct_count(&self) -> Option<usize> {
        None
    }

    /// Returns a Rust iterator over the elements.
    fn items(&self) -> CursorIter<Self::Cursor<'_>> {
        CursorIter::new(self.cursor())
    }
}

impl<'s, S: Sequence + ?Sized> Sequence for &'s S {
    type Item = S::Item;
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }

    fn direct_count(&self) -> Option<usize> {
        (**self).direct_count()
    }
}

/// Cursor over a borrowed slice. Yields clones of the elements.
#[derive(Clone, Debug)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    /// 0 = before first, k = at index k - 1, len + 1 = past the end
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor over `items`.
    pub fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }
}

impl<T: Clone> Cursor for SliceCursor<'_, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.position <= self.items.len() {
            self.position += 1;
        }
        self.position <= self.items.len()
    }

    fn current(&self) -> Option<T> {
        self.position
            .checked_sub(1)
            .and_then(|idx| self.items.get(idx))
            .cloned()
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}

impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self)
    }

    fn direct_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.as_slice())
    }

    fn direct_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

/// A sequence over a single-pass iterator.
///
/// Every cursor pulls from the same underlying iterator, so iterating a
/// second time continues where the first iteration stopped (and yields
/// nothing once the iterator is drained). Reset has no effect.
pub struct OnceSequence<I> {
    source: RefCell<I>,
}

impl<I: Iterator> OnceSequence<I> {
    /// Wraps an iterator.
    pub fn new(source: I) -> Self {
        Self {
            source: RefCell::new(source),
        }
    }
}

/// Cursor over a [`OnceSequence`].
pub struct OnceCursor<'a, I: Iterator> {
    source: &'a RefCell<I>,
    current: Option<I::Item>,
}

impl<I> Cursor for OnceCursor<'_, I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        self.current = self.source.borrow_mut().next();
        self.current.is_some()
    }

    fn current(&self) -> Option<I::Item> {
        self.current.clone()
    }
}

impl<I> Sequence for OnceSequence<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    type Cursor<'a> = OnceCursor<'a, I> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        OnceCursor {
            source: &self.source,
            current: None,
        }
    }
}
