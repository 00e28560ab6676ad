//! Lazy mapping sequence.

use crate::sequence::{Cursor, Sequence};

/// A sequence of transformed source elements.
///
/// The transform is applied each time a cursor's current element is read,
/// never while advancing and never cached. A transform with side effects
/// therefore runs once per read, and not at all for positions that are
/// skipped without being read.
#[derive(Clone, Debug)]
pub struct Select<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Select<S, F> {
    /// Creates a new mapping sequence.
    pub fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }

    /// Returns the source sequence.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S, F, U> Sequence for Select<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a> = SelectCursor<'a, S::Cursor<'a>, F> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SelectCursor::new(self.source.cursor(), &self.transform)
    }

    fn direct_count(&self) -> Option<usize> {
        self.source.direct_count()
    }
}

/// Cursor over a [`Select`].
pub struct SelectCursor<'f, C, F> {
    inner: C,
    transform: &'f F,
}

impl<'f, C, F> SelectCursor<'f, C, F> {
    /// Wraps `inner`, transforming elements on read.
    pub fn new(inner: C, transform: &'f F) -> Self {
        Self { inner, transform }
    }
}

impl<C, F, U> Cursor for SelectCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    #[inline]
    fn advance(&mut self) -> bool {
        self.inner.advance()
    }

    fn current(&self) -> Option<U> {
        self.inner.current().map(self.transform)
    }

    #[inline]
    fn reset(&mut self) {
        self.inner.reset();
    }
}
