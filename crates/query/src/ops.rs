//! Query operations over sequences.
//!
//! [`Query`] is implemented for every [`Sequence`]. Composing operations
//! (`filter`, `select`, `of_type`) build lazy sequences; the rest consume
//! the source immediately.

use crate::delegate::{InstanceOf, Predicate};
use crate::filter::Filter;
use crate::order;
use crate::select::Select;
use crate::sequence::{Cursor, Sequence};
use alloc::vec::Vec;
use core::cmp::Ordering;
use microlinq_core::{Error, Result, TypeTag, Value};

/// Query operations available on every sequence.
pub trait Query: Sequence {
    /// Lazily keeps the elements accepted by `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Predicate<Self::Item>,
    {
        Filter::new(self, predicate)
    }

    /// Lazily transforms every element.
    fn select<F, U>(self, transform: F) -> Select<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Select::new(self, transform)
    }

    /// Returns true if any element is accepted. Stops at the first match.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: Predicate<Self::Item>,
    {
        let mut cursor = self.cursor();
        while cursor.advance() {
            if let Some(item) = cursor.current() {
                if predicate.test(&item) {
                    return true;
                }
            }
        }
        false
    }

    /// Returns true if every element is accepted. Stops at the first
    /// rejection; true for an empty sequence.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Predicate<Self::Item>,
    {
        let mut cursor = self.cursor();
        while cursor.advance() {
            if let Some(item) = cursor.current() {
                if !predicate.test(&item) {
                    return false;
                }
            }
        }
        true
    }

    /// Counts the elements.
    ///
    /// Uses the direct count when the sequence has one. Otherwise the cursor
    /// is advanced to the end without reading any element.
    fn count(&self) -> usize {
        if let Some(count) = self.direct_count() {
            return count;
        }
        let mut cursor = self.cursor();
        let mut count = 0;
        while cursor.advance() {
            count += 1;
        }
        count
    }

    /// Counts the elements accepted by `predicate`.
    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Predicate<Self::Item>,
    {
        self.items().filter(|item| predicate.test(item)).count()
    }

    /// Returns true if some element equals `value`.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.items().any(|item| item == *value)
    }

    /// Returns the first element, or None for an empty sequence.
    fn first_or_default(&self) -> Option<Self::Item> {
        let mut cursor = self.cursor();
        if cursor.advance() {
            cursor.current()
        } else {
            None
        }
    }

    /// Returns the first element accepted by `predicate`, or None.
    fn first_or_default_where<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Predicate<Self::Item>,
    {
        self.items().find(|item| predicate.test(item))
    }

    /// Left fold in iteration order.
    fn aggregate<A, F>(&self, seed: A, func: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        self.items().fold(seed, func)
    }

    /// Left fold, then `result_selector` applied to the final accumulator.
    fn aggregate_with<A, R, F, G>(&self, seed: A, func: F, result_selector: G) -> R
    where
        F: FnMut(A, Self::Item) -> A,
        G: FnOnce(A) -> R,
    {
        result_selector(self.aggregate(seed, func))
    }

    /// Left fold seeded with the accumulator type's default value.
    fn aggregate_default<A, F>(&self, func: F) -> A
    where
        A: Default,
        F: FnMut(A, Self::Item) -> A,
    {
        self.aggregate(A::default(), func)
    }

    /// Sums signed integer values as `i64`.
    ///
    /// Any other kind of element is a type mismatch. Overflow is an error.
    fn sum(&self) -> Result<i64>
    where
        Self: Sequence<Item = Value>,
    {
        self.sum_by(|value| value)
    }

    /// Sums the signed integer values chosen by `selector`.
    fn sum_by<F>(&self, selector: F) -> Result<i64>
    where
        F: Fn(Self::Item) -> Value,
    {
        self.items().try_fold(0i64, |total, item| {
            let value = selector(item);
            let addend = value
                .signed_integral()
                .ok_or_else(|| Error::type_mismatch(TypeTag::SignedIntegral, value.kind()))?;
            total.checked_add(addend).ok_or_else(|| Error::overflow("sum"))
        })
    }

    /// Lazily keeps the values that are instances of `tag`.
    fn of_type(self, tag: TypeTag) -> Filter<Self, InstanceOf>
    where
        Self: Sized + Sequence<Item = Value>,
    {
        Filter::new(self, InstanceOf(tag))
    }

    /// Sorts the values with the default comparer.
    fn order_by(&self) -> Result<Vec<Value>>
    where
        Self: Sequence<Item = Value>,
    {
        order::order_by(self)
    }

    /// Sorts the elements by a `Value` key with the default comparer.
    fn order_by_key<F>(&self, selector: F) -> Result<Vec<Self::Item>>
    where
        F: Fn(&Self::Item) -> Value,
    {
        order::order_by_key(self, selector)
    }

    /// Sorts the elements by a key with an explicit comparer.
    fn order_by_with<K, F, C>(&self, selector: F, comparer: C) -> Vec<Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        order::order_by_with(self, selector, comparer)
    }
}

impl<S: Sequence + ?Sized> Query for S {}
