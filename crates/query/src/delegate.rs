//! Delegate contracts used by query operations.
//!
//! Operations accept plain closures. The boxed aliases are for callers that
//! need to store delegates or choose them at runtime.

use alloc::boxed::Box;
use core::cmp::Ordering;
use microlinq_core::{TypeTag, Value};

/// Decides whether an element is accepted.
pub trait Predicate<T: ?Sized> {
    /// Returns true if `item` is accepted.
    fn test(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Accepts values that are instances of a runtime type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstanceOf(pub TypeTag);

impl Predicate<Value> for InstanceOf {
    #[inline]
    fn test(&self, item: &Value) -> bool {
        self.0.is_instance(item)
    }
}

/// `Predicate(o) -> bool`
pub type BoxedPredicate<T> = Box<dyn Fn(&T) -> bool>;

/// `Selector(o) -> key`
pub type BoxedSelector<T, K> = Box<dyn Fn(&T) -> K>;

/// `Comparer(a, b) -> ordering`
pub type BoxedComparer<K> = Box<dyn Fn(&K, &K) -> Ordering>;

/// `Aggregate(acc, o) -> acc`
pub type BoxedAggregate<A, T> = Box<dyn Fn(A, T) -> A>;

/// `Transform(o) -> o'`
pub type BoxedTransform<T, U> = Box<dyn Fn(T) -> U>;
