//! Order-by engine.
//!
//! Sorting materializes the source into an owned buffer, computes each
//! element's key once, and runs a stable merge sort over the keyed buffer.
//! Keys are compared either by a caller-supplied comparer or by
//! [`default_compare`].

mod comparer;
mod merge_sort;

pub use comparer::{default_compare, ComparePlan};
pub use merge_sort::merge_sort;

use crate::sequence::Sequence;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::convert::Infallible;
use microlinq_core::{Result, Value};

/// Collects a sequence into a vector, pre-sized from its direct count.
pub fn materialize<S: Sequence + ?Sized>(source: &S) -> Vec<S::Item> {
    let mut buffer = Vec::with_capacity(source.direct_count().unwrap_or(0));
    buffer.extend(source.items());
    buffer
}

/// Sorts values by themselves with the default comparer.
pub fn order_by<S>(source: &S) -> Result<Vec<Value>>
where
    S: Sequence<Item = Value> + ?Sized,
{
    let items = materialize(source);
    if items.len() <= 1 {
        return Ok(items);
    }
    let plan = ComparePlan::resolve(&items);
    merge_sort(items, |a, b| plan.compare(a, b))
}

/// Sorts elements by a `Value` key with the default comparer.
pub fn order_by_key<S, F>(source: &S, selector: F) -> Result<Vec<S::Item>>
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item) -> Value,
{
    let items = materialize(source);
    if items.len() <= 1 {
        return Ok(items);
    }

    let keyed: Vec<(Value, S::Item)> = items
        .into_iter()
        .map(|item| (selector(&item), item))
        .collect();
    let plan = ComparePlan::resolve(keyed.iter().map(|(key, _)| key));
    let sorted = merge_sort(keyed, |a, b| plan.compare(&a.0, &b.0))?;
    Ok(sorted.into_iter().map(|(_, item)| item).collect())
}

/// Sorts elements by a key of any type with an explicit comparer.
pub fn order_by_with<S, K, F, C>(source: &S, selector: F, comparer: C) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let items = materialize(source);
    if items.len() <= 1 {
        return items;
    }

    let keyed: Vec<(K, S::Item)> = items
        .into_iter()
        .map(|item| (selector(&item), item))
        .collect();
    let sorted = match merge_sort(keyed, |a, b| Ok::<_, Infallible>(comparer(&a.0, &b.0))) {
        Ok(sorted) => sorted,
        Err(never) => match never {},
    };
    sorted.into_iter().map(|(_, item)| item).collect()
}
