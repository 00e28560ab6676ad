//! Stable top-down merge sort with a fallible comparer.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// Sorts `items` with a fallible comparer.
///
/// Stable: when the comparer reports `Equal`, the element from the left run
/// is emitted first. Inputs of length 0 or 1 are returned without calling
/// the comparer. The first comparer error aborts the sort.
pub fn merge_sort<T, E, F>(items: Vec<T>, mut compare: F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    sort_run(items, &mut compare)
}

fn sort_run<T, E, F>(mut items: Vec<T>, compare: &mut F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let right = items.split_off(items.len() / 2);
    let left = sort_run(items, compare)?;
    let right = sort_run(right, compare)?;
    merge(left, right, compare)
}

fn merge<T, E, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r)? != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::convert::Infallible;

    fn by_key(a: &(i32, char), b: &(i32, char)) -> Result<Ordering, Infallible> {
        Ok(a.0.cmp(&b.0))
    }

    #[test]
    fn test_merge_sort_basic() {
        let sorted = merge_sort(vec![5, 3, 9, 1, 4], |a: &i32, b: &i32| {
            Ok::<_, Infallible>(a.cmp(b))
        })
        .unwrap();
        assert_eq!(sorted, vec![1, 3, 4, 5, 9]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let input = vec![(1, 'b'), (1, 'a'), (0, 'c'), (1, 'd'), (0, 'e')];
        let sorted = merge_sort(input, by_key).unwrap();
        assert_eq!(
            sorted,
            vec![(0, 'c'), (0, 'e'), (1, 'b'), (1, 'a'), (1, 'd')]
        );
    }

    #[test]
    fn test_short_inputs_skip_comparer() {
        let mut calls = 0;
        let mut counting = |a: &i32, b: &i32| {
            calls += 1;
            Ok::<_, Infallible>(a.cmp(b))
        };
        assert_eq!(merge_sort(Vec::new(), &mut counting).unwrap(), Vec::<i32>::new());
        assert_eq!(merge_sort(vec![7], &mut counting).unwrap(), vec![7]);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_comparer_error_aborts() {
        let result = merge_sort(vec![4, 3, 2, 1], |a: &i32, b: &i32| {
            if *a == 1 || *b == 1 {
                Err("cannot compare 1")
            } else {
                Ok(a.cmp(b))
            }
        });
        assert_eq!(result, Err("cannot compare 1"));
    }
}
