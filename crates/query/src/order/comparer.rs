//! Default comparison of untyped values.

use core::cmp::Ordering;
use microlinq_core::{cmp_f64, Error, Result, Value, ValueKind};

/// Compares two values with the default comparison ladder.
///
/// The rungs are tried in order and the first one that applies decides:
///
/// 1. both values have the same naturally ordered kind, or the left value is
///    an object exposing [`Comparable`](microlinq_core::Comparable);
/// 2. the left value is an object whose type (or an ancestor type) registers
///    a `compare_to` entry;
/// 3. the values are equal, giving `Equal`;
/// 4. both values widen to the same numeric family: booleans, chars and
///    signed integers as `i64`, floats as `f64`, unsigned integers as `u64`;
/// 5. otherwise the comparison is unsupported.
///
/// Mixed signed and unsigned integers are not comparable. Callers that need
/// that must supply an explicit comparer.
pub fn default_compare(left: &Value, right: &Value) -> Result<Ordering> {
    if let Some(ord) = left.natural_cmp(right) {
        return Ok(ord);
    }

    if let Value::Object(object) = left {
        if let Some(comparable) = object.as_comparable() {
            return comparable.compare_to(right);
        }
        if let Some(compare_to) = object.type_info().find_compare_to() {
            return compare_to(object.as_ref(), right);
        }
    }

    if left == right {
        return Ok(Ordering::Equal);
    }

    if let Some(ord) = widened_cmp(left, right) {
        return Ok(ord);
    }

    tracing::debug!(
        left = left.kind().name(),
        right = right.kind().name(),
        "no default comparison between kinds"
    );
    Err(Error::unsupported_comparison(left.kind(), right.kind()))
}

fn widened_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (left.widen_integral(), right.widen_integral()) {
        return Some(a.cmp(&b));
    }
    if let (Some(a), Some(b)) = (left.widen_float(), right.widen_float()) {
        return Some(cmp_f64(a, b));
    }
    if let (Some(a), Some(b)) = (left.widen_unsigned(), right.widen_unsigned()) {
        return Some(a.cmp(&b));
    }
    None
}

/// How a batch of keys is compared.
///
/// Resolving once up front lets a homogeneous batch skip the ladder on every
/// pair. Both plans produce identical results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparePlan {
    /// Every key has this naturally ordered kind.
    Homogeneous(ValueKind),
    /// Keys are compared with [`default_compare`] pair by pair.
    PerPair,
}

impl ComparePlan {
    /// Picks the plan for a set of keys.
    pub fn resolve<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut kinds = keys.into_iter().map(Value::kind);
        match kinds.next() {
            Some(first) if first.has_natural_order() && kinds.all(|k| k == first) => {
                ComparePlan::Homogeneous(first)
            }
            _ => ComparePlan::PerPair,
        }
    }

    /// Compares two keys under this plan.
    #[inline]
    pub fn compare(&self, left: &Value, right: &Value) -> Result<Ordering> {
        match self {
            ComparePlan::Homogeneous(_) => match left.natural_cmp(right) {
                Some(ord) => Ok(ord),
                None => default_compare(left, right),
            },
            ComparePlan::PerPair => default_compare(left, right),
        }
    }
}
