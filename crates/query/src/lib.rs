//! Microlinq Query - lazy sequence composition and query operations.
//!
//! This crate provides:
//!
//! - `sequence`: the `Cursor` and `Sequence` abstractions and basic sources
//! - `delegate`: predicate contract and boxed delegate aliases
//! - `filter`, `select`: the lazy filtering and mapping sequences
//! - `ops`: the `Query` extension trait (any, all, count, aggregate, sum, ...)
//! - `order`: the order-by engine (default comparison ladder, stable merge sort)
//!
//! # Example
//!
//! ```
//! use microlinq_core::Value;
//! use microlinq_query::Query;
//!
//! let data = vec![Value::Int32(4), Value::Int32(9), Value::Int32(2)];
//! let large = data.as_slice().filter(|v: &Value| v.as_i32() > Some(3));
//! assert_eq!(large.count(), 2);
//! assert_eq!(data.order_by().unwrap()[0], Value::Int32(2));
//! ```

#![no_std]

extern crate alloc;

pub mod delegate;
pub mod filter;
pub mod ops;
pub mod order;
pub mod select;
pub mod sequence;

pub use delegate::{
    BoxedAggregate, BoxedComparer, BoxedPredicate, BoxedSelector, BoxedTransform, InstanceOf,
    Predicate,
};
pub use filter::{Filter, FilterCursor};
pub use ops::Query;
pub use order::{default_compare, merge_sort, ComparePlan};
pub use select::{Select, SelectCursor};
pub use sequence::{Cursor, CursorIter, OnceCursor, OnceSequence, Sequence, SliceCursor};
