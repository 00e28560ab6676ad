//! Microlinq Core - value model and error types shared by every microlinq crate.
//!
//! - `Value`: the tagged variant untyped collection elements are stored as
//! - `ValueKind`: the runtime kind of a value
//! - `TypeTag`: runtime type-membership tests (`of_type`, type-checked arrays)
//! - `Object` / `TypeInfo` / `Comparable`: host-defined objects and their descriptors
//! - `Error`: error types for collection and query operations
//!
//! # Example
//!
//! ```rust
//! use microlinq_core::{TypeTag, Value, ValueKind};
//!
//! let v = Value::from(42i32);
//! assert_eq!(v.kind(), ValueKind::Int32);
//! assert!(TypeTag::SignedIntegral.is_instance(&v));
//! assert!(!TypeTag::Any.is_instance(&Value::Null));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod object;
mod types;
mod value;

pub use error::{Error, Result};
pub use object::{Comparable, CompareToFn, Object, TypeInfo};
pub use types::{TypeTag, ValueKind};
pub use value::{cmp_f64, Value};
