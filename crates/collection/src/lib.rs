//! Microlinq Collection - growable arrays with change notification.
//!
//! This crate provides the mutable containers of microlinq:
//!
//! - `GrowableArray`: contiguous array with doubling growth and shift-based
//!   insert/remove
//! - `NotifyingArray`: a growable array that fires `Added`/`Removed`/`Reset`
//!   events to its observers after every effective mutation
//! - `TypeCheckedArray`: a growable array of `Value`s that rejects elements
//!   of the wrong runtime type
//!
//! All three are [`Sequence`](microlinq_query::Sequence)s, so the query
//! operations of `microlinq-query` apply to them directly.
//!
//! # Example
//!
//! ```
//! use microlinq_collection::{ChangeAction, NotifyingArray};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut array = NotifyingArray::from(vec![5, 8]);
//! let events = Rc::new(RefCell::new(Vec::new()));
//! let sink = events.clone();
//! array.subscribe(move |_, event| sink.borrow_mut().push(event.action));
//!
//! array.insert(0, 9);
//! array.remove(&8);
//! array.add(11);
//!
//! assert_eq!(array.as_slice(), &[9, 5, 11]);
//! assert_eq!(events.borrow()[1], ChangeAction::Removed);
//! ```

#![no_std]

extern crate alloc;

pub mod change;
pub mod growable;
pub mod notifying;
pub mod subscription;
pub mod type_checked;

pub use change::{ChangeAction, ChangeEvent};
pub use growable::GrowableArray;
pub use notifying::NotifyingArray;
pub use subscription::{ChangeCallback, SubscriptionId, SubscriptionManager};
pub use type_checked::{TypeCheckedArray, DEFAULT_CAPACITY};
