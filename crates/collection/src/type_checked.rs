//! Growable array restricted to one runtime type.

use crate::growable::GrowableArray;
use alloc::vec::Vec;
use core::slice;
use microlinq_core::{Error, Result, TypeTag, Value};
use microlinq_query::{Sequence, SliceCursor};

/// Capacity used by [`TypeCheckedArray::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// A growable array of values that are all instances of one [`TypeTag`].
///
/// Every insertion checks the value first; a value that is not an instance
/// of the collection type is rejected with `TypeMismatch` and the array is
/// left unchanged. Null is never an instance, so it can never be stored.
#[derive(Clone, Debug)]
pub struct TypeCheckedArray {
    collection_type: TypeTag,
    array: GrowableArray<Value>,
}

impl TypeCheckedArray {
    /// Creates an empty array with the default capacity.
    pub fn new(collection_type: TypeTag) -> Self {
        Self::with_capacity(collection_type, DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` values.
    pub fn with_capacity(collection_type: TypeTag, capacity: usize) -> Self {
        Self {
            collection_type,
            array: GrowableArray::with_capacity(capacity),
        }
    }

    /// Creates an array from `values`, checking every one of them.
    pub fn from_values(collection_type: TypeTag, values: Vec<Value>) -> Result<Self> {
        if let Some(bad) = values.iter().find(|v| !collection_type.is_instance(v)) {
            return Err(Error::type_mismatch(collection_type, bad.kind()));
        }
        Ok(Self {
            collection_type,
            array: GrowableArray::from(values),
        })
    }

    /// Returns the type every element must be an instance of.
    #[inline]
    pub fn collection_type(&self) -> TypeTag {
        self.collection_type
    }

    fn check(&self, value: &Value) -> Result<()> {
        if self.collection_type.is_instance(value) {
            Ok(())
        } else {
            Err(Error::type_mismatch(self.collection_type, value.kind()))
        }
    }

    /// Appends `value` and returns its index.
    pub fn add(&mut self, value: Value) -> Result<usize> {
        self.check(&value)?;
        Ok(self.array.add(value))
    }

    /// Inserts `value` at `index`.
    ///
    /// The type check comes first. A well-typed value with `index > len()`
    /// is not inserted and `Ok(false)` is returned.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<bool> {
        self.check(&value)?;
        Ok(self.array.insert(index, value))
    }

    /// Replaces the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value> {
        self.check(&value)?;
        self.array.set(index, value)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Value> {
        self.array.remove_at(index)
    }

    pub fn remove(&mut self, value: &Value) -> Option<Value> {
        self.array.remove(value)
    }

    pub fn clear(&mut self) {
        self.array.clear();
    }

    /// Returns the value at `index`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.array.get(index)
    }

    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.array.index_of(value)
    }

    /// Returns true if some element equals `value`.
    ///
    /// A value of the wrong type is never contained; the elements are not
    /// scanned for it.
    pub fn contains(&self, value: &Value) -> bool {
        self.collection_type.is_instance(value) && self.array.contains(value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.array.capacity()
    }

    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        self.array.set_capacity(capacity)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        self.array.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.array.iter()
    }

    /// Returns a snapshot of the values.
    pub fn to_vec(&self) -> Vec<Value> {
        self.array.to_vec()
    }
}

impl Sequence for TypeCheckedArray {
    type Item = Value;
    type Cursor<'a> = SliceCursor<'a, Value> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.array.as_slice())
    }

    fn direct_count(&self) -> Option<usize> {
        Some(self.array.len())
    }
}
