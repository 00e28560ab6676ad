//! Host-defined objects stored inside a [`Value`].
//!
//! An object reports a static [`TypeInfo`] descriptor. The descriptor names
//! the type, links it to an optional parent type (so `Circle` is an instance
//! of `Shape`), and may carry a `compare_to` entry that the default
//! comparison ladder discovers at runtime.

use crate::error::Result;
use crate::value::Value;
use core::any::Any;
use core::cmp::Ordering;
use core::fmt;
use core::ptr;

/// A `compare_to` entry registered on a type descriptor.
pub type CompareToFn = fn(&dyn Object, &Value) -> Result<Ordering>;

/// Static descriptor of a host object type.
///
/// Descriptors are compared by identity, so declare each one as a `static`.
///
/// ```
/// use microlinq_core::TypeInfo;
///
/// static ANIMAL: TypeInfo = TypeInfo::new("Animal");
/// static DOG: TypeInfo = TypeInfo::new("Dog").with_parent(&ANIMAL);
///
/// assert!(DOG.is_subtype_of(&ANIMAL));
/// assert!(!ANIMAL.is_subtype_of(&DOG));
/// ```
pub struct TypeInfo {
    name: &'static str,
    parent: Option<&'static TypeInfo>,
    compare_to: Option<CompareToFn>,
}

impl TypeInfo {
    /// Creates a root type descriptor.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            parent: None,
            compare_to: None,
        }
    }

    /// Sets the parent type.
    pub const fn with_parent(mut self, parent: &'static TypeInfo) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Registers a `compare_to` entry for this type.
    pub const fn with_compare_to(mut self, compare_to: CompareToFn) -> Self {
        self.compare_to = Some(compare_to);
        self
    }

    /// Returns the type name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parent type, if any.
    #[inline]
    pub fn parent(&self) -> Option<&'static TypeInfo> {
        self.parent
    }

    /// Returns true if this type is `other` or derives from it.
    pub fn is_subtype_of(&self, other: &TypeInfo) -> bool {
        let mut current = Some(self);
        while let Some(info) = current {
            if ptr::eq(info, other) {
                return true;
            }
            current = info.parent;
        }
        false
    }

    /// Looks up a `compare_to` entry on this type or its nearest ancestor.
    pub fn find_compare_to(&self) -> Option<CompareToFn> {
        let mut current = Some(self);
        while let Some(info) = current {
            if let Some(f) = info.compare_to {
                return Some(f);
            }
            current = info.parent;
        }
        None
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for TypeInfo {}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("parent", &self.parent.map(|p| p.name))
            .field("compare_to", &self.compare_to.is_some())
            .finish()
    }
}

/// A host-defined object.
pub trait Object: fmt::Debug {
    /// Returns the static type descriptor of this object.
    fn type_info(&self) -> &'static TypeInfo;

    /// Returns `self` as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns the three-way comparison capability, if the object has one.
    fn as_comparable(&self) -> Option<&dyn Comparable> {
        None
    }

    /// Value equality with another object.
    ///
    /// Two `Value::Object`s sharing one allocation are always equal; this
    /// hook decides for distinct allocations.
    fn equals(&self, _other: &dyn Object) -> bool {
        false
    }
}

/// Three-way comparison capability of an object.
pub trait Comparable {
    /// Compares `self` with `other`.
    fn compare_to(&self, other: &Value) -> Result<Ordering>;
}
