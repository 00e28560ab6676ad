//! Runtime kinds and type tags for microlinq values.
//!
//! `ValueKind` is the discriminant of a [`Value`](crate::Value). `TypeTag`
//! is the runtime type-membership test used by `of_type` and by the
//! type-checked array.

use crate::object::TypeInfo;
use crate::value::Value;
use core::fmt;

/// The runtime kind of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The absent value
    Null,
    /// Boolean (true/false)
    Boolean,
    /// Unicode scalar value
    Char,
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit unsigned integer
    UInt64,
    /// 32-bit floating point number
    Float32,
    /// 64-bit floating point number
    Float64,
    /// UTF-8 string
    String,
    /// Host-defined object
    Object,
}

impl ValueKind {
    /// Returns a short human readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "bool",
            ValueKind::Char => "char",
            ValueKind::Int8 => "i8",
            ValueKind::Int16 => "i16",
            ValueKind::Int32 => "i32",
            ValueKind::Int64 => "i64",
            ValueKind::UInt8 => "u8",
            ValueKind::UInt16 => "u16",
            ValueKind::UInt32 => "u32",
            ValueKind::UInt64 => "u64",
            ValueKind::Float32 => "f32",
            ValueKind::Float64 => "f64",
            ValueKind::String => "string",
            ValueKind::Object => "object",
        }
    }

    /// Returns whether this kind is a signed integer of any width.
    #[inline]
    pub fn is_signed_integral(&self) -> bool {
        matches!(
            self,
            ValueKind::Int8 | ValueKind::Int16 | ValueKind::Int32 | ValueKind::Int64
        )
    }

    /// Returns whether this kind widens losslessly into an `i64`.
    ///
    /// Booleans and chars count as integral here.
    #[inline]
    pub fn is_integral_like(&self) -> bool {
        self.is_signed_integral() || matches!(self, ValueKind::Boolean | ValueKind::Char)
    }

    /// Returns whether this kind is an unsigned integer of any width.
    #[inline]
    pub fn is_unsigned_integral(&self) -> bool {
        matches!(
            self,
            ValueKind::UInt8 | ValueKind::UInt16 | ValueKind::UInt32 | ValueKind::UInt64
        )
    }

    /// Returns whether this kind is a floating point number.
    #[inline]
    pub fn is_floating(&self) -> bool {
        matches!(self, ValueKind::Float32 | ValueKind::Float64)
    }

    /// Returns whether this kind is any numeric kind.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.is_signed_integral() || self.is_unsigned_integral() || self.is_floating()
    }

    /// Returns whether two values of this kind have a built-in total order.
    #[inline]
    pub fn has_natural_order(&self) -> bool {
        !matches!(self, ValueKind::Null | ValueKind::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A runtime type-membership test.
///
/// `Null` is never an instance of any tag, `Any` included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeTag {
    /// Any non-null value
    Any,
    /// Exactly one value kind (`Kind(ValueKind::Object)` accepts every object)
    Kind(ValueKind),
    /// `Int8` through `Int64`
    SignedIntegral,
    /// `UInt8` through `UInt64`
    UnsignedIntegral,
    /// `Float32` or `Float64`
    Floating,
    /// Any numeric kind
    Numeric,
    /// Objects whose type is, or derives from, the given type
    Object(&'static TypeInfo),
}

impl TypeTag {
    /// Returns true if `value` is an instance of this tag.
    pub fn is_instance(&self, value: &Value) -> bool {
        let kind = value.kind();
        if kind == ValueKind::Null {
            return false;
        }

        match self {
            TypeTag::Any => true,
            TypeTag::Kind(expected) => kind == *expected,
            TypeTag::SignedIntegral => kind.is_signed_integral(),
            TypeTag::UnsignedIntegral => kind.is_unsigned_integral(),
            TypeTag::Floating => kind.is_floating(),
            TypeTag::Numeric => kind.is_numeric(),
            TypeTag::Object(info) => value
                .as_object()
                .map(|obj| obj.type_info().is_subtype_of(info))
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Any => f.write_str("any"),
            TypeTag::Kind(kind) => write!(f, "{}", kind),
            TypeTag::SignedIntegral => f.write_str("signed integer"),
            TypeTag::UnsignedIntegral => f.write_str("unsigned integer"),
            TypeTag::Floating => f.write_str("floating point"),
            TypeTag::Numeric => f.write_str("number"),
            TypeTag::Object(info) => write!(f, "object {}", info.name()),
        }
    }
}

impl From<ValueKind> for TypeTag {
    fn from(kind: ValueKind) -> Self {
        TypeTag::Kind(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;
    use core::any::Any;

    static SHAPE: TypeInfo = TypeInfo::new("Shape");
    static CIRCLE: TypeInfo = TypeInfo::new("Circle").with_parent(&SHAPE);

    #[derive(Debug)]
    struct Circle;

    impl Object for Circle {
        fn type_info(&self) -> &'static TypeInfo {
            &CIRCLE
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_kind_families() {
        assert!(ValueKind::Int16.is_signed_integral());
        assert!(ValueKind::Char.is_integral_like());
        assert!(ValueKind::Boolean.is_integral_like());
        assert!(!ValueKind::UInt8.is_integral_like());
        assert!(ValueKind::UInt8.is_unsigned_integral());
        assert!(ValueKind::Float32.is_floating());
        assert!(!ValueKind::Boolean.is_numeric());
        assert!(!ValueKind::Object.has_natural_order());
    }

    #[test]
    fn test_null_is_never_an_instance() {
        assert!(!TypeTag::Any.is_instance(&Value::Null));
        assert!(!TypeTag::Kind(ValueKind::Null).is_instance(&Value::Null));
    }

    #[test]
    fn test_kind_and_family_tags() {
        assert!(TypeTag::Kind(ValueKind::Int32).is_instance(&Value::Int32(1)));
        assert!(!TypeTag::Kind(ValueKind::Int32).is_instance(&Value::Int64(1)));
        assert!(TypeTag::SignedIntegral.is_instance(&Value::Int8(1)));
        assert!(TypeTag::Numeric.is_instance(&Value::Float32(1.5)));
        assert!(!TypeTag::Numeric.is_instance(&Value::String("1".into())));
    }

    #[test]
    fn test_object_tag_follows_parent_chain() {
        let circle = Value::object(Circle);
        assert!(TypeTag::Object(&CIRCLE).is_instance(&circle));
        assert!(TypeTag::Object(&SHAPE).is_instance(&circle));
        assert!(TypeTag::Kind(ValueKind::Object).is_instance(&circle));
        assert!(!TypeTag::Object(&CIRCLE).is_instance(&Value::Int32(3)));
    }
}
