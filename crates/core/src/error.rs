//! Error types for microlinq.

use crate::types::{TypeTag, ValueKind};
use alloc::string::String;
use core::fmt;

/// Result type alias for microlinq operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for collection and query operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An index or capacity argument outside its valid range.
    OutOfRange {
        argument: &'static str,
        index: isize,
        len: usize,
    },
    /// A value rejected because it is not an instance of the expected type.
    TypeMismatch {
        expected: TypeTag,
        got: ValueKind,
    },
    /// The default comparer found no way to order two values.
    UnsupportedComparison {
        left: ValueKind,
        right: ValueKind,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        operation: &'static str,
    },
    /// Invalid operation.
    InvalidOperation {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange {
                argument,
                index,
                len,
            } => {
                write!(f, "Argument {} out of range: {} (length {})", argument, index, len)
            }
            Error::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
            Error::UnsupportedComparison { left, right } => {
                write!(
                    f,
                    "Cannot compare {} with {} automatically; please specify a comparer",
                    left, right
                )
            }
            Error::Overflow { operation } => {
                write!(f, "Integer overflow in {}", operation)
            }
            Error::InvalidOperation { message } => {
                write!(f, "Invalid operation: {}", message)
            }
        }
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates an out of range error for an index argument.
    ///
    /// Indices above `isize::MAX` are reported as `isize::MAX`.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange {
            argument: "index",
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }

    /// Creates an out of range error for a named argument.
    pub fn out_of_range(argument: &'static str, index: isize, len: usize) -> Self {
        Error::OutOfRange {
            argument,
            index,
            len,
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: impl Into<TypeTag>, got: ValueKind) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            got,
        }
    }

    /// Creates an unsupported comparison error.
    pub fn unsupported_comparison(left: ValueKind, right: ValueKind) -> Self {
        Error::UnsupportedComparison { left, right }
    }

    /// Creates an overflow error.
    pub fn overflow(operation: &'static str) -> Self {
        Error::Overflow { operation }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Error::InvalidOperation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::type_mismatch(ValueKind::Int32, ValueKind::String);
        assert!(err.to_string().contains("Type mismatch"));

        let err = Error::index_out_of_range(5, 2);
        assert!(err.to_string().contains("index"));
        assert!(err.to_string().contains('5'));

        let err = Error::unsupported_comparison(ValueKind::Object, ValueKind::Int32);
        assert!(err.to_string().contains("specify a comparer"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::out_of_range("capacity", -1, 0);
        match err {
            Error::OutOfRange { argument, index, .. } => {
                assert_eq!(argument, "capacity");
                assert_eq!(index, -1);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }

        match Error::type_mismatch(TypeTag::Numeric, ValueKind::Char) {
            Error::TypeMismatch { expected, got } => {
                assert_eq!(expected, TypeTag::Numeric);
                assert_eq!(got, ValueKind::Char);
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_huge_index_saturates() {
        let err = Error::index_out_of_range(usize::MAX, 0);
        assert_eq!(
            err,
            Error::OutOfRange {
                argument: "index",
                index: isize::MAX,
                len: 0,
            }
        );
        assert!(!err.to_string().contains("-1"));
    }
}
