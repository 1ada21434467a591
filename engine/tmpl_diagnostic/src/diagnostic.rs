//! Structured diagnostics for degraded value operations.

use std::fmt;

/// The `Value` operation that produced a diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    ToText,
    ToInteger,
    ToFloat,
    ToBool,
    IsTrue,
    Negate,
    Len,
    Index,
    Slice,
    Contains,
    Iterate,
}

impl Operation {
    /// Name of the `Value` method, as it appears in diagnostic messages.
    pub const fn method_name(self) -> &'static str {
        match self {
            Operation::ToText => "to_text",
            Operation::ToInteger => "to_integer",
            Operation::ToFloat => "to_float",
            Operation::ToBool => "to_bool",
            Operation::IsTrue => "is_true",
            Operation::Negate => "negate",
            Operation::Len => "len",
            Operation::Index => "index",
            Operation::Slice => "slice",
            Operation::Contains => "contains",
            Operation::Iterate => "iterate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value::{}()", self.method_name())
    }
}

/// A degraded operation: the value's kind is not supported, so the
/// operation returned its fallback instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// The operation is not defined for this kind.
    #[error("{operation} not available for type: {type_name}")]
    Unsupported {
        operation: Operation,
        type_name: &'static str,
    },
    /// A mapping lookup used a key kind that lookups do not support.
    #[error("{operation} does not support lookup type '{type_name}'")]
    UnsupportedLookup {
        operation: Operation,
        type_name: &'static str,
    },
}

impl Diagnostic {
    #[inline]
    pub fn unsupported(operation: Operation, type_name: &'static str) -> Self {
        Diagnostic::Unsupported {
            operation,
            type_name,
        }
    }

    #[inline]
    pub fn unsupported_lookup(operation: Operation, type_name: &'static str) -> Self {
        Diagnostic::UnsupportedLookup {
            operation,
            type_name,
        }
    }

    /// The operation that degraded.
    pub fn operation(&self) -> Operation {
        match self {
            Diagnostic::Unsupported { operation, .. }
            | Diagnostic::UnsupportedLookup { operation, .. } => *operation,
        }
    }

    /// Kind name of the offending value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Diagnostic::Unsupported { type_name, .. }
            | Diagnostic::UnsupportedLookup { type_name, .. } => *type_name,
        }
    }
}
