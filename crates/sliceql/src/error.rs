//! Error types for the sliceql crate.

use thiserror::Error;

/// Errors reported by the checked accessors (`try_at`, `try_first`, `try_last`).
///
/// The unchecked accessors never fail; they fall back to the element type's
/// default value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query holds no elements.
    #[error("{op}: empty sequence")]
    EmptySequence { op: &'static str },

    /// The requested position is outside `0..len`.
    #[error("{op}: index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        op: &'static str,
        index: usize,
        len: usize,
    },
}

impl QueryError {
    /// Returns the name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            QueryError::EmptySequence { op } | QueryError::IndexOutOfBounds { op, .. } => op,
        }
    }
}

/// Result type for sliceql operations.
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        let err = QueryError::EmptySequence { op: "first" };
        assert_eq!(err.to_string(), "first: empty sequence");
        assert_eq!(err.op(), "first");

        let err = QueryError::IndexOutOfBounds {
            op: "at",
            index: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "at: index 7 out of bounds (len 3)");
        assert_eq!(err.op(), "at");
    }
}
