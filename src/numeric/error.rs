//! Error types for bounded integer arithmetic.

use thiserror::Error;

/// An arithmetic step left the range of its integer type.
///
/// Returned by the checked operations in [`numeric`](crate::numeric) instead
/// of wrapping or panicking.
///
/// # Examples
///
/// ```rust
/// use pointfree::numeric::{square, ArithmeticError};
///
/// let error = square(i64::MAX).unwrap_err();
/// assert_eq!(error, ArithmeticError::Overflow { operation: "square", operand: i64::MAX });
/// assert_eq!(error.to_string(), "square(9223372036854775807) overflows i64");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The result of `operation` applied to `operand` does not fit in `i64`.
    #[error("{operation}({operand}) overflows i64")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
        /// The input that caused the overflow.
        operand: i64,
    },
}

impl ArithmeticError {
    /// Builds an [`ArithmeticError::Overflow`] and records it as a debug event.
    pub(crate) fn overflow(operation: &'static str, operand: i64) -> Self {
        tracing::debug!(operation, operand, "integer overflow");
        Self::Overflow { operation, operand }
    }
}
