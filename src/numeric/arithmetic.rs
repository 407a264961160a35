//! Overflow-checked arithmetic steps.

use super::ArithmeticError;

/// Squares `value`, reporting overflow as an error.
///
/// This is the bounded step used with [`try_twice`](crate::iterate::try_twice)
/// and [`try_nest`](crate::iterate::try_nest): repeated squaring grows doubly
/// exponentially and leaves `i64` after a handful of steps.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when `value * value` does not fit in
/// an `i64`.
///
/// # Examples
///
/// ```
/// use pointfree::iterate::try_twice;
/// use pointfree::numeric::square;
///
/// assert_eq!(square(-12), Ok(144));
/// assert_eq!(try_twice(square)(2), Ok(16));
/// assert!(square(3_037_000_500).is_err());
/// ```
pub fn square(value: i64) -> Result<i64, ArithmeticError> {
    value
        .checked_mul(value)
        .ok_or_else(|| ArithmeticError::overflow("square", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(-1, 1)]
    #[case(256, 65_536)]
    #[case(65_536, 4_294_967_296)]
    #[case(3_037_000_499, 9_223_372_030_926_249_001)]
    #[case(-3_037_000_499, 9_223_372_030_926_249_001)]
    fn square_in_range(#[case] value: i64, #[case] expected: i64) {
        assert_eq!(square(value), Ok(expected));
    }

    #[rstest]
    #[case(3_037_000_500)]
    #[case(-3_037_000_500)]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    fn square_out_of_range(#[case] value: i64) {
        assert_eq!(
            square(value),
            Err(ArithmeticError::Overflow {
                operation: "square",
                operand: value
            })
        );
    }
}
