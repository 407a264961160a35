//! Integer predicates.
//!
//! All of them are total over `i64`: intermediate products that would
//! overflow are handled rather than wrapped, so the answer is always the
//! mathematically correct one.

/// The largest magnitude [`is_small`] accepts.
pub const SMALL_BOUND: u64 = 100;

/// Returns `true` if `value` is divisible by 2.
#[inline]
pub const fn is_even(value: i64) -> bool {
    value % 2 == 0
}

/// Returns `true` if `value` is not divisible by 2.
#[inline]
pub const fn is_odd(value: i64) -> bool {
    !is_even(value)
}

/// Returns `true` if `|value| <= 100`.
///
/// ```
/// use pointfree::numeric::is_small;
///
/// assert!(is_small(-100));
/// assert!(!is_small(101));
/// assert!(!is_small(i64::MIN));
/// ```
#[inline]
pub const fn is_small(value: i64) -> bool {
    value.unsigned_abs() <= SMALL_BOUND
}

/// Returns `true` if `square == root * root`.
///
/// A `root` whose square does not fit in `i64` cannot match any `i64`, so it
/// yields `false` instead of overflowing.
///
/// ```
/// use pointfree::numeric::is_square_of;
///
/// assert!(is_square_of(9, 3));
/// assert!(is_square_of(9, -3));
/// assert!(!is_square_of(8, 3));
/// ```
#[inline]
pub fn is_square_of(square: i64, root: i64) -> bool {
    root.checked_mul(root) == Some(square)
}

/// Returns `true` if `x² + y² == z²`.
///
/// The sums are computed in `i128`, where every square of an `i64` fits.
/// Only the sum of two squares of `i64::MIN` exceeds `i128`; such a sum is
/// larger than any `z²` and the result is `false`.
///
/// ```
/// use pointfree::numeric::is_triple;
///
/// assert!(is_triple(3, 4, 5));
/// assert!(!is_triple(1, 2, 3));
/// ```
#[inline]
pub fn is_triple(x: i64, y: i64, z: i64) -> bool {
    let square = |value: i64| i128::from(value) * i128::from(value);
    square(x).checked_add(square(y)) == Some(square(z))
}
