//! The `pipe!` macro: left-to-right application.

/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` evaluates to `h(g(f(x)))`, the same result as
/// `compose!(h, g, f)(x)` but written in the order the data flows.
/// `pipe!(x)` is `x`.
///
/// # Examples
///
/// ```
/// use pointfree::pipe;
/// use pointfree::numeric::{is_small, square};
///
/// let small = pipe!(9, square, |result: Result<i64, _>| result.map(is_small));
/// assert_eq!(small, Ok(true));
///
/// let large = pipe!(11, square, |result: Result<i64, _>| result.map(is_small));
/// assert_eq!(large, Ok(false));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $stage:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!($stage($value) $(, $rest)*)
    };
}
