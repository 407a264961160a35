//! Repeated application of a function to its own output.
//!
//! - [`twice`]: `twice(f)(x) = f(f(x))`
//! - [`nest`]: applies a function a fixed number of times
//! - [`try_twice`] / [`try_nest`]: the same for fallible stages, stopping at
//!   the first error
//!
//! # Doubling
//!
//! `twice` is an ordinary higher-order function, so it composes with itself.
//! `compose!(twice, twice)` is "apply four times", and wrapping `twice` around
//! something that already repeats doubles the count again. No special case is
//! involved; the count falls out of composition:
//!
//! ```
//! use pointfree::compose;
//! use pointfree::iterate::twice;
//!
//! let square = |value: u64| value * value;
//!
//! assert_eq!(twice(square)(2), 16);                    // 2^(2^2)
//! assert_eq!(compose!(twice, twice)(square)(2), 65536); // 2^(2^4)
//! ```
//!
//! # Overflow
//!
//! Repeating a growing function quickly leaves the range of any fixed-width
//! integer. The crate's policy is to report this as an error rather than wrap
//! or saturate: write the bounded step as a function returning `Result`
//! (such as [`numeric::square`](crate::numeric::square)) and iterate it with
//! [`try_twice`] or [`try_nest`]. The first failing step ends the iteration
//! and its error is returned.
//!
//! ```
//! use pointfree::compose;
//! use pointfree::iterate::try_twice;
//! use pointfree::numeric::{square, ArithmeticError};
//!
//! let sixteenth_power = compose!(try_twice, try_twice)(square);
//! assert_eq!(sixteenth_power(2), Ok(65536));
//!
//! let far_too_many = compose!(try_twice, try_twice, try_twice, try_twice)(square);
//! assert!(matches!(far_too_many(2), Err(ArithmeticError::Overflow { .. })));
//! ```

mod checked;

pub use checked::{try_nest, try_twice};

/// Applies `function` two times: `twice(f)(x) == f(f(x))`.
///
/// # Examples
///
/// ```
/// use pointfree::iterate::twice;
///
/// let add_three = |value: i64| value + 3;
/// assert_eq!(twice(add_three)(10), 16);
///
/// let shout = |text: String| text + "!";
/// assert_eq!(twice(shout)(String::from("hey")), "hey!!");
/// ```
#[inline]
pub fn twice<T, F>(function: F) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |value| function(function(value))
}

/// Applies `function` exactly `times` times.
///
/// `nest(f, 0)` is the identity and `nest(f, 2)` behaves like `twice(f)`.
///
/// # Examples
///
/// ```
/// use pointfree::iterate::nest;
///
/// let double = |value: u64| value * 2;
/// assert_eq!(nest(double, 0)(7), 7);
/// assert_eq!(nest(double, 10)(1), 1024);
/// ```
#[inline]
pub fn nest<T, F>(function: F, times: usize) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |value| (0..times).fold(value, |accumulator, _| function(accumulator))
}
