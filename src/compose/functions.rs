//! Function-level combinators.
//!
//! The macros in this module cover the variadic cases; the functions here are
//! the fixed-arity building blocks they are defined in terms of, usable
//! anywhere a plain value is more convenient than a macro:
//!
//! - [`compose`]: `compose(f, g)(x) = f(g(x))` (the B combinator)
//! - [`try_compose`]: composition of fallible stages
//! - [`identity`]: the unit of composition (the I combinator)
//! - [`constant`]: ignores its input (the K combinator)
//! - [`flip`]: swaps the arguments of a binary function (the C combinator)

/// Composes two functions right to left.
///
/// Given `outer: B -> C` and `inner: A -> B`, returns `A -> C` such that
/// `compose(outer, inner)(x) == outer(inner(x))`. Neither function is called
/// until the result is called.
///
/// # Laws
///
/// - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
/// - **Identity**: `compose(identity, f) == f == compose(f, identity)`
///
/// # Examples
///
/// ```
/// use pointfree::compose::compose;
///
/// fn increment(value: i64) -> i64 { value + 1 }
/// fn double(value: i64) -> i64 { value * 2 }
///
/// let double_then_increment = compose(increment, double);
/// assert_eq!(double_then_increment(5), 11);
///
/// let increment_then_double = compose(double, increment);
/// assert_eq!(increment_then_double(5), 12);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Composes two fallible functions right to left.
///
/// This is composition in the `Result` Kleisli category: `inner` runs first,
/// and `outer` only runs if `inner` returned `Ok`. The first error is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use pointfree::compose::try_compose;
///
/// fn halve(value: u32) -> Result<u32, String> {
///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("{value} is odd")) }
/// }
///
/// let quarter = try_compose(halve, halve);
/// assert_eq!(quarter(12), Ok(3));
/// assert_eq!(quarter(6), Err("3 is odd".to_string()));
/// assert_eq!(quarter(5), Err("5 is odd".to_string()));
/// ```
#[inline]
pub fn try_compose<A, B, C, E, F, G>(outer: F, inner: G) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(B) -> Result<C, E>,
    G: Fn(A) -> Result<B, E>,
{
    move |input| inner(input).and_then(&outer)
}

/// Returns its argument unchanged.
///
/// `identity` is the unit of composition: composing it on either side of a
/// function yields a function that behaves the same.
///
/// # Examples
///
/// ```
/// use pointfree::compose::{compose, identity};
///
/// fn negate(value: i64) -> i64 { -value }
///
/// assert_eq!(identity(7), 7);
/// assert_eq!(compose(identity, negate)(7), negate(7));
/// assert_eq!(compose(negate, identity)(7), negate(7));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::constant;
///
/// let zero = constant::<_, i64>(0);
/// assert_eq!(zero(41), 0);
///
/// let flags: Vec<bool> = (1..=3).map(constant(true)).collect();
/// assert_eq!(flags, vec![true, true, true]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`, and flipping twice gives back a function that
/// behaves like `f`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::flip;
///
/// fn is_multiple_of(value: i64, divisor: i64) -> bool { value % divisor == 0 }
///
/// let divides = flip(is_multiple_of);
/// assert!(divides(3, 12));
/// assert!(!divides(5, 12));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
