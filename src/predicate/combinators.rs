//! Boolean combinators over plain predicate closures.

/// Conjunction of two predicates: `and(p, q)(x) == p(x) && q(x)`.
///
/// `q` is not called when `p` already rejected the value. The input is
/// cloned once so both predicates can take it by value.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::and;
/// use pointfree::numeric::{is_even, is_small};
///
/// let small_and_even = and(is_small, is_even);
/// assert!(small_and_even(12));
/// assert!(!small_and_even(101));
/// assert!(!small_and_even(13));
/// ```
#[inline]
pub fn and<T, P, Q>(first: P, second: Q) -> impl Fn(T) -> bool
where
    T: Clone,
    P: Fn(T) -> bool,
    Q: Fn(T) -> bool,
{
    move |value: T| first(value.clone()) && second(value)
}

/// Disjunction of two predicates: `or(p, q)(x) == p(x) || q(x)`.
///
/// `q` is not called when `p` already accepted the value.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::or;
/// use pointfree::numeric::{is_even, is_small};
///
/// let small_or_even = or(is_small, is_even);
/// assert!(small_or_even(7));
/// assert!(small_or_even(1000));
/// assert!(!small_or_even(1001));
/// ```
#[inline]
pub fn or<T, P, Q>(first: P, second: Q) -> impl Fn(T) -> bool
where
    T: Clone,
    P: Fn(T) -> bool,
    Q: Fn(T) -> bool,
{
    move |value: T| first(value.clone()) || second(value)
}

/// Negation of a predicate: `negate(p)(x) == !p(x)`.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::{and, negate};
/// use pointfree::numeric::{is_even, is_small};
///
/// let is_odd = negate(is_even);
/// assert!(is_odd(73));
///
/// let not_small_odd = negate(and(is_small, is_odd));
/// assert!(!not_small_odd(73));
/// assert!(not_small_odd(74));
/// ```
#[inline]
pub fn negate<T, P>(predicate: P) -> impl Fn(T) -> bool
where
    P: Fn(T) -> bool,
{
    move |value| !predicate(value)
}
