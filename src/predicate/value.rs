//! A reified, shareable predicate value.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use static_assertions::assert_impl_all;

/// A boolean test over values of type `T`, stored as a first-class value.
///
/// `Predicate` wraps a closure in an [`Arc`], so cloning is cheap and the
/// value can be shared between threads. Predicates are immutable: every
/// combinator returns a new predicate and leaves its operands untouched.
///
/// Besides the named methods, the boolean operators are overloaded:
/// `p & q` is [`and`](Self::and), `p | q` is [`or`](Self::or) and `!p` is
/// [`negate`](Self::negate). They act on predicates, never on the booleans
/// they produce.
///
/// # Laws
///
/// For all predicates `p`, `q` and values `x`:
///
/// - `(p & q).test(x) == p.test(x) && q.test(x)`
/// - `(p | q).test(x) == p.test(x) || q.test(x)`
/// - `(!!p).test(x) == p.test(x)`
/// - `(!(p & q)).test(x) == (!p | !q).test(x)` (De Morgan)
/// - [`always`](Self::always) is the unit of `&`, [`never`](Self::never) the
///   unit of `|`
///
/// # Examples
///
/// ```
/// use pointfree::predicate::Predicate;
/// use pointfree::numeric::{is_even, is_small};
///
/// let small = Predicate::new(is_small);
/// let even = Predicate::new(is_even);
/// let odd = !even.clone();
///
/// assert!((small.clone() & even).test(12));
///
/// let not_small_and_odd = !(small & odd);
/// assert!(!not_small_and_odd.test(73));
/// assert!(not_small_and_odd.test(75_000));
/// ```
pub struct Predicate<T> {
    test: Arc<dyn Fn(T) -> bool + Send + Sync>,
}

assert_impl_all!(Predicate<i64>: Clone, Send, Sync, fmt::Debug);
assert_impl_all!(Predicate<String>: Clone, Send, Sync);

impl<T: 'static> Predicate<T> {
    /// Wraps a closure or function as a predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(T) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// The predicate that accepts every value.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// The predicate that rejects every value.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Evaluates the predicate.
    #[inline]
    pub fn test(&self, value: T) -> bool {
        (self.test)(value)
    }

    /// Negates the predicate.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(move |value| !self.test(value))
    }

    /// Adapts the predicate to another input type by first applying
    /// `projection`.
    ///
    /// `p.contramap(f).test(x) == p.test(f(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::predicate::Predicate;
    /// use pointfree::numeric::is_even;
    ///
    /// let even_length = Predicate::new(is_even).contramap(|text: &'static str| {
    ///     i64::try_from(text.len()).unwrap_or(i64::MAX)
    /// });
    /// assert!(even_length.test("four"));
    /// assert!(!even_length.test("three"));
    /// ```
    pub fn contramap<U, F>(self, projection: F) -> Predicate<U>
    where
        U: 'static,
        F: Fn(U) -> T + Send + Sync + 'static,
    {
        Predicate::new(move |value| self.test(projection(value)))
    }

    /// Turns the predicate back into a plain closure, for APIs that expect
    /// `Fn(T) -> bool`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::predicate::Predicate;
    /// use pointfree::numeric::is_small;
    ///
    /// let small = Predicate::new(is_small).into_fn();
    /// let values: Vec<i64> = [3, 300, -30, -3000].into_iter().filter(|&n| small(n)).collect();
    /// assert_eq!(values, vec![3, -30]);
    /// ```
    pub fn into_fn(self) -> impl Fn(T) -> bool + Clone + Send + Sync {
        move |value| self.test(value)
    }
}

impl<T: Clone + 'static> Predicate<T> {
    /// Accepts a value when both predicates accept it.
    ///
    /// `other` is not evaluated when `self` rejects the value.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value: T| self.test(value.clone()) && other.test(value))
    }

    /// Accepts a value when either predicate accepts it.
    ///
    /// `other` is not evaluated when `self` accepts the value.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |value: T| self.test(value.clone()) || other.test(value))
    }

    /// Conjunction of any number of predicates. An empty collection gives
    /// [`always`](Self::always).
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::predicate::Predicate;
    /// use pointfree::numeric::{is_even, is_small};
    ///
    /// let positive = Predicate::new(|n: i64| n > 0);
    /// let all = Predicate::all([positive, Predicate::new(is_small), Predicate::new(is_even)]);
    /// assert!(all.test(42));
    /// assert!(!all.test(-42));
    /// assert!(Predicate::<i64>::all([]).test(0));
    /// ```
    pub fn all<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        predicates.into_iter().fold(Self::always(), Self::and)
    }

    /// Disjunction of any number of predicates. An empty collection gives
    /// [`never`](Self::never).
    pub fn any<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        predicates.into_iter().fold(Self::never(), Self::or)
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> BitAnd for Predicate<T> {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        self.and(other)
    }
}

impl<T: Clone + 'static> BitOr for Predicate<T> {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        self.or(other)
    }
}

impl<T: 'static> Not for Predicate<T> {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_test() {
        let positive = Predicate::new(|n: i32| n > 0);
        let copy = positive.clone();
        assert_eq!(positive.test(5), copy.test(5));
        assert_eq!(positive.test(-5), copy.test(-5));
    }

    #[test]
    fn combining_leaves_operands_usable() {
        let positive = Predicate::new(|n: i32| n > 0);
        let even = Predicate::new(|n: i32| n % 2 == 0);

        let both = positive.clone() & even.clone();
        assert!(both.test(4));
        assert!(positive.test(3));
        assert!(!even.test(3));
    }

    #[test]
    fn contramap_projects_lengths_without_truncation() {
        let even_length = Predicate::new(|n: i64| n % 2 == 0)
            .contramap(|length: usize| i64::try_from(length).unwrap_or(i64::MAX));
        assert!(even_length.test(4));
        assert!(!even_length.test(3));
        assert!(!even_length.test(usize::MAX));
    }

    #[test]
    fn any_of_nothing_rejects() {
        assert!(!Predicate::<u8>::any([]).test(0));
    }

    #[test]
    fn debug_hides_the_closure() {
        assert_eq!(format!("{:?}", Predicate::<u8>::always()), "Predicate { .. }");
    }

    #[test]
    fn usable_from_other_threads() {
        let even = Predicate::new(|n: u64| n % 2 == 0);
        let handles: Vec<_> = (0..4u64)
            .map(|offset| {
                let even = even.clone();
                std::thread::spawn(move || (0..100).filter(|n| even.test(n + offset)).count())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().ok(), Some(50));
        }
    }
}
