//! The `compose!` macro: right-to-left composition of any number of stages.

/// Composes functions right to left.
///
/// `compose!(f, g, h)(x)` evaluates to `f(g(h(x)))`: the rightmost stage runs
/// first. `compose!(f)` is `f` itself. Every stage is evaluated once, when the
/// macro runs, to produce a function value; none of them is called until the
/// composed function is.
///
/// Unlike [`compose`](crate::compose::compose), the macro builds a closure
/// directly, which leaves the input type open until the first call. That makes
/// it usable with generic combinators such as
/// [`twice`](crate::iterate::twice):
///
/// ```
/// use pointfree::compose;
/// use pointfree::iterate::twice;
///
/// let four_times = compose!(twice, twice);
/// let add_four = four_times(|value: i64| value + 1);
/// assert_eq!(add_four(10), 14);
/// ```
///
/// # Examples
///
/// ```
/// use pointfree::compose;
///
/// fn increment(value: i64) -> i64 { value + 1 }
/// fn double(value: i64) -> i64 { value * 2 }
/// fn square(value: i64) -> i64 { value * value }
///
/// // increment(double(square(3))) = increment(double(9)) = 19
/// let pipeline = compose!(increment, double, square);
/// assert_eq!(pipeline(3), 19);
///
/// // grouping does not matter
/// let left = compose!(compose!(increment, double), square);
/// let right = compose!(increment, compose!(double, square));
/// assert_eq!(left(3), right(3));
/// ```
///
/// Stages whose types do not line up are rejected at compile time:
///
/// ```compile_fail
/// use pointfree::compose;
///
/// fn length(text: String) -> usize { text.len() }
/// fn double(value: i64) -> i64 { value * 2 }
///
/// let broken = compose!(length, double);
/// broken(3);
/// ```
#[macro_export]
macro_rules! compose {
    ($stage:expr $(,)?) => {
        $stage
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}
