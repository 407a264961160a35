//! The `partial!` macro: positional partial application with placeholders.
//!
//! The macro walks its argument list one slot at a time. A `__` slot becomes
//! a parameter of the resulting closure; any other slot is evaluated once,
//! bound, and cloned into the call each time the closure runs. Each step of
//! the walk is a separate expansion, so the `slot` and `bound` names it
//! introduces are distinct identifiers per position.

/// Fixes some arguments of a function, leaving the rest as parameters.
///
/// Write the arguments in their original order and use `__` (two
/// underscores) for every argument that should stay open. The result is a new
/// closure taking the open arguments in order; the original function is not
/// modified and can still be called directly.
///
/// - `partial!(f, a, __)` is `|y| f(a, y)`
/// - `partial!(f, __, b)` is `|x| f(x, b)`
/// - `partial!(f, a, __, c)` is `|y| f(a, y, c)`
/// - `partial!(f, a, b)` is `|| f(a, b)`
///
/// Any arity is supported.
///
/// **Important**: `__` is matched as a literal token. Do not bind anything
/// called `__` in scope.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`].
/// - Fixed arguments must implement [`Clone`], since the closure may be
///   called many times.
///
/// # Examples
///
/// ```
/// use pointfree::partial;
/// use pointfree::numeric::{is_square_of, is_triple};
///
/// let is_nine = partial!(is_square_of, 9, __);
/// assert!(is_nine(3));
/// assert!(is_nine(-3));
/// assert!(!is_nine(4));
///
/// let completes_three_four = partial!(is_triple, 3, 4, __);
/// assert!(completes_three_four(5));
/// assert!(!completes_three_four(6));
///
/// let hypotenuse_five = partial!(is_triple, __, __, 5);
/// assert!(hypotenuse_five(3, 4));
/// assert!(hypotenuse_five(0, 5));
/// ```
///
/// Supplying the wrong number of slots is a compile-time error:
///
/// ```compile_fail
/// use pointfree::partial;
/// use pointfree::numeric::is_square_of;
///
/// let too_many = partial!(is_square_of, 9, 3, __);
/// too_many(1);
/// ```
#[macro_export]
macro_rules! partial {
    (@slots ($function:expr) [$($bindings:tt)*] [$($parameters:ident)*] [$($arguments:tt)*]) => {{
        let function = $function;
        $($bindings)*
        move |$($parameters),*| function($($arguments)*)
    }};
    (@slots ($function:expr) [$($bindings:tt)*] [$($parameters:ident)*] [$($arguments:tt)*] __ $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @slots ($function)
            [$($bindings)*]
            [$($parameters)* slot]
            [$($arguments)* slot,]
            $($($rest)*)?
        )
    };
    (@slots ($function:expr) [$($bindings:tt)*] [$($parameters:ident)*] [$($arguments:tt)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @slots ($function)
            [$($bindings)* let bound = $value;]
            [$($parameters)*]
            [$($arguments)* ::std::clone::Clone::clone(&bound),]
            $($($rest)*)?
        )
    };
    ($function:expr $(, $($slots:tt)*)?) => {
        $crate::partial!(@slots ($function) [] [] [] $($($slots)*)?)
    };
}
