//! Procedural macros for pointfree.
//!
//! This crate provides the [`curry!`] function-like macro. It is re-exported
//! as `pointfree::curry!` when the `compose` feature of the main crate is
//! enabled, which is the intended way to use it.
//!
//! # Example
//!
//! ```rust,ignore
//! use pointfree::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! let add_five = add(5);
//! assert_eq!(add_five(10), 15);
//! assert_eq!(add_five(20), 25);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a function of two or more arguments into curried form.
///
/// `curry!(f)(a)(b)(c)` evaluates to `f(a, b, c)`. Every intermediate
/// closure can be called any number of times, so partial applications are
/// reusable values.
///
/// # Call Forms
///
/// - `curry!(|a, b, ...| body)`: the arity is the closure's parameter count.
/// - `curry!(path, n)`: curries the function at `path`, which takes `n`
///   arguments.
///
/// # Requirements
///
/// - The callee must implement `Fn`.
/// - Every argument except the last must implement `Clone`, because an
///   intermediate closure hands out a copy of what it captured each time it
///   is called.
///
/// # Errors
///
/// Arity problems are reported at compile time: fewer than two parameters,
/// a function path without an arity, or an arity that is not an integer
/// literal.
///
/// # Examples
///
/// ```rust,ignore
/// use pointfree::curry;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// let slab = curried(10)(10);
/// assert_eq!(slab(1), 100);
/// assert_eq!(slab(3), 300);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::expand(input.into()).into()
}
