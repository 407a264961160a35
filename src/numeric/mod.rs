//! Integer predicates and checked arithmetic over `i64`.
//!
//! These are small, concrete functions to feed into the combinators of
//! [`compose`](crate::compose), [`iterate`](crate::iterate) and
//! [`predicate`](crate::predicate):
//!
//! - [`is_even`], [`is_odd`], [`is_small`]: unary predicates
//! - [`is_square_of`], [`is_triple`]: multi-argument predicates, handy for
//!   currying and partial application
//! - [`square`]: squaring that reports overflow as [`ArithmeticError`]
//!
//! # Examples
//!
//! ```
//! use pointfree::{compose, curry};
//! use pointfree::numeric::{is_even, is_small, is_square_of};
//! use pointfree::predicate::and;
//!
//! let small_even = and(is_small, is_even);
//! assert!(small_even(12));
//! assert!(!small_even(101));
//!
//! let is_square_of_curried = curry!(is_square_of, 2);
//! let nine_has_root = is_square_of_curried(9);
//! assert!(nine_has_root(3) && nine_has_root(-3));
//!
//! let double = |value: i64| value * 2;
//! assert!(compose!(is_even, double)(7));
//! ```

mod arithmetic;
mod error;
mod predicates;

pub use arithmetic::square;
pub use error::ArithmeticError;
pub use predicates::{SMALL_BOUND, is_even, is_odd, is_small, is_square_of, is_triple};
