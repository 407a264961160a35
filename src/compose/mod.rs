//! Function composition, currying and partial application.
//!
//! This module is the composition engine of the crate: everything else is
//! built by gluing function values together with the tools defined here,
//! without naming intermediate arguments.
//!
//! # Overview
//!
//! - [`compose`] / [`compose!`](crate::compose!): right-to-left composition
//! - [`pipe!`]: left-to-right application of a value through stages
//! - [`try_compose`]: composition of stages returning `Result`
//! - [`curry!`]: converts an n-ary function into a chain of unary functions
//! - [`partial!`]: fixes any subset of a function's arguments
//!
//! # Helper Functions
//!
//! - [`identity`]: the unit of composition
//! - [`constant`]: a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Composition (right-to-left)
//!
//! ```
//! use pointfree::compose;
//!
//! fn increment(value: i64) -> i64 { value + 1 }
//! fn double(value: i64) -> i64 { value * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! assert_eq!(compose!(increment, double)(5), 11);
//! ```
//!
//! ## Currying
//!
//! ```
//! use pointfree::curry;
//! use pointfree::numeric::is_triple;
//!
//! let curried = curry!(is_triple, 3);
//! let with_legs = curried(3)(4);
//! assert!(with_legs(5));
//! assert!(!with_legs(6));
//! assert_eq!(curried(5)(12)(13), is_triple(5, 12, 13));
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use pointfree::partial;
//! use pointfree::numeric::is_square_of;
//!
//! let has_square_root_three = partial!(is_square_of, __, 3);
//! assert!(has_square_root_three(9));
//! assert!(!has_square_root_three(8));
//! ```
//!
//! # Arity Errors
//!
//! Arity is fixed when a curried or partially applied function is built, so
//! supplying too many arguments does not compile:
//!
//! ```compile_fail
//! use pointfree::curry;
//!
//! let add = curry!(|a: i64, b: i64| a + b);
//! let _ = add(1)(2)(3);
//! ```
//!
//! ```compile_fail
//! use pointfree::curry;
//!
//! // a single-argument function has nothing to curry
//! let _ = curry!(|a: i64| a + 1);
//! ```
//!
//! ```compile_fail
//! use pointfree::curry;
//!
//! fn add(a: i64, b: i64) -> i64 { a + b }
//!
//! let _ = curry!(add, "two");
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Currying**: `curry!(f, n)(a1)...(an) == f(a1, ..., an)`
//! - **Pipe**: `pipe!(x, f, g) == compose!(g, f)(x)`
//! - **Flip**: `flip(flip(f)) == f`

mod compose_macro;
mod functions;
mod partial_macro;
mod pipe_macro;

pub use functions::{compose, constant, flip, identity, try_compose};

// Re-export macros (they are already at crate root via #[macro_export]).
// `compose!` is left out: `crate::compose` also names this module, and
// importing it here would alias the module into itself.
pub use crate::partial;
pub use crate::pipe;
pub use pointfree_derive::curry;
