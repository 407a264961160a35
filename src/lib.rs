//! # pointfree
//!
//! Point-free function combinators for Rust: build new functions by gluing
//! existing ones together, without naming intermediate arguments.
//!
//! ## Overview
//!
//! - **Composition**: [`compose!`], [`pipe!`], [`curry!`], [`partial!`] and
//!   the function-level [`compose::compose`], [`compose::try_compose`]
//! - **Iteration**: [`iterate::twice`], [`iterate::nest`] and their
//!   overflow-aware, `Result`-returning counterparts
//! - **Predicate Algebra**: AND / OR / NOT over predicates, as closures
//!   ([`predicate::and`], [`predicate::or`], [`predicate::negate`]) or as the
//!   reified [`predicate::Predicate`] with `&`, `|` and `!`
//! - **Numeric**: integer predicates and checked arithmetic to drive the
//!   above
//!
//! Every combinator is pure: it returns a fresh function value and never
//! touches its inputs. Nothing is evaluated until the resulting function is
//! called.
//!
//! ## Feature Flags
//!
//! - `compose`: composition, currying and partial application
//! - `iterate`: repeated application (implies `compose`)
//! - `predicate`: predicate algebra (implies `compose`)
//! - `numeric`: integer predicates and checked arithmetic (implies
//!   `iterate` and `predicate`)
//! - `full`: enable all features
//!
//! All features are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! // compose!(twice, twice) applies a function four times
//! let sixteenth_power = compose!(try_twice, try_twice)(square);
//! assert_eq!(sixteenth_power(2), Ok(65536));
//!
//! let is_odd = negate(is_even);
//! let small_odd = and(is_small, is_odd);
//! assert!(!negate(small_odd)(73));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the combinators of every enabled feature.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "compose")]
    pub use crate::compose;

    #[cfg(feature = "iterate")]
    pub use crate::iterate::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "numeric")]
    pub use crate::numeric::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "compose")]
pub use pointfree_derive::curry;

#[cfg(feature = "iterate")]
pub mod iterate;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "numeric")]
pub mod numeric;
