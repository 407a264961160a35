//! Predicate algebra: AND, OR and NOT lifted from booleans to predicates.
//!
//! A predicate is any function returning `bool`. This module offers the
//! boolean connectives at the level of predicates, so new tests can be
//! assembled point-free from existing ones.
//!
//! Two surfaces are provided:
//!
//! - [`and`], [`or`], [`negate`]: free functions over plain closures and
//!   function items, returning closures. Zero-cost, nothing is boxed.
//! - [`Predicate`]: a reified predicate value (shared, `Send + Sync`) with
//!   the `&`, `|` and `!` operators, the units [`Predicate::always`] and
//!   [`Predicate::never`], and folds over collections of predicates.
//!
//! The boolean connectives on `bool` itself are untouched; the predicate
//! versions have their own names.
//!
//! # Examples
//!
//! ```
//! use pointfree::predicate::{and, negate};
//! use pointfree::numeric::{is_even, is_small};
//!
//! let is_odd = negate(is_even);
//! let small_odd = and(is_small, is_odd);
//!
//! assert!(small_odd(73));
//! assert!(!small_odd(72));
//! assert!(!negate(small_odd)(73));
//! ```

mod combinators;
mod value;

pub use combinators::{and, negate, or};
pub use value::Predicate;
