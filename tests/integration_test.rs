#![cfg(feature = "numeric")]
//! End-to-end scenarios across the composition, iteration, predicate and
//! numeric modules.

use pointfree::prelude::*;
use rstest::rstest;

// =============================================================================
// Pythagorean triples
// =============================================================================

#[rstest]
#[case(1, 2, 3, false)]
#[case(3, 4, 5, true)]
#[case(8, 15, 17, true)]
#[case(7, 24, 26, false)]
fn pythagorean_triples(#[case] x: i64, #[case] y: i64, #[case] z: i64, #[case] expected: bool) {
    assert_eq!(is_triple(x, y, z), expected);
    assert_eq!(curry!(is_triple, 3)(x)(y)(z), expected);
    assert_eq!(partial!(is_triple, x, __, z)(y), expected);
}

// =============================================================================
// Repeated squaring
// =============================================================================

#[rstest]
fn twice_square_of_two() {
    let unchecked_square = |value: i64| value * value;
    assert_eq!(twice(unchecked_square)(2), 16);
    assert_eq!(compose!(twice, twice)(unchecked_square)(2), 65_536);
}

#[rstest]
fn checked_repeated_squaring() {
    assert_eq!(try_twice(square)(2), Ok(16));
    assert_eq!(compose!(try_twice, try_twice)(square)(2), Ok(65_536));
    assert_eq!(compose!(try_twice, try_twice)(square)(2), Ok(2_i64.pow(16)));
}

#[rstest]
fn squaring_past_i64_is_an_overflow_error() {
    let sixteen_squarings = compose!(try_twice, try_twice, try_twice, try_twice)(square);
    assert_eq!(
        sixteen_squarings(2),
        Err(ArithmeticError::Overflow {
            operation: "square",
            operand: 4_294_967_296,
        })
    );
    assert_eq!(try_nest(square, 16)(2), sixteen_squarings(2));
}

// =============================================================================
// Predicate algebra over the numeric predicates
// =============================================================================

#[rstest]
#[case(12, true)]
#[case(101, false)]
fn small_and_even(#[case] value: i64, #[case] expected: bool) {
    assert_eq!(and(is_small, is_even)(value), expected);
    assert_eq!((Predicate::new(is_small) & Predicate::new(is_even)).test(value), expected);
}

#[rstest]
fn not_small_and_odd() {
    let odd = negate(is_even);
    assert!(!negate(and(is_small, odd))(73));
}

// =============================================================================
// Square roots
// =============================================================================

#[rstest]
#[case(9, 3, true)]
#[case(9, -3, true)]
#[case(8, 3, false)]
fn square_roots(#[case] square: i64, #[case] root: i64, #[case] expected: bool) {
    assert_eq!(is_square_of(square, root), expected);
}

// =============================================================================
// Mixed pipelines
// =============================================================================

#[rstest]
fn square_then_test_smallness() {
    let small_square = compose!(|result: Result<i64, ArithmeticError>| result.is_ok_and(is_small), square);
    assert!(small_square(10));
    assert!(!small_square(11));
    assert!(!small_square(i64::MAX));
}

#[rstest]
fn filter_with_composed_predicates() {
    let has_small_even_square = and(
        negate(is_odd),
        compose!(|result: Result<i64, ArithmeticError>| result.is_ok_and(is_small), square),
    );
    let kept: Vec<i64> = (-20..=20).filter(|&value| has_small_even_square(value)).collect();
    assert_eq!(kept, vec![-10, -8, -6, -4, -2, 0, 2, 4, 6, 8, 10]);
}
