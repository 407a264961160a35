//! Unit tests for the predicate algebra: the `and` / `or` / `negate`
//! closures and the `Predicate` value type.

#![cfg(feature = "numeric")]

use pointfree::compose;
use pointfree::numeric::{is_even, is_odd, is_small, is_square_of};
use pointfree::partial;
use pointfree::predicate::{Predicate, and, negate, or};
use rstest::rstest;

// =============================================================================
// closure combinators
// =============================================================================

#[rstest]
#[case(12, true)]
#[case(13, false)]
#[case(101, false)]
#[case(102, false)]
#[case(-100, true)]
fn and_requires_both(#[case] value: i64, #[case] expected: bool) {
    assert_eq!(and(is_small, is_even)(value), expected);
}

#[rstest]
#[case(13, true)]
#[case(102, true)]
#[case(101, false)]
fn or_requires_either(#[case] value: i64, #[case] expected: bool) {
    assert_eq!(or(is_small, is_even)(value), expected);
}

#[rstest]
fn negate_of_even_is_odd() {
    let odd = negate(is_even);
    for value in -50..50 {
        assert_eq!(odd(value), is_odd(value));
    }
}

#[rstest]
fn combinators_nest_point_free() {
    let big_or_odd = or(negate(is_small), negate(is_even));
    assert!(big_or_odd(1000));
    assert!(big_or_odd(7));
    assert!(!big_or_odd(8));
}

#[rstest]
fn combinators_accept_partially_applied_predicates() {
    let is_nine = partial!(is_square_of, 9, __);
    let is_sixteen = partial!(is_square_of, 16, __);
    let either = or(is_nine, is_sixteen);
    assert!(either(3));
    assert!(either(-4));
    assert!(!either(5));
}

#[rstest]
fn combinators_accept_composed_predicates() {
    let double = |value: i64| value * 2;
    let double_is_small = compose!(is_small, double);
    let predicate = and(double_is_small, is_odd);
    assert!(predicate(49));
    assert!(!predicate(51));
    assert!(!predicate(48));
}

// =============================================================================
// Predicate value
// =============================================================================

#[rstest]
#[case(12, true)]
#[case(101, false)]
fn predicate_operators(#[case] value: i64, #[case] expected: bool) {
    let small = Predicate::new(is_small);
    let even = Predicate::new(is_even);
    assert_eq!((small.clone() & even.clone()).test(value), expected);
    assert_eq!(small.and(even).test(value), expected);
}

#[rstest]
fn predicate_or_and_not() {
    let small = Predicate::new(is_small);
    let even = Predicate::new(is_even);
    let big_or_even = !small | even;
    assert!(big_or_even.test(500));
    assert!(big_or_even.test(4));
    assert!(!big_or_even.test(3));
}

#[rstest]
fn predicate_units() {
    let even = Predicate::new(is_even);
    for value in -5..5 {
        assert_eq!((even.clone() & Predicate::always()).test(value), even.test(value));
        assert_eq!((even.clone() | Predicate::never()).test(value), even.test(value));
        assert!(!(even.clone() & Predicate::never()).test(value));
        assert!((even.clone() | Predicate::always()).test(value));
    }
}

#[rstest]
fn predicate_folds() {
    let bounds = [
        Predicate::new(|n: i64| n > 0),
        Predicate::new(|n: i64| n < 10),
    ];
    let inside = Predicate::all(bounds.clone());
    let outside = !Predicate::all(bounds);
    assert!(inside.test(5));
    assert!(!inside.test(10));
    assert!(outside.test(0));

    let special = Predicate::any([
        Predicate::new(|n: i64| n == 7),
        Predicate::new(|n: i64| n == 13),
    ]);
    assert!(special.test(13));
    assert!(!special.test(8));
}

#[rstest]
fn predicate_contramap_projects_input() {
    let even = Predicate::new(is_even);
    let even_length = even.contramap(|word: String| i64::try_from(word.len()).unwrap_or(i64::MAX));
    assert!(even_length.test(String::from("even")));
    assert!(!even_length.test(String::from("odd")));
}

#[rstest]
fn predicate_into_fn_filters_iterators() {
    let small_even = (Predicate::new(is_small) & Predicate::new(is_even)).into_fn();
    let kept: Vec<i64> = [-102, -100, 3, 12, 101, 200]
        .into_iter()
        .filter(|&value| small_even(value))
        .collect();
    assert_eq!(kept, vec![-100, 12]);
}

#[rstest]
fn predicate_and_closure_combinators_agree() {
    let closure_version = negate(and(is_small, negate(is_even)));
    let value_version = !(Predicate::new(is_small) & !Predicate::new(is_even));
    for value in -150..150 {
        assert_eq!(closure_version(value), value_version.test(value));
    }
}
