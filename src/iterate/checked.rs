//! Repetition of fallible stages.

/// Applies a fallible `function` two times, stopping at the first error.
///
/// `try_twice(f)(x)` is `f(x).and_then(f)`.
///
/// # Examples
///
/// ```
/// use pointfree::iterate::try_twice;
///
/// let halve = |value: u32| if value % 2 == 0 { Ok(value / 2) } else { Err(value) };
///
/// assert_eq!(try_twice(halve)(20), Ok(5));
/// assert_eq!(try_twice(halve)(10), Err(5));
/// assert_eq!(try_twice(halve)(7), Err(7));
/// ```
#[inline]
pub fn try_twice<T, E, F>(function: F) -> impl Fn(T) -> Result<T, E>
where
    F: Fn(T) -> Result<T, E>,
{
    move |value| function(value).and_then(&function)
}

/// Applies a fallible `function` up to `times` times, stopping at the first
/// error.
///
/// `try_nest(f, 0)` is `Ok`.
///
/// # Examples
///
/// ```
/// use pointfree::iterate::try_nest;
///
/// let double = |value: u8| value.checked_mul(2).ok_or(value);
///
/// assert_eq!(try_nest(double, 7)(1), Ok(128));
/// assert_eq!(try_nest(double, 8)(1), Err(128));
/// ```
#[inline]
pub fn try_nest<T, E, F>(function: F, times: usize) -> impl Fn(T) -> Result<T, E>
where
    F: Fn(T) -> Result<T, E>,
{
    move |value| (0..times).try_fold(value, |accumulator, _| function(accumulator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn try_nest_stops_calling_after_the_first_error() {
        let calls = Cell::new(0);
        let countdown = |value: u32| {
            calls.set(calls.get() + 1);
            value.checked_sub(1).ok_or("exhausted")
        };

        assert_eq!(try_nest(countdown, 10)(3), Err("exhausted"));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn try_nest_zero_times_is_ok() {
        let never = |_: u32| Err::<u32, ()>(());
        assert_eq!(try_nest(never, 0)(9), Ok(9));
    }

    #[test]
    fn try_twice_matches_try_nest_two() {
        let step = |value: i32| value.checked_mul(7).ok_or(value);
        for input in [0, 1, -3, 40_000, i32::MAX] {
            assert_eq!(try_twice(step)(input), try_nest(step, 2)(input));
        }
    }
}
