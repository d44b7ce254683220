//! Comparator combinators for the stable sort entry points

use std::cmp::Ordering;

use crate::prims::Primitive;

/// Comparator over a key extracted from each element.
pub fn comparing<T, K, F>(mut key: F) -> impl FnMut(&T, &T) -> Ordering
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

/// Reverses a comparator.
pub fn reverse_order<T, F>(mut cmp: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| cmp(b, a)
}

/// Uses `second` to break ties left by `first`.
pub fn then_comparing<T, A, B>(mut first: A, mut second: B) -> impl FnMut(&T, &T) -> Ordering
where
    A: FnMut(&T, &T) -> Ordering,
    B: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| match first(a, b) {
        Ordering::Equal => second(a, b),
        ordering => ordering,
    }
}

/// Total order over a primitive type (`-0.0 < 0.0`, NaN last).
pub fn total_order<T: Primitive>() -> impl Fn(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| a.prim_cmp(b)
}

/// Orders `None` before every `Some`.
pub fn nulls_first<T, F>(mut cmp: F) -> impl FnMut(&Option<T>, &Option<T>) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &Option<T>, b: &Option<T>| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => cmp(x, y),
    }
}

/// Orders `None` after every `Some`.
pub fn nulls_last<T, F>(cmp: F) -> impl FnMut(&Option<T>, &Option<T>) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut inner = nulls_first(cmp);
    move |a: &Option<T>, b: &Option<T>| match (a, b) {
        (Some(_), Some(_)) => inner(a, b),
        _ => inner(a, b).reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::stable_sort_by;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reverse_and_then() {
        let mut words = vec!["pear", "fig", "apple", "kiwi", "date"];
        stable_sort_by(
            &mut words,
            then_comparing(
                reverse_order(comparing(|w: &&str| w.len())),
                |a: &&str, b: &&str| a.cmp(b),
            ),
        );
        assert_eq!(words, vec!["apple", "date", "kiwi", "pear", "fig"]);
    }

    #[test]
    fn test_total_order_on_floats() {
        let mut values = vec![f64::NAN, 1.0, -0.0, 0.0, f64::NEG_INFINITY];
        stable_sort_by(&mut values, total_order());
        assert_eq!(values[0], f64::NEG_INFINITY);
        assert!(values[1].is_sign_negative() && values[1] == 0.0);
        assert!(values[2].is_sign_positive() && values[2] == 0.0);
        assert_eq!(values[3], 1.0);
        assert!(values[4].is_nan());
    }

    #[test]
    fn test_nulls_placement() {
        let mut values = vec![Some(3), None, Some(1), None];
        stable_sort_by(&mut values, nulls_first(|a: &i32, b: &i32| a.cmp(b)));
        assert_eq!(values, vec![None, None, Some(1), Some(3)]);

        stable_sort_by(&mut values, nulls_last(|a: &i32, b: &i32| a.cmp(b)));
        assert_eq!(values, vec![Some(1), Some(3), None, None]);
    }
}
