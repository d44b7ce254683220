//! Stable sorting entry points
//!
//! Every function here delegates to [`timsort::sort`], so equal elements keep
//! their relative order whichever entry point is used.

pub mod order;
pub mod timsort;

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::prims::Primitive;

pub use order::{comparing, nulls_first, nulls_last, reverse_order, then_comparing, total_order};

/// Sorts by the natural order of `T`.
///
/// ```rust
/// use sugars_prims::sort::stable_sort;
///
/// let mut v = vec![5, 1, 4, 1, 3];
/// stable_sort(&mut v);
/// assert_eq!(v, vec![1, 1, 3, 4, 5]);
/// ```
#[inline]
pub fn stable_sort<T: Ord + Clone>(v: &mut [T]) {
    timsort::sort(v, |a: &T, b: &T| a.cmp(b));
}

/// Sorts with a caller-supplied comparator.
#[inline]
pub fn stable_sort_by<T, F>(v: &mut [T], cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    timsort::sort(v, cmp);
}

/// Sorts by a key extracted from each element.
#[inline]
pub fn stable_sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    timsort::sort(v, comparing(key));
}

/// Sorts only `v[from..to]`, leaving the rest untouched.
pub fn stable_sort_range_by<T, F>(v: &mut [T], from: usize, to: usize, cmp: F) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    Error::check_range(from, to, v.len())?;
    timsort::sort(&mut v[from..to], cmp);
    Ok(())
}

/// Sorts primitives under their total order: NaN last, `-0.0` before `0.0`.
#[inline]
pub fn sort_primitives<T: Primitive>(v: &mut [T]) {
    timsort::sort(v, total_order());
}

/// Collects and sorts an iterator.
pub fn sorted<T, I>(items: I) -> Vec<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let mut v: Vec<T> = items.into_iter().collect();
    stable_sort(&mut v);
    v
}

/// Collects and sorts an iterator with a comparator.
pub fn sorted_by<T, I, F>(items: I, cmp: F) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut v: Vec<T> = items.into_iter().collect();
    timsort::sort(&mut v, cmp);
    v
}
