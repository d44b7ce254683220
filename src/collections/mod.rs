//! Order-preserving collection helpers backed by [`hashbrown`]
//!
//! Set-like operations return `Vec`s in input order, keeping the first
//! occurrence of each value. Hashing only decides membership and never
//! decides order.

pub mod maps;

use std::cmp::Ordering;
use std::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::sort;

/// Items with duplicates removed, first occurrences kept in order.
///
/// ```rust
/// use sugars_prims::collections::distinct;
///
/// assert_eq!(distinct(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn distinct<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Occurrence count of every item.
pub fn frequencies<T, I>(items: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Distinct items of `a` that also occur in `b`, in `a`'s order.
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let other: HashSet<&T> = b.iter().collect();
    distinct(a.iter().filter(|item| other.contains(item)).cloned())
}

/// Distinct items of `a` followed by those of `b` not already present.
pub fn union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    distinct(a.iter().chain(b).cloned())
}

/// Distinct items of `a` that do not occur in `b`.
pub fn difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let other: HashSet<&T> = b.iter().collect();
    distinct(a.iter().filter(|item| !other.contains(item)).cloned())
}

/// Consecutive chunks of `size` items; the last may be shorter.
pub fn chunked<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::InvalidArgument("chunk size must be positive"));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Splits items into those matching `pred` and the rest, both in order.
pub fn partition_by<T, I, P>(items: I, mut pred: P) -> (Vec<T>, Vec<T>)
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().partition(|item| pred(item))
}

/// Groups items by `key`; each group keeps input order.
pub fn group_by<T, K, I, F>(items: I, mut key: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Collects and stably sorts with `cmp`.
pub fn sorted_by<T, I, F>(items: I, cmp: F) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    sort::sorted_by(items, cmp)
}

/// Whether a collection is absent or empty.
///
/// ```rust
/// use sugars_prims::collections::is_null_or_empty;
///
/// assert!(is_null_or_empty::<Vec<u8>>(None));
/// assert!(is_null_or_empty(Some(&Vec::<u8>::new())));
/// assert!(!is_null_or_empty(Some(&vec![1])));
/// ```
pub fn is_null_or_empty<'a, C>(collection: Option<&'a C>) -> bool
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
{
    collection.map_or(true, |c| c.into_iter().len() == 0)
}
