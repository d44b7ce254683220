//! Map construction and transformation helpers.

use std::fmt;
use std::hash::Hash;

use hashbrown::{Equivalent, HashMap};

use crate::error::{Error, Result};
use crate::sort;

/// Builds a map from pairs; a later pair replaces an earlier one.
pub fn from_pairs<K, V, I>(pairs: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().collect()
}

/// Pairs `keys` with `values` position by position.
///
/// ```rust
/// use sugars_prims::collections::maps::zip_to_map;
///
/// let map = zip_to_map(["a", "b"], [1, 2])?;
/// assert_eq!(map["b"], 2);
/// assert!(zip_to_map(["a"], [1, 2]).is_err());
/// # Ok::<(), sugars_prims::Error>(())
/// ```
pub fn zip_to_map<K, V, KI, VI>(keys: KI, values: VI) -> Result<HashMap<K, V>>
where
    K: Eq + Hash,
    KI: IntoIterator<Item = K>,
    KI::IntoIter: ExactSizeIterator,
    VI: IntoIterator<Item = V>,
    VI::IntoIter: ExactSizeIterator,
{
    let (keys, values) = (keys.into_iter(), values.into_iter());
    if keys.len() != values.len() {
        return Err(Error::LengthMismatch {
            left: keys.len(),
            right: values.len(),
        });
    }
    Ok(keys.zip(values).collect())
}

/// Swaps keys and values; fails if two keys share a value.
pub fn invert<K, V>(map: HashMap<K, V>) -> Result<HashMap<V, K>>
where
    V: Eq + Hash + fmt::Debug,
{
    let mut inverted = HashMap::with_capacity(map.len());
    for (key, value) in map {
        if inverted.contains_key(&value) {
            return Err(Error::DuplicateKey(format!("{value:?}")));
        }
        inverted.insert(value, key);
    }
    Ok(inverted)
}

/// Union of two maps; `resolve` combines the values of shared keys.
pub fn merge_with<K, V, F>(a: HashMap<K, V>, b: HashMap<K, V>, mut resolve: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(&K, V, V) -> V,
{
    let mut merged = a;
    for (key, right) in b {
        let value = match merged.remove(&key) {
            Some(left) => resolve(&key, left, right),
            None => right,
        };
        merged.insert(key, value);
    }
    merged
}

/// Applies `f` to every value.
pub fn map_values<K, V, W, F>(map: &HashMap<K, V>, mut f: F) -> HashMap<K, W>
where
    K: Eq + Hash + Clone,
    F: FnMut(&V) -> W,
{
    map.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}

/// Entries for which `pred` holds.
pub fn filter_entries<K, V, P>(map: &HashMap<K, V>, mut pred: P) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    P: FnMut(&K, &V) -> bool,
{
    map.iter()
        .filter(|(k, v)| pred(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Entries ordered by key.
pub fn sorted_entries<K, V>(map: &HashMap<K, V>) -> Vec<(K, V)>
where
    K: Ord + Clone,
    V: Clone,
{
    let mut entries: Vec<(K, V)> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    sort::stable_sort_by(&mut entries, |a, b| a.0.cmp(&b.0));
    entries
}

/// Value under `key`, or `default` when absent.
pub fn get_or<K, V, Q>(map: &HashMap<K, V>, key: &Q, default: V) -> V
where
    K: Eq + Hash,
    V: Clone,
    Q: Hash + Equivalent<K> + ?Sized,
{
    map.get(key).cloned().unwrap_or(default)
}
