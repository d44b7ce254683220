//! Searching, comparison, hashing, filtering and stringification over
//! primitive slices
//!
//! Equality everywhere in this module is [`Primitive::bit_eq`], and ordering
//! is [`Primitive::prim_cmp`]. As a result, `index_of(f64::NAN)` finds a NaN,
//! and `-0.0` is a different value from `0.0`.

use std::cmp::Ordering;

use hashbrown::HashSet;

use super::Primitive;
use crate::bits;
use crate::error::{Error, Result};
use crate::stringify::{self, DisplayStringifier, Stringifier, ToStringStyle};

/// Extension methods available on every `[T]` where `T` is a [`Primitive`].
///
/// ```rust
/// use sugars_prims::PrimSliceExt;
///
/// let values = [1.5f64, f64::NAN, -0.0, 1.5];
/// assert_eq!(values.index_of(f64::NAN), Some(1));
/// assert_eq!(values.last_index_of(1.5), Some(3));
/// assert_eq!(values.index_of(0.0), None);
/// assert_eq!(values.distinct().len(), 3);
/// ```
pub trait PrimSliceExt<T: Primitive> {
    /// Position of the first element equal to `value`.
    fn index_of(&self, value: T) -> Option<usize>;

    /// Position of the last element equal to `value`.
    fn last_index_of(&self, value: T) -> Option<usize>;

    /// Position of the first element equal to `value` at or after `start`.
    fn index_of_from(&self, value: T, start: usize) -> Option<usize>;

    /// Whether any element equals `value`.
    fn contains_value(&self, value: T) -> bool;

    /// Whether every element of `values` occurs in `self`.
    fn contains_all(&self, values: &[T]) -> bool;

    /// Whether at least one element of `values` occurs in `self`.
    fn contains_any(&self, values: &[T]) -> bool;

    /// Start of the first occurrence of `target` as a contiguous run.
    /// An empty target matches at 0.
    fn find_subslice(&self, target: &[T]) -> Option<usize>;

    /// Binary search under the total order; the slice must be sorted by it.
    fn binary_search_total(&self, value: T) -> std::result::Result<usize, usize>;

    /// Element-wise equality by canonical bits.
    fn prim_eq(&self, other: &[T]) -> bool;

    /// Lexicographic comparison; a proper prefix orders first.
    fn compare_to(&self, other: &[T]) -> Ordering;

    /// Whether the slice is non-decreasing under the total order.
    fn is_sorted_total(&self) -> bool;

    /// Hash code composed from the default seed.
    fn hash_code(&self) -> i32;

    /// Hash code composed from `seed`.
    fn hash_code_with(&self, seed: i32) -> i32;

    /// Elements with duplicates dropped, keeping first occurrences in order.
    fn distinct(&self) -> Vec<T>;

    /// Elements that do not occur in `values`.
    fn remove_all(&self, values: &[T]) -> Vec<T>;

    /// Elements that satisfy `pred`.
    fn filtered<P: FnMut(T) -> bool>(&self, pred: P) -> Vec<T>;

    /// Number of elements equal to `value`.
    fn count_of(&self, value: T) -> usize;

    /// Copy in reverse order.
    fn reversed(&self) -> Vec<T>;

    /// Strict sub-slice `from..to`.
    fn sub_slice(&self, from: usize, to: usize) -> Result<&[T]>;

    /// Lenient sub-slice: bounds clamp to the slice, an inverted range is empty.
    fn clamped(&self, from: usize, to: usize) -> &[T];

    /// Copy with `value` inserted before position `index` (`index <= len`).
    fn with_inserted(&self, index: usize, value: T) -> Result<Vec<T>>;

    /// Copy with the element at `index` removed.
    fn with_removed(&self, index: usize) -> Result<Vec<T>>;

    /// Copy extended with `pad` up to `min_len` elements.
    fn padded_to(&self, min_len: usize, pad: T) -> Vec<T>;

    /// Every element wrapped in `Some`.
    fn to_options(&self) -> Vec<Option<T>>;

    /// Display forms joined by `separator`.
    fn joined(&self, separator: &str) -> String;

    /// Display forms laid out by `style`.
    fn to_string_styled(&self, style: &ToStringStyle) -> String;

    /// Forms produced by `stringifier`, laid out by `style`.
    fn to_string_with(&self, style: &ToStringStyle, stringifier: &dyn Stringifier<T>) -> String;
}

impl<T: Primitive> PrimSliceExt<T> for [T] {
    fn index_of(&self, value: T) -> Option<usize> {
        self.iter().position(|v| v.bit_eq(value))
    }

    fn last_index_of(&self, value: T) -> Option<usize> {
        self.iter().rposition(|v| v.bit_eq(value))
    }

    fn index_of_from(&self, value: T, start: usize) -> Option<usize> {
        self.get(start..)?
            .iter()
            .position(|v| v.bit_eq(value))
            .map(|i| i + start)
    }

    fn contains_value(&self, value: T) -> bool {
        self.index_of(value).is_some()
    }

    fn contains_all(&self, values: &[T]) -> bool {
        let present: HashSet<u64> = self.iter().map(|v| v.key()).collect();
        values.iter().all(|v| present.contains(&v.key()))
    }

    fn contains_any(&self, values: &[T]) -> bool {
        let wanted: HashSet<u64> = values.iter().map(|v| v.key()).collect();
        self.iter().any(|v| wanted.contains(&v.key()))
    }

    fn find_subslice(&self, target: &[T]) -> Option<usize> {
        if target.is_empty() {
            return Some(0);
        }
        self.windows(target.len()).position(|w| w.prim_eq(target))
    }

    fn binary_search_total(&self, value: T) -> std::result::Result<usize, usize> {
        self.binary_search_by(|probe| probe.prim_cmp(&value))
    }

    fn prim_eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.bit_eq(*b))
    }

    fn compare_to(&self, other: &[T]) -> Ordering {
        self.iter()
            .zip(other)
            .map(|(a, b)| a.prim_cmp(b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or_else(|| self.len().cmp(&other.len()))
    }

    fn is_sorted_total(&self) -> bool {
        self.windows(2)
            .all(|w| w[0].prim_cmp(&w[1]) != Ordering::Greater)
    }

    fn hash_code(&self) -> i32 {
        bits::hash_code(self)
    }

    fn hash_code_with(&self, seed: i32) -> i32 {
        bits::hash_code_with(seed, self)
    }

    fn distinct(&self) -> Vec<T> {
        let mut seen: HashSet<u64> = HashSet::with_capacity(self.len());
        self.iter().copied().filter(|v| seen.insert(v.key())).collect()
    }

    fn remove_all(&self, values: &[T]) -> Vec<T> {
        let unwanted: HashSet<u64> = values.iter().map(|v| v.key()).collect();
        self.iter()
            .copied()
            .filter(|v| !unwanted.contains(&v.key()))
            .collect()
    }

    fn filtered<P: FnMut(T) -> bool>(&self, mut pred: P) -> Vec<T> {
        self.iter().copied().filter(|v| pred(*v)).collect()
    }

    fn count_of(&self, value: T) -> usize {
        self.iter().filter(|v| v.bit_eq(value)).count()
    }

    fn reversed(&self) -> Vec<T> {
        self.iter().rev().copied().collect()
    }

    fn sub_slice(&self, from: usize, to: usize) -> Result<&[T]> {
        Error::check_range(from, to, self.len())?;
        Ok(&self[from..to])
    }

    fn clamped(&self, from: usize, to: usize) -> &[T] {
        let from = from.min(self.len());
        let to = to.min(self.len());
        if from >= to {
            &[]
        } else {
            &self[from..to]
        }
    }

    fn with_inserted(&self, index: usize, value: T) -> Result<Vec<T>> {
        if index > self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        let mut out = Vec::with_capacity(self.len() + 1);
        out.extend_from_slice(&self[..index]);
        out.push(value);
        out.extend_from_slice(&self[index..]);
        Ok(out)
    }

    fn with_removed(&self, index: usize) -> Result<Vec<T>> {
        Error::check_index(index, self.len())?;
        let mut out = self.to_vec();
        out.remove(index);
        Ok(out)
    }

    fn padded_to(&self, min_len: usize, pad: T) -> Vec<T> {
        let mut out = self.to_vec();
        if out.len() < min_len {
            out.resize(min_len, pad);
        }
        out
    }

    fn to_options(&self) -> Vec<Option<T>> {
        self.iter().copied().map(Some).collect()
    }

    fn joined(&self, separator: &str) -> String {
        self.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn to_string_styled(&self, style: &ToStringStyle) -> String {
        stringify::to_string_with(self, style, &DisplayStringifier)
    }

    fn to_string_with(&self, style: &ToStringStyle, stringifier: &dyn Stringifier<T>) -> String {
        stringify::to_string_with(self, style, stringifier)
    }
}

/// Unwraps optional values, substituting `default` for `None`.
pub fn from_options<T: Primitive>(values: &[Option<T>], default: T) -> Vec<T> {
    values.iter().map(|v| v.unwrap_or(default)).collect()
}

/// Unwraps optional values, failing at the first `None`.
pub fn from_options_strict<T: Primitive>(values: &[Option<T>]) -> Result<Vec<T>> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| v.ok_or(Error::MissingValue { index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search() {
        let v = [3i32, 1, 4, 1, 5, 9, 2, 6];
        assert_eq!(v.index_of(1), Some(1));
        assert_eq!(v.last_index_of(1), Some(3));
        assert_eq!(v.index_of_from(1, 2), Some(3));
        assert_eq!(v.index_of_from(1, 4), None);
        assert_eq!(v.index_of_from(3, 100), None);
        assert!(v.contains_value(9));
        assert!(!v.contains_value(7));
        assert!(v.contains_all(&[9, 3, 1]));
        assert!(!v.contains_all(&[9, 7]));
        assert!(v.contains_all(&[]));
        assert!(v.contains_any(&[7, 8, 6]));
        assert!(!v.contains_any(&[]));
    }

    #[test]
    fn test_find_subslice() {
        let v = [1u8, 2, 3, 1, 2, 4];
        assert_eq!(v.find_subslice(&[1, 2, 4]), Some(3));
        assert_eq!(v.find_subslice(&[]), Some(0));
        assert_eq!(v.find_subslice(&[2, 2]), None);
        assert_eq!([1u8].find_subslice(&[1, 1]), None);
    }

    #[test]
    fn test_float_equality_rules() {
        let v = [0.0f32, f32::NAN, 2.0];
        assert_eq!(v.index_of(-0.0), None);
        assert_eq!(v.index_of(f32::NAN), Some(1));
        assert!([f64::NAN].prim_eq(&[f64::NAN]));
        assert!(![0.0f64].prim_eq(&[-0.0]));
        assert_eq!(v.count_of(f32::NAN), 1);
    }

    #[test]
    fn test_compare_to() {
        assert_eq!([1i64, 2].compare_to(&[1, 2]), Ordering::Equal);
        assert_eq!([1i64, 2].compare_to(&[1, 2, 0]), Ordering::Less);
        assert_eq!([1i64, 3].compare_to(&[1, 2, 9]), Ordering::Greater);
        assert_eq!([f64::NAN].compare_to(&[f64::INFINITY]), Ordering::Greater);
        assert_eq!(<[bool]>::compare_to(&[], &[]), Ordering::Equal);
    }

    #[test]
    fn test_sorted_and_binary_search() {
        let v = [-1.0f64, -0.0, 0.0, 2.5, f64::NAN];
        assert!(v.is_sorted_total());
        assert!(![0.0f64, -0.0].is_sorted_total());
        assert_eq!(v.binary_search_total(0.0), Ok(2));
        assert_eq!(v.binary_search_total(1.0), Err(3));
        assert_eq!(v.binary_search_total(f64::NAN), Ok(4));
    }

    #[test]
    fn test_hash_code_delegates_to_bits() {
        let v = [1i16, 2, 3];
        assert_eq!(v.hash_code(), bits::hash_code(&v));
        assert_eq!(v.hash_code_with(42), bits::hash_code_with(42, &v));
        assert_eq!(v.to_vec().hash_code(), v.hash_code());
    }

    #[test]
    fn test_filtering() {
        let v = [5u16, 3, 5, 1, 3, 8];
        assert_eq!(v.distinct(), vec![5, 3, 1, 8]);
        assert_eq!(v.remove_all(&[3, 8]), vec![5, 5, 1]);
        assert_eq!(v.filtered(|x| x > 3), vec![5, 5, 8]);
        assert_eq!(v.count_of(5), 2);
        assert_eq!([f64::NAN, f64::NAN, 1.0].distinct().len(), 2);
    }

    #[test]
    fn test_transformations() {
        let v = ['a', 'b', 'c', 'd'];
        assert_eq!(v.reversed(), vec!['d', 'c', 'b', 'a']);
        assert_eq!(v.sub_slice(1, 3), Ok(&['b', 'c'][..]));
        assert!(v.sub_slice(3, 1).is_err());
        assert!(v.sub_slice(0, 5).is_err());
        assert_eq!(v.clamped(2, 99), &['c', 'd']);
        assert_eq!(v.clamped(3, 1), &[] as &[char]);
        assert_eq!(v.clamped(10, 20), &[] as &[char]);
        assert_eq!(v.with_inserted(4, 'e'), Ok(vec!['a', 'b', 'c', 'd', 'e']));
        assert_eq!(v.with_inserted(0, 'z'), Ok(vec!['z', 'a', 'b', 'c', 'd']));
        assert_eq!(
            v.with_inserted(5, 'e'),
            Err(Error::IndexOutOfBounds { index: 5, len: 4 })
        );
        assert_eq!(v.with_removed(1), Ok(vec!['a', 'c', 'd']));
        assert!(v.with_removed(4).is_err());
        assert_eq!(v.padded_to(6, '-'), vec!['a', 'b', 'c', 'd', '-', '-']);
        assert_eq!(v.padded_to(2, '-'), v.to_vec());
    }

    #[test]
    fn test_option_conversions() {
        let v = [1i8, -2];
        assert_eq!(v.to_options(), vec![Some(1), Some(-2)]);
        assert_eq!(from_options(&[Some(1i8), None, Some(3)], 0), vec![1, 0, 3]);
        assert_eq!(from_options_strict(&[Some(true), Some(false)]), Ok(vec![true, false]));
        assert_eq!(
            from_options_strict::<u32>(&[Some(1), None, None]),
            Err(Error::MissingValue { index: 1 })
        );
    }

    #[test]
    fn test_stringification() {
        let v = [1i32, -2, 3];
        assert_eq!(v.joined(", "), "1, -2, 3");
        assert_eq!(v.to_string_styled(&ToStringStyle::default()), "[1, -2, 3]");
        assert_eq!(v.to_string_styled(&ToStringStyle::plain()), "1,-2,3");
        let squared = |x: &i32| (x * x).to_string();
        assert_eq!(v.to_string_with(&ToStringStyle::default(), &squared), "[1, 4, 9]");
        assert_eq!(Vec::<f64>::new().to_string_styled(&ToStringStyle::default()), "[]");
    }
}
