//! Helpers over slices of any element type.

use crate::error::{Error, Result};

/// Concatenates the parts into one vector.
pub fn concat<T: Clone>(parts: &[&[T]]) -> Vec<T> {
    let mut out = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Length of an optional slice; `None` counts as empty.
#[inline]
pub fn length_of<T>(values: Option<&[T]>) -> usize {
    values.map_or(0, <[T]>::len)
}

/// Whether the slice is absent or has no elements.
#[inline]
pub fn is_null_or_empty<T>(values: Option<&[T]>) -> bool {
    length_of(values) == 0
}

/// Reverses `values[from..to]` in place.
pub fn reverse_range<T>(values: &mut [T], from: usize, to: usize) -> Result<()> {
    Error::check_range(from, to, values.len())?;
    values[from..to].reverse();
    Ok(())
}

/// Cyclically rotates the slice; a positive `offset` moves elements right.
///
/// ```rust
/// use sugars_prims::arrays::shift;
///
/// let mut v = [1, 2, 3, 4, 5];
/// shift(&mut v, 2);
/// assert_eq!(v, [4, 5, 1, 2, 3]);
/// shift(&mut v, -3);
/// assert_eq!(v, [2, 3, 4, 5, 1]);
/// ```
pub fn shift<T>(values: &mut [T], offset: isize) {
    let len = values.len();
    if len < 2 {
        return;
    }
    let steps = offset.unsigned_abs() % len;
    if offset >= 0 {
        values.rotate_right(steps);
    } else {
        values.rotate_left(steps);
    }
}

/// Position of the first element matching `pred`.
pub fn index_where<T, P: FnMut(&T) -> bool>(values: &[T], pred: P) -> Option<usize> {
    values.iter().position(pred)
}

/// Position of the last element matching `pred`.
pub fn last_index_where<T, P: FnMut(&T) -> bool>(values: &[T], pred: P) -> Option<usize> {
    values.iter().rposition(pred)
}

/// Swaps two elements after checking both indices.
pub fn swap_checked<T>(values: &mut [T], i: usize, j: usize) -> Result<()> {
    Error::check_index(i, values.len())?;
    Error::check_index(j, values.len())?;
    values.swap(i, j);
    Ok(())
}
