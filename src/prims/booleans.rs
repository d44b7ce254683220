//! Boolean slice helpers.

use crate::error::{Error, Result};

/// Number of `true` values.
#[inline]
pub fn count_true(values: &[bool]) -> usize {
    values.iter().filter(|&&v| v).count()
}

/// Whether every value is `true`. Vacuously true when empty.
#[inline]
pub fn all_true(values: &[bool]) -> bool {
    values.iter().all(|&v| v)
}

/// Whether at least one value is `true`.
#[inline]
pub fn any_true(values: &[bool]) -> bool {
    values.iter().any(|&v| v)
}

fn zip_with(left: &[bool], right: &[bool], op: impl Fn(bool, bool) -> bool) -> Result<Vec<bool>> {
    if left.len() != right.len() {
        return Err(Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left.iter().zip(right).map(|(&a, &b)| op(a, b)).collect())
}

/// Element-wise AND.
pub fn and(left: &[bool], right: &[bool]) -> Result<Vec<bool>> {
    zip_with(left, right, |a, b| a && b)
}

/// Element-wise OR.
pub fn or(left: &[bool], right: &[bool]) -> Result<Vec<bool>> {
    zip_with(left, right, |a, b| a || b)
}

/// Element-wise XOR.
pub fn xor(left: &[bool], right: &[bool]) -> Result<Vec<bool>> {
    zip_with(left, right, |a, b| a ^ b)
}

/// Every value flipped.
pub fn negated(values: &[bool]) -> Vec<bool> {
    values.iter().map(|&v| !v).collect()
}

/// One byte per value, `1` for `true`.
pub fn to_bytes(values: &[bool]) -> Vec<u8> {
    values.iter().map(|&v| u8::from(v)).collect()
}

/// Any non-zero byte reads as `true`.
pub fn from_bytes(bytes: &[u8]) -> Vec<bool> {
    bytes.iter().map(|&b| b != 0).collect()
}
