//! Bit manipulation and hash-code composition
//!
//! Slice hash codes are built by rotating the running hash and xoring in the
//! next element's hash. Because each step only depends on the running value,
//! hashing `a` then continuing with `b` equals hashing `a ++ b` in one go.

use crate::error::{Error, Result};
use crate::prims::{Integer, Primitive};

/// Left rotation applied to the running hash before each element is folded in.
pub const HASH_ROTATION: u32 = 5;

/// Seed used by the plain `hash_code` helpers.
pub const DEFAULT_SEED: i32 = 1;

/// Folds one element hash into a running hash.
#[inline]
pub fn combine(seed: i32, hash: i32) -> i32 {
    seed.rotate_left(HASH_ROTATION) ^ hash
}

/// Hash code of `values`, continuing from `seed`.
///
/// An empty slice returns `seed` unchanged.
///
/// ```rust
/// use sugars_prims::bits::hash_code_with;
///
/// let whole = hash_code_with(7, &[1i64, 2, 3, 4]);
/// let split = hash_code_with(hash_code_with(7, &[1i64, 2]), &[3, 4]);
/// assert_eq!(whole, split);
/// ```
#[inline]
pub fn hash_code_with<T: Primitive>(seed: i32, values: &[T]) -> i32 {
    values
        .iter()
        .fold(seed, |acc, value| combine(acc, value.hash_code()))
}

/// Hash code of `values` from [`DEFAULT_SEED`].
#[inline]
pub fn hash_code<T: Primitive>(values: &[T]) -> i32 {
    hash_code_with(DEFAULT_SEED, values)
}

/// Hash code of an optional slice; `None` hashes to zero.
#[inline]
pub fn hash_code_opt<T: Primitive>(values: Option<&[T]>) -> i32 {
    values.map_or(0, hash_code)
}

/// Composes the hash codes of several slices, in order.
pub fn hash_code_nested<T: Primitive, S: AsRef<[T]>>(seed: i32, slices: &[S]) -> i32 {
    slices
        .iter()
        .fold(seed, |acc, slice| combine(acc, hash_code(slice.as_ref())))
}

fn check_bit<T: Integer>(index: u32) -> Result<()> {
    if index < T::WIDTH {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds {
            index: index as usize,
            len: T::WIDTH as usize,
        })
    }
}

/// Reads bit `index` (0 is least significant).
pub fn bit<T: Integer>(value: T, index: u32) -> Result<bool> {
    check_bit::<T>(index)?;
    Ok(value.to_bits_u64() >> index & 1 == 1)
}

/// Returns `value` with bit `index` set or cleared.
pub fn with_bit<T: Integer>(value: T, index: u32, on: bool) -> Result<T> {
    check_bit::<T>(index)?;
    let bits = value.to_bits_u64();
    let mask = 1u64 << index;
    Ok(T::from_bits_u64(if on { bits | mask } else { bits & !mask }))
}

/// Number of set bits in the two's complement pattern.
#[inline]
pub fn count_ones<T: Integer>(value: T) -> u32 {
    value.to_bits_u64().count_ones()
}

/// Reverses the bit order within the type's width.
pub fn reverse_bits<T: Integer>(value: T) -> T {
    let shifted = value.to_bits_u64().reverse_bits() >> (64 - T::WIDTH);
    T::from_bits_u64(shifted)
}

/// Binary digits of the two's complement pattern, zero-padded to full width.
pub fn to_bit_string<T: Integer>(value: T) -> String {
    let bits = value.to_bits_u64();
    (0..T::WIDTH)
        .rev()
        .map(|i| if bits >> i & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Packs booleans into bytes, least significant bit first.
pub fn pack_bools(values: &[bool]) -> Vec<u8> {
    values
        .chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &on)| if on { byte | 1 << i } else { byte })
        })
        .collect()
}

/// Unpacks the first `len` booleans written by [`pack_bools`].
pub fn unpack_bools(bytes: &[u8], len: usize) -> Result<Vec<bool>> {
    if len > bytes.len() * 8 {
        return Err(Error::IndexOutOfBounds {
            index: len,
            len: bytes.len() * 8,
        });
    }
    Ok((0..len).map(|i| bytes[i / 8] >> (i % 8) & 1 == 1).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_combine_rotates_then_xors() {
        assert_eq!(combine(1, 0), 32);
        assert_eq!(combine(i32::MIN, 0), 16);
        assert_eq!(combine(0, 42), 42);
    }

    #[test]
    fn test_hash_code_empty_is_seed() {
        assert_eq!(hash_code_with::<i32>(99, &[]), 99);
        assert_eq!(hash_code::<f64>(&[]), DEFAULT_SEED);
        assert_eq!(hash_code_opt::<u8>(None), 0);
    }

    #[test]
    fn test_hash_code_single_element() {
        assert_eq!(hash_code(&[7i32]), combine(1, 7));
        assert_eq!(hash_code(&[true]), 32 ^ 1231);
    }

    #[test]
    fn test_hash_code_is_order_sensitive() {
        assert_ne!(hash_code(&[1i32, 2]), hash_code(&[2i32, 1]));
    }

    #[test]
    fn test_hash_code_floats_follow_bit_equality() {
        assert_eq!(hash_code(&[f64::NAN]), hash_code(&[f64::from_bits(0x7ff0_0000_0000_0001)]));
        assert_ne!(hash_code(&[0.0f64]), hash_code(&[-0.0f64]));
    }

    #[test]
    fn test_hash_code_nested() {
        let rows: Vec<Vec<i16>> = vec![vec![1, 2], vec![], vec![3]];
        let expected = combine(
            combine(combine(5, hash_code(&[1i16, 2])), hash_code::<i16>(&[])),
            hash_code(&[3i16]),
        );
        assert_eq!(hash_code_nested::<i16, _>(5, &rows), expected);
    }

    #[test]
    fn test_bit_access() {
        assert_eq!(bit(0b1010u8, 1), Ok(true));
        assert_eq!(bit(0b1010u8, 0), Ok(false));
        assert_eq!(bit(-1i16, 15), Ok(true));
        assert!(bit(1u8, 8).is_err());
        assert_eq!(with_bit(0i8, 7, true), Ok(i8::MIN));
        assert_eq!(with_bit(0xffu8, 0, false), Ok(0xfe));
        assert_eq!(count_ones(-1i32), 32);
        assert_eq!(count_ones(0b1011u64), 3);
    }

    #[test]
    fn test_reverse_bits_and_bit_string() {
        assert_eq!(reverse_bits(1u8), 0x80);
        assert_eq!(reverse_bits(1i32), i32::MIN);
        assert_eq!(to_bit_string(5u8), "00000101");
        assert_eq!(to_bit_string(-1i8), "11111111");
        assert_eq!(to_bit_string(0u16).len(), 16);
    }

    #[test]
    fn test_pack_unpack() {
        let flags = [true, false, true, true, false, false, false, false, true];
        let packed = pack_bools(&flags);
        assert_eq!(packed, vec![0b0000_1101, 0b0000_0001]);
        assert_eq!(unpack_bools(&packed, flags.len()), Ok(flags.to_vec()));
        assert!(unpack_bools(&packed, 17).is_err());
        assert_eq!(pack_bools(&[]), Vec::<u8>::new());
    }
}
