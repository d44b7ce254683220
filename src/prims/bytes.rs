//! Byte slice conversions.

use crate::codec;
use crate::error::{Error, Result};

/// Reinterprets signed bytes as unsigned.
pub fn to_unsigned(values: &[i8]) -> Vec<u8> {
    values.iter().map(|&v| v as u8).collect()
}

/// Reinterprets unsigned bytes as signed.
pub fn to_signed(values: &[u8]) -> Vec<i8> {
    values.iter().map(|&v| v as i8).collect()
}

/// Big-endian bytes of each `i32`, concatenated.
pub fn from_i32s_be(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

/// Big-endian bytes of each `i64`, concatenated.
pub fn from_i64s_be(values: &[i64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

/// Reads big-endian `i32`s; the length must be a multiple of 4.
pub fn to_i32s_be(bytes: &[u8]) -> Result<Vec<i32>> {
    if bytes.len() % 4 != 0 {
        return Err(Error::InvalidArgument("byte length must be a multiple of 4"));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Reads big-endian `i64`s; the length must be a multiple of 8.
pub fn to_i64s_be(bytes: &[u8]) -> Result<Vec<i64>> {
    if bytes.len() % 8 != 0 {
        return Err(Error::InvalidArgument("byte length must be a multiple of 8"));
    }
    Ok(bytes
        .chunks_exact(8)
        .map(|c| {
            let mut word = [0u8; 8];
            word.copy_from_slice(c);
            i64::from_be_bytes(word)
        })
        .collect())
}

/// Lower-case hex text.
#[inline]
pub fn to_hex(bytes: &[u8]) -> String {
    codec::encode_hex(bytes)
}

/// Bytes from hex text of either case.
#[inline]
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    codec::decode_hex(text)
}
