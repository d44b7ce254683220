//! Binary, octal and hexadecimal text codecs
//!
//! Integers are rendered as their unsigned two's complement bit pattern, so
//! `-1i32` in hex is `ffffffff`, and parsing that text back into an `i32`
//! gives `-1`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::prims::Integer;

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Power-of-two radixes supported by the codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Radix {
    /// Base 2
    Binary,
    /// Base 8
    Octal,
    /// Base 16
    Hex,
}

impl Radix {
    /// Bits encoded by one digit.
    pub fn bits_per_digit(self) -> u32 {
        match self {
            Radix::Binary => 1,
            Radix::Octal => 3,
            Radix::Hex => 4,
        }
    }

    /// Numeric base.
    pub fn base(self) -> u32 {
        1 << self.bits_per_digit()
    }

    /// Conventional literal prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Hex => "0x",
        }
    }

    /// Digits needed to render every bit of a `width`-bit value.
    pub fn full_width(self, width: u32) -> usize {
        width.div_ceil(self.bits_per_digit()) as usize
    }
}

/// Digits of `value` with no padding; zero is `"0"`.
pub fn to_radix_string<T: Integer>(value: T, radix: Radix) -> String {
    let mut bits = value.to_bits_u64();
    if bits == 0 {
        return "0".to_string();
    }
    let shift = radix.bits_per_digit();
    let mask = u64::from(radix.base() - 1);
    let mut digits = Vec::with_capacity(radix.full_width(T::WIDTH));
    while bits != 0 {
        digits.push(DIGITS_LOWER[(bits & mask) as usize]);
        bits >>= shift;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Digits of `value`, zero-padded so every bit of the type is shown.
pub fn to_radix_string_padded<T: Integer>(value: T, radix: Radix) -> String {
    let digits = to_radix_string(value, radix);
    let width = radix.full_width(T::WIDTH);
    format!("{digits:0>width$}")
}

/// Parses digits (optionally prefixed) as the bit pattern of a `T`.
///
/// ```rust
/// use sugars_prims::codec::{parse_radix, Radix};
///
/// assert_eq!(parse_radix::<i32>("ffffffff", Radix::Hex), Ok(-1));
/// assert_eq!(parse_radix::<u8>("0b101", Radix::Binary), Ok(5));
/// assert!(parse_radix::<u8>("100", Radix::Hex).is_err());
/// ```
pub fn parse_radix<T: Integer>(input: &str, radix: Radix) -> Result<T> {
    let prefix = radix.prefix();
    let (offset, digits) = match input.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => (prefix.len(), &input[prefix.len()..]),
        _ => (0, input),
    };
    if digits.is_empty() {
        return Err(Error::InvalidNumber(input.to_string()));
    }

    let shift = radix.bits_per_digit();
    let overflow = || Error::Overflow {
        input: input.to_string(),
        target: T::KIND.name(),
    };
    let mut value: u64 = 0;
    for (i, ch) in digits.chars().enumerate() {
        let digit = ch.to_digit(radix.base()).ok_or(Error::InvalidDigit {
            digit: ch,
            position: offset + i,
            radix: radix.base(),
        })?;
        if value.leading_zeros() < shift {
            return Err(overflow());
        }
        value = value << shift | u64::from(digit);
        if T::WIDTH < 64 && value >> T::WIDTH != 0 {
            return Err(overflow());
        }
    }
    Ok(T::from_bits_u64(value))
}

/// Lower-case hex encoding, two digits per byte.
pub fn encode_hex(bytes: &[u8]) -> String {
    encode_with(bytes, DIGITS_LOWER)
}

/// Upper-case hex encoding, two digits per byte.
pub fn encode_hex_upper(bytes: &[u8]) -> String {
    encode_with(bytes, DIGITS_UPPER)
}

fn encode_with(bytes: &[u8], table: &[u8; 16]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(table[(b >> 4) as usize] as char);
        out.push(table[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decodes hex text of either case into bytes.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(Error::OddLength(chars.len()));
    }
    let digit = |position: usize| -> Result<u8> {
        let ch = chars[position];
        ch.to_digit(16)
            .map(|d| d as u8)
            .ok_or(Error::InvalidDigit {
                digit: ch,
                position,
                radix: 16,
            })
    };
    (0..chars.len())
        .step_by(2)
        .map(|i| Ok(digit(i)? << 4 | digit(i + 1)?))
        .collect()
}
