//! Tagged numbers, lenient parsing and cross-kind comparison
//!
//! [`Number`] holds any integer or float primitive together with its kind.
//! Two integral numbers compare exactly. A comparison involving a float goes
//! through `f64` under the total order, so NaN is the greatest value.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::{self, Radix};
use crate::error::{Error, Result};
use crate::prims::{Numeric, Primitive, PrimitiveKind};

/// A numeric primitive tagged with its type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// `i8` value
    I8(i8),
    /// `i16` value
    I16(i16),
    /// `i32` value
    I32(i32),
    /// `i64` value
    I64(i64),
    /// `u8` value
    U8(u8),
    /// `u16` value
    U16(u16),
    /// `u32` value
    U32(u32),
    /// `u64` value
    U64(u64),
    /// `f32` value
    F32(f32),
    /// `f64` value
    F64(f64),
}

macro_rules! number_dispatch {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            Number::I8($v) => $body,
            Number::I16($v) => $body,
            Number::I32($v) => $body,
            Number::I64($v) => $body,
            Number::U8($v) => $body,
            Number::U16($v) => $body,
            Number::U32($v) => $body,
            Number::U64($v) => $body,
            Number::F32($v) => $body,
            Number::F64($v) => $body,
        }
    };
}

macro_rules! number_from {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<$t> for Number {
            #[inline]
            fn from(value: $t) -> Self {
                Number::$variant(value)
            }
        }
    )*};
}

number_from! {
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    f32 => F32, f64 => F64,
}

impl Number {
    /// Kind of the wrapped primitive.
    pub fn kind(&self) -> PrimitiveKind {
        number_dispatch!(*self, v => v.kind_of())
    }

    /// Whether the wrapped value is an integer.
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.kind().is_integral()
    }

    /// The value widened to `f64`.
    pub fn as_f64(&self) -> f64 {
        number_dispatch!(*self, v => v.to_f64())
    }

    /// The exact integer value, or `None` for floats.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Number::F32(_) | Number::F64(_) => None,
            _ => Some(number_dispatch!(*self, v => v.to_i128())),
        }
    }

    /// Converts to `T` with `as` semantics.
    pub fn to<T: Numeric>(&self) -> T {
        match self.as_i128() {
            Some(i) => T::from_i128(i),
            None => T::from_f64(self.as_f64()),
        }
    }

    /// Orders two numbers of any kinds.
    pub fn compare(&self, other: &Number) -> Ordering {
        compare(self, other)
    }

    /// Reads decimal, prefixed-radix or floating point text.
    ///
    /// Integers take the narrowest of `I32`, `I64` and `U64` that holds them.
    /// Integers too large for all three, and anything with a fraction or
    /// exponent, become `F64`.
    ///
    /// ```rust
    /// use sugars_prims::Number;
    ///
    /// assert_eq!(Number::parse(" 42 "), Ok(Number::I32(42)));
    /// assert_eq!(Number::parse("-0x10"), Ok(Number::I32(-16)));
    /// assert_eq!(Number::parse("3000000000"), Ok(Number::I64(3_000_000_000)));
    /// assert_eq!(Number::parse("1e3"), Ok(Number::F64(1000.0)));
    /// assert!(Number::parse("12abc").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Number> {
        let trimmed = text.trim();
        let invalid = || Error::InvalidNumber(text.to_string());
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if let Some(radix) = radix_of(unsigned) {
            let overflow = || Error::Overflow {
                input: text.to_string(),
                target: "i64 or u64",
            };
            let magnitude = codec::parse_radix::<u64>(unsigned, radix).map_err(|err| match err {
                Error::Overflow { .. } => overflow(),
                other => other,
            })?;
            let value = if negative {
                -i128::from(magnitude)
            } else {
                i128::from(magnitude)
            };
            return narrowest_integer(value).ok_or_else(overflow);
        }

        if is_digits(unsigned) {
            if let Some(number) = trimmed.parse::<i128>().ok().and_then(narrowest_integer) {
                return Ok(number);
            }
        }
        if !unsigned.bytes().any(|b| b.is_ascii_digit()) {
            // rules out "inf" and "NaN", which f64 would accept
            return Err(invalid());
        }
        trimmed.parse::<f64>().map(Number::F64).map_err(|_| invalid())
    }
}

trait KindOf {
    fn kind_of(self) -> PrimitiveKind;
}

impl<T: Primitive> KindOf for T {
    #[inline]
    fn kind_of(self) -> PrimitiveKind {
        T::KIND
    }
}

fn radix_of(text: &str) -> Option<Radix> {
    let head = text.get(..2)?;
    [Radix::Hex, Radix::Octal, Radix::Binary]
        .into_iter()
        .find(|radix| head.eq_ignore_ascii_case(radix.prefix()))
}

fn narrowest_integer(value: i128) -> Option<Number> {
    if let Ok(v) = i32::try_from(value) {
        Some(Number::I32(v))
    } else if let Ok(v) = i64::try_from(value) {
        Some(Number::I64(v))
    } else {
        u64::try_from(value).ok().map(Number::U64)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        number_dispatch!(self, v => fmt::Display::fmt(v, f))
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Number::parse(s)
    }
}

/// Orders `a` and `b` whatever their kinds.
pub fn compare(a: &Number, b: &Number) -> Ordering {
    match (a.as_i128(), b.as_i128()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.as_f64().prim_cmp(&b.as_f64()),
    }
}

/// Parses trimmed `text`, falling back to `default`.
pub fn parse_or<T: FromStr>(text: &str, default: T) -> T {
    text.trim().parse().unwrap_or(default)
}

/// Whether `text` is a non-empty run of ASCII digits.
#[inline]
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Whether [`Number::parse`] accepts `text`.
#[inline]
pub fn is_number(text: &str) -> bool {
    Number::parse(text).is_ok()
}

/// Restricts `value` to `[low, high]` under the total order.
///
/// NaN orders above every other float, so it clamps to `high`.
pub fn clamp<T: Numeric>(value: T, low: T, high: T) -> Result<T> {
    if low.prim_cmp(&high) == Ordering::Greater {
        return Err(Error::InvalidArgument("low must not exceed high"));
    }
    Ok(if value.prim_cmp(&low) == Ordering::Less {
        low
    } else if value.prim_cmp(&high) == Ordering::Greater {
        high
    } else {
        value
    })
}
