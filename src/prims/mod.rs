//! Primitive type model and the per-type slice surfaces built on it
//!
//! Every scalar primitive (`bool`, the fixed-width integers, `f32`, `f64`,
//! `char`) implements the sealed [`Primitive`] trait. The slice extension
//! traits are written once against these traits instead of once per type.

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod booleans;
pub mod bytes;
pub mod chars;
pub mod numeric_ext;
#[cfg(feature = "random")]
pub mod random;
pub mod slice_ext;

pub use numeric_ext::{sequence, sequence_step, NumericSliceExt};
pub use slice_ext::{from_options, from_options_strict, PrimSliceExt};

mod sealed {
    pub trait Sealed {}
}

/// The scalar primitive types covered by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveKind {
    /// `bool`
    Bool,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `char`
    Char,
}

impl PrimitiveKind {
    /// All kinds in declaration order.
    pub const ALL: [PrimitiveKind; 12] = [
        PrimitiveKind::Bool,
        PrimitiveKind::I8,
        PrimitiveKind::I16,
        PrimitiveKind::I32,
        PrimitiveKind::I64,
        PrimitiveKind::U8,
        PrimitiveKind::U16,
        PrimitiveKind::U32,
        PrimitiveKind::U64,
        PrimitiveKind::F32,
        PrimitiveKind::F64,
        PrimitiveKind::Char,
    ];

    /// Rust spelling of the type.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::I8 => "i8",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::F32 => "f32",
            PrimitiveKind::F64 => "f64",
            PrimitiveKind::Char => "char",
        }
    }

    /// Size of one value in bytes.
    pub fn size(self) -> usize {
        match self {
            PrimitiveKind::Bool | PrimitiveKind::I8 | PrimitiveKind::U8 => 1,
            PrimitiveKind::I16 | PrimitiveKind::U16 => 2,
            PrimitiveKind::I32 | PrimitiveKind::U32 | PrimitiveKind::F32 | PrimitiveKind::Char => 4,
            PrimitiveKind::I64 | PrimitiveKind::U64 | PrimitiveKind::F64 => 8,
        }
    }

    /// Whether the kind is one of the integer types.
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveKind::I8
                | PrimitiveKind::I16
                | PrimitiveKind::I32
                | PrimitiveKind::I64
                | PrimitiveKind::U8
                | PrimitiveKind::U16
                | PrimitiveKind::U32
                | PrimitiveKind::U64
        )
    }

    /// Whether the kind is `f32` or `f64`.
    pub fn is_float(self) -> bool {
        matches!(self, PrimitiveKind::F32 | PrimitiveKind::F64)
    }

    /// Whether the kind carries a sign.
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            PrimitiveKind::I8
                | PrimitiveKind::I16
                | PrimitiveKind::I32
                | PrimitiveKind::I64
                | PrimitiveKind::F32
                | PrimitiveKind::F64
        )
    }

    /// Resolves the kind of `T`, or `None` when `T` is not a covered primitive.
    pub fn of<T: ?Sized + 'static>() -> Option<PrimitiveKind> {
        let id = TypeId::of::<T>();
        let table: [(TypeId, PrimitiveKind); 12] = [
            (TypeId::of::<bool>(), PrimitiveKind::Bool),
            (TypeId::of::<i8>(), PrimitiveKind::I8),
            (TypeId::of::<i16>(), PrimitiveKind::I16),
            (TypeId::of::<i32>(), PrimitiveKind::I32),
            (TypeId::of::<i64>(), PrimitiveKind::I64),
            (TypeId::of::<u8>(), PrimitiveKind::U8),
            (TypeId::of::<u16>(), PrimitiveKind::U16),
            (TypeId::of::<u32>(), PrimitiveKind::U32),
            (TypeId::of::<u64>(), PrimitiveKind::U64),
            (TypeId::of::<f32>(), PrimitiveKind::F32),
            (TypeId::of::<f64>(), PrimitiveKind::F64),
            (TypeId::of::<char>(), PrimitiveKind::Char),
        ];
        table
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, kind)| *kind)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar primitive with the hashing, ordering and equality rules shared by
/// every slice helper in the crate.
///
/// Floats follow a total order in which `-0.0 < 0.0` and every NaN is equal
/// to every other NaN and greater than `+inf`. Equality is by canonical bits,
/// so `NaN` equals `NaN` but `0.0` does not equal `-0.0`.
pub trait Primitive:
    sealed::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Kind tag of the implementing type.
    const KIND: PrimitiveKind;

    /// 32-bit hash code of a single value.
    fn hash_code(self) -> i32;

    /// Total order comparison.
    fn prim_cmp(&self, other: &Self) -> Ordering;

    /// Canonical 64-bit key; equal keys mean equal values.
    fn key(self) -> u64;

    /// Equality by canonical bits.
    #[inline]
    fn bit_eq(self, other: Self) -> bool {
        self.key() == other.key()
    }
}

/// Integer and floating point primitives.
pub trait Numeric: Primitive {
    /// Additive identity.
    const ZERO: Self;
    /// Smallest finite value.
    const MIN_VALUE: Self;
    /// Largest finite value.
    const MAX_VALUE: Self;
    /// `true` for `f32` and `f64`.
    const IS_FLOAT: bool;

    /// Widens to `f64`, rounding to nearest.
    fn to_f64(self) -> f64;
    /// Widens to `i128`; floats saturate and NaN becomes zero.
    fn to_i128(self) -> i128;
    /// Narrows from `f64` with `as` semantics.
    fn from_f64(value: f64) -> Self;
    /// Narrows from `i128` with `as` semantics.
    fn from_i128(value: i128) -> Self;
    /// Smaller of two values; NaN wins for floats.
    fn min_of(self, other: Self) -> Self;
    /// Larger of two values; NaN wins for floats.
    fn max_of(self, other: Self) -> Self;
}

/// Fixed-width integer primitives.
pub trait Integer: Numeric {
    /// Width in bits.
    const WIDTH: u32;
    /// Whether the type is signed.
    const SIGNED: bool;

    /// Two's complement bit pattern, zero-extended to 64 bits.
    fn to_bits_u64(self) -> u64;
    /// Rebuilds a value from the low `WIDTH` bits.
    fn from_bits_u64(bits: u64) -> Self;
    /// Addition that wraps on overflow.
    fn add_wrapping(self, other: Self) -> Self;
    /// Multiplication that wraps on overflow.
    fn mul_wrapping(self, other: Self) -> Self;
    /// Converts a count, wrapping into the type's range.
    fn from_usize_wrapping(value: usize) -> Self;
}

/// Floating point primitives.
pub trait Float: Numeric {
    /// Canonical NaN.
    const NAN: Self;

    /// Whether the value is NaN.
    fn is_nan(self) -> bool;
}

fn float_order(a_nan: bool, b_nan: bool, ordering: Option<Ordering>, a_neg: bool, b_neg: bool) -> Ordering {
    match (a_nan, b_nan) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match ordering {
            // -0.0 and 0.0 compare equal under IEEE; split them by sign
            Some(Ordering::Equal) | None => b_neg.cmp(&a_neg),
            Some(ordering) => ordering,
        },
    }
}

impl sealed::Sealed for bool {}

impl Primitive for bool {
    const KIND: PrimitiveKind = PrimitiveKind::Bool;

    #[inline]
    fn hash_code(self) -> i32 {
        if self {
            1231
        } else {
            1237
        }
    }

    #[inline]
    fn prim_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn key(self) -> u64 {
        self as u64
    }
}

impl sealed::Sealed for char {}

impl Primitive for char {
    const KIND: PrimitiveKind = PrimitiveKind::Char;

    #[inline]
    fn hash_code(self) -> i32 {
        self as u32 as i32
    }

    #[inline]
    fn prim_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn key(self) -> u64 {
        self as u64
    }
}

macro_rules! impl_integer {
    ($($t:ty => $unsigned:ty, $kind:ident, $signed:expr, $hash:expr);* $(;)?) => {$(
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            const KIND: PrimitiveKind = PrimitiveKind::$kind;

            #[inline]
            fn hash_code(self) -> i32 {
                let hash: fn($t) -> i32 = $hash;
                hash(self)
            }

            #[inline]
            fn prim_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            #[inline]
            fn key(self) -> u64 {
                self as u64
            }
        }

        impl Numeric for $t {
            const ZERO: Self = 0;
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;
            const IS_FLOAT: bool = false;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $t
            }

            #[inline]
            fn min_of(self, other: Self) -> Self {
                Ord::min(self, other)
            }

            #[inline]
            fn max_of(self, other: Self) -> Self {
                Ord::max(self, other)
            }
        }

        impl Integer for $t {
            const WIDTH: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;

            #[inline]
            fn to_bits_u64(self) -> u64 {
                self as $unsigned as u64
            }

            #[inline]
            fn from_bits_u64(bits: u64) -> Self {
                bits as $unsigned as $t
            }

            #[inline]
            fn add_wrapping(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline]
            fn mul_wrapping(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }

            #[inline]
            fn from_usize_wrapping(value: usize) -> Self {
                value as $t
            }
        }
    )*};
}

impl_integer! {
    i8 => u8, I8, true, |v| v as i32;
    i16 => u16, I16, true, |v| v as i32;
    i32 => u32, I32, true, |v| v;
    i64 => u64, I64, true, |v| (v ^ ((v as u64) >> 32) as i64) as i32;
    u8 => u8, U8, false, |v| v as i32;
    u16 => u16, U16, false, |v| v as i32;
    u32 => u32, U32, false, |v| v as i32;
    u64 => u64, U64, false, |v| (v ^ (v >> 32)) as i32;
}

macro_rules! impl_float {
    ($($t:ty, $kind:ident, $canonical:expr, $hash:expr);* $(;)?) => {$(
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            const KIND: PrimitiveKind = PrimitiveKind::$kind;

            #[inline]
            fn hash_code(self) -> i32 {
                let hash: fn(u64) -> i32 = $hash;
                hash(self.key())
            }

            #[inline]
            fn prim_cmp(&self, other: &Self) -> Ordering {
                float_order(
                    <$t>::is_nan(*self),
                    <$t>::is_nan(*other),
                    self.partial_cmp(other),
                    self.is_sign_negative(),
                    other.is_sign_negative(),
                )
            }

            #[inline]
            fn key(self) -> u64 {
                if <$t>::is_nan(self) {
                    $canonical
                } else {
                    self.to_bits() as u64
                }
            }
        }

        impl Numeric for $t {
            const ZERO: Self = 0.0;
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;
            const IS_FLOAT: bool = true;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $t
            }

            #[inline]
            fn min_of(self, other: Self) -> Self {
                if <$t>::is_nan(self) || <$t>::is_nan(other) {
                    <$t>::NAN
                } else if self.prim_cmp(&other) == Ordering::Greater {
                    other
                } else {
                    self
                }
            }

            #[inline]
            fn max_of(self, other: Self) -> Self {
                if <$t>::is_nan(self) || <$t>::is_nan(other) {
                    <$t>::NAN
                } else if self.prim_cmp(&other) == Ordering::Less {
                    other
                } else {
                    self
                }
            }
        }

        impl Float for $t {
            const NAN: Self = <$t>::NAN;

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    )*};
}

impl_float! {
    f32, F32, 0x7fc0_0000, |bits| bits as u32 as i32;
    f64, F64, 0x7ff8_0000_0000_0000, |bits| (bits ^ (bits >> 32)) as i32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hash_codes_match_boxed_conventions() {
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
        assert_eq!((-5i8).hash_code(), -5);
        assert_eq!(200u8.hash_code(), 200);
        assert_eq!('A'.hash_code(), 65);
        assert_eq!(1i64.hash_code(), 1);
        assert_eq!((-1i64).hash_code(), 0);
        assert_eq!((1i64 << 32).hash_code(), 1);
        assert_eq!(1.0f32.hash_code(), 0x3f80_0000);
        assert_eq!(1.0f64.hash_code(), 0x3ff0_0000);
        assert_eq!(0.0f64.hash_code(), 0);
    }

    #[test]
    fn test_nan_canonicalization() {
        let quiet = f64::NAN;
        let other = f64::from_bits(0x7ff8_0000_0000_0001);
        assert!(other.is_nan());
        assert_eq!(quiet.key(), other.key());
        assert!(quiet.bit_eq(other));
        assert_eq!(quiet.hash_code(), other.hash_code());
        assert!(!0.0f64.bit_eq(-0.0));
    }

    #[test]
    fn test_float_total_order() {
        assert_eq!((-0.0f64).prim_cmp(&0.0), Ordering::Less);
        assert_eq!(0.0f64.prim_cmp(&-0.0), Ordering::Greater);
        assert_eq!(f64::NAN.prim_cmp(&f64::INFINITY), Ordering::Greater);
        assert_eq!(f64::NAN.prim_cmp(&-f64::NAN), Ordering::Equal);
        assert_eq!(1.5f32.prim_cmp(&2.5), Ordering::Less);
        assert_eq!(f32::NEG_INFINITY.prim_cmp(&f32::MIN), Ordering::Less);
    }

    #[test]
    fn test_float_min_max() {
        assert!(1.0f64.min_of(f64::NAN).is_nan());
        assert!(f64::NAN.max_of(1.0).is_nan());
        assert_eq!(0.0f64.min_of(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!((-0.0f64).max_of(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(3i32.min_of(-7), -7);
        assert_eq!(3u8.max_of(9), 9);
    }

    #[test]
    fn test_integer_bits() {
        assert_eq!((-1i8).to_bits_u64(), 0xff);
        assert_eq!(i16::from_bits_u64(0xffff), -1);
        assert_eq!((-2i32).to_bits_u64(), 0xffff_fffe);
        assert_eq!(u64::from_bits_u64(u64::MAX), u64::MAX);
        assert_eq!(<i32 as Integer>::WIDTH, 32);
        assert_eq!(i8::from_usize_wrapping(300), 44);
    }

    #[test]
    fn test_kind_lookup() {
        assert_eq!(PrimitiveKind::of::<f64>(), Some(PrimitiveKind::F64));
        assert_eq!(PrimitiveKind::of::<char>(), Some(PrimitiveKind::Char));
        assert_eq!(PrimitiveKind::of::<String>(), None);
        assert_eq!(PrimitiveKind::of::<str>(), None);
        assert_eq!(<u16 as Primitive>::KIND, PrimitiveKind::U16);
        for kind in PrimitiveKind::ALL {
            assert!(kind.size() >= 1);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert!(PrimitiveKind::I64.is_integral());
        assert!(!PrimitiveKind::Char.is_integral());
        assert!(PrimitiveKind::F32.is_float());
        assert!(!PrimitiveKind::U32.is_signed());
    }
}
