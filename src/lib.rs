//! # Sugars Prims
//!
//! Type-safe helpers for primitive slices, collections, maps, bits and
//! number formatting.
//!
//! Every scalar primitive implements [`Primitive`], and the slice surfaces
//! ([`PrimSliceExt`], [`NumericSliceExt`]) are written once against it. Floats
//! use a total order everywhere: NaN equals NaN and sorts last, and `-0.0`
//! sorts before `0.0`.
//!
//! ## Features
//!
//! - `collections` - Order-preserving set operations, grouping and map helpers
//! - `random` - Random primitive vectors and shuffling backed by `rand`
//! - `format` - Decimal-format patterns with a process-wide pattern cache
//! - `serde` - `Serialize`/`Deserialize` for `Number`, `Radix`, `ToStringStyle` and `PrimitiveKind`
//!
//! ## Example
//!
//! ```rust
//! use sugars_prims::{sort, PrimSliceExt, NumericSliceExt};
//!
//! let mut samples = vec![2.5f64, f64::NAN, -0.0, 0.0, -4.0];
//! sort::sort_primitives(&mut samples);
//! assert_eq!(samples.index_of(f64::NAN), Some(4));
//! assert_eq!(samples[..4].max_value()?, 2.5);
//! assert_eq!(samples[..2].joined(" "), "-4 -0");
//! # Ok::<(), sugars_prims::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod arrays;
pub mod bits;
pub mod classes;
pub mod codec;
pub mod error;
pub mod numbers;
pub mod prims;
pub mod sort;
pub mod stringify;

// Conditionally compile modules based on features
#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "format")]
pub mod format;

pub use codec::Radix;
pub use error::{Error, Result};
pub use numbers::Number;
pub use prims::{
    Float, Integer, NumericSliceExt, Numeric, PrimSliceExt, Primitive, PrimitiveKind,
};
pub use stringify::{
    DebugStringifier, DisplayStringifier, Quotable, QuotedStringifier, RadixStringifier, Stringifier,
    ToStringStyle,
};

#[cfg(feature = "format")]
pub use format::{Formats, NumberPattern};
