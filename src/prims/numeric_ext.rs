//! Operations that only make sense for integer and float slices.

use crate::error::{Error, Result};
use crate::prims::{Integer, Numeric};

/// Aggregates and conversions over `[T: Numeric]`.
pub trait NumericSliceExt<T: Numeric> {
    /// Smallest element; any NaN makes the result NaN.
    fn min_value(&self) -> Result<T>;

    /// Largest element; any NaN makes the result NaN.
    fn max_value(&self) -> Result<T>;

    /// Sum of all elements widened to `f64`. Zero for an empty slice.
    fn sum_f64(&self) -> f64;

    /// Arithmetic mean.
    fn mean(&self) -> Result<f64>;

    /// Converts every element with `as` semantics.
    ///
    /// ```rust
    /// use sugars_prims::NumericSliceExt;
    ///
    /// let wide = [300i32, -1, 7];
    /// assert_eq!(wide.cast_to::<u8>(), vec![44, 255, 7]);
    /// assert_eq!([2.9f64, -1.5, f64::NAN].cast_to::<i32>(), vec![2, -1, 0]);
    /// ```
    fn cast_to<U: Numeric>(&self) -> Vec<U>;
}

impl<T: Numeric> NumericSliceExt<T> for [T] {
    fn min_value(&self) -> Result<T> {
        let (first, rest) = self.split_first().ok_or(Error::Empty("min_value"))?;
        Ok(rest.iter().fold(*first, |acc, &v| acc.min_of(v)))
    }

    fn max_value(&self) -> Result<T> {
        let (first, rest) = self.split_first().ok_or(Error::Empty("max_value"))?;
        Ok(rest.iter().fold(*first, |acc, &v| acc.max_of(v)))
    }

    #[inline]
    fn sum_f64(&self) -> f64 {
        self.iter().map(|v| v.to_f64()).sum()
    }

    fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::Empty("mean"));
        }
        Ok(self.sum_f64() / self.len() as f64)
    }

    fn cast_to<U: Numeric>(&self) -> Vec<U> {
        if T::IS_FLOAT {
            self.iter().map(|v| U::from_f64(v.to_f64())).collect()
        } else {
            self.iter().map(|v| U::from_i128(v.to_i128())).collect()
        }
    }
}

/// `len` consecutive values from `start`, wrapping past the type's maximum.
pub fn sequence<T: Integer>(start: T, len: usize) -> Vec<T> {
    sequence_step(start, T::from_usize_wrapping(1), len)
}

/// `len` values from `start`, each `step` past the previous one.
pub fn sequence_step<T: Integer>(start: T, step: T, len: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(len);
    let mut current = start;
    for _ in 0..len {
        out.push(current);
        current = current.add_wrapping(step);
    }
    out
}
