//! Random primitive arrays backed by `rand`.

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::prims::Numeric;

/// `len` values from the thread-local generator.
///
/// Floats land in `[0, 1)`, integers span their whole range and chars are any
/// valid scalar value.
pub fn random_vec<T>(len: usize) -> Vec<T>
where
    Standard: Distribution<T>,
{
    random_vec_with(&mut rand::thread_rng(), len)
}

/// `len` values drawn from `rng`.
pub fn random_vec_with<T, R>(rng: &mut R, len: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    Standard: Distribution<T>,
{
    rng.sample_iter(Standard).take(len).collect()
}

/// `len` values uniformly drawn from `[low, high)`.
///
/// Float bounds must be finite and `high - low` must be representable.
pub fn random_range_vec<T>(len: usize, low: T, high: T) -> Result<Vec<T>>
where
    T: Numeric + SampleUniform,
{
    random_range_vec_with(&mut rand::thread_rng(), len, low, high)
}

/// Like [`random_range_vec`] with a caller-supplied generator.
pub fn random_range_vec_with<T, R>(rng: &mut R, len: usize, low: T, high: T) -> Result<Vec<T>>
where
    T: Numeric + SampleUniform,
    R: Rng + ?Sized,
{
    // also rejects NaN bounds
    if !(low < high) {
        return Err(Error::InvalidArgument("low must be less than high"));
    }
    if T::IS_FLOAT {
        let span = high.to_f64() - low.to_f64();
        if !low.to_f64().is_finite() || !high.to_f64().is_finite() || span > T::MAX_VALUE.to_f64() {
            return Err(Error::InvalidArgument("float range must be finite"));
        }
    }
    let range = Uniform::new(low, high);
    Ok((0..len).map(|_| range.sample(rng)).collect())
}

/// Shuffles in place with the thread-local generator.
#[inline]
pub fn shuffle<T>(values: &mut [T]) {
    values.shuffle(&mut rand::thread_rng());
}

/// Shuffled copy of `values`.
pub fn shuffled<T: Clone>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    shuffle(&mut out);
    out
}

/// Deterministic generator for reproducible output.
pub fn seeded_rng(seed: u64) -> StdRng {
    log::trace!("seeding StdRng with {seed}");
    StdRng::seed_from_u64(seed)
}
