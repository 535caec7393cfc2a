//! HD-D: lexical diversity from the hypergeometric distribution.
//!
//! For every type, HD-D asks how likely it is to appear at least once in a
//! random sample of `sample_size` tokens drawn without replacement. Each
//! probability is divided by the sample size and summed, giving the
//! expected share of the sample made up of distinct types.
//!
//! Combination counts for long texts overflow any fixed-width integer, so
//! they are computed exactly with [`BigUint`] and only the final ratio is
//! converted to `f64`.

use lexd_types::{DiversityError, EstimatorResult};
use num_bigint::BigUint;
use num_rational::Ratio;
use num_traits::{One, ToPrimitive, Zero};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::frequency::FrequencyTable;

/// Centre of the HD-D rescaling.
pub const HDD_CENTER: f64 = 0.854;

/// Slope of the HD-D rescaling.
pub const HDD_FACTOR: f64 = 592.1052;

/// Computes rescaled HD-D for a token sequence.
///
/// A raw sum of exactly zero (no tokens) scores `0.0` unscaled.
///
/// # Errors
///
/// Returns `DiversityError::DivisionByZero` when the sequence is shorter
/// than the sample: no sample of that size exists, so `C(n, s)` is zero.
/// Returns `DiversityError::InvalidConfig` if `sample_size` is not a whole
/// number of at least one.
pub fn hdd<S: AsRef<str>>(tokens: &[S], sample_size: f64) -> EstimatorResult {
    hdd_with_table(&FrequencyTable::new(tokens), sample_size)
}

/// [`hdd`] over an already counted sequence.
pub fn hdd_with_table(table: &FrequencyTable<'_>, sample_size: f64) -> EstimatorResult {
    let sample = sample_count(sample_size)?;
    let population = table.token_count() as u64;

    // Many types share an occurrence count; the probability depends only on it.
    let mut by_count: FxHashMap<usize, f64> = FxHashMap::default();
    let mut raw = 0.0;

    for (_, count) in table.iter() {
        let absent = match by_count.get(&count) {
            Some(&p) => p,
            None => {
                let p = hypergeometric(population, sample, count as u64, 0)?;
                by_count.insert(count, p);
                p
            }
        };

        raw += (1.0 - absent) / sample_size;
    }

    trace!(raw, distinct_counts = by_count.len(), "hdd sum");

    if raw == 0.0 {
        return Ok(0.0);
    }

    Ok(rescale(raw))
}

#[inline]
fn rescale(raw: f64) -> f64 {
    (raw - HDD_CENTER) * HDD_FACTOR + 100.0
}

fn sample_count(sample_size: f64) -> Result<u64, DiversityError> {
    if !sample_size.is_finite() || sample_size < 1.0 || sample_size.fract() != 0.0 {
        return Err(DiversityError::InvalidConfig(
            "sample_size must be a whole number of at least 1",
        ));
    }
    sample_size
        .to_u64()
        .ok_or(DiversityError::InvalidConfig("sample_size out of range"))
}

/// Hypergeometric point probability.
///
/// The probability of drawing exactly `samp_successes` successes in a
/// sample of `sample` items taken without replacement from `population`
/// items of which `pop_successes` are successes:
///
/// `C(K, k) * C(N - K, n - k) / C(N, n)`
///
/// Draws that cannot happen (more successes than exist, or more failures
/// than exist) have probability zero.
///
/// # Errors
///
/// Returns `DiversityError::DivisionByZero` if `sample > population`.
///
/// # Example
///
/// ```
/// use lexd_core::estimators::hdd::hypergeometric;
///
/// // One red ball among four; draw two: P(no red) = C(3, 2) / C(4, 2) = 1/2.
/// assert_eq!(hypergeometric(4, 2, 1, 0), Ok(0.5));
/// ```
pub fn hypergeometric(
    population: u64,
    sample: u64,
    pop_successes: u64,
    samp_successes: u64,
) -> Result<f64, DiversityError> {
    let total = combination(population, sample);
    if total.is_zero() {
        return Err(DiversityError::DivisionByZero);
    }

    let (Some(pop_failures), Some(samp_failures)) = (
        population.checked_sub(pop_successes),
        sample.checked_sub(samp_successes),
    ) else {
        return Ok(0.0);
    };

    let ways =
        combination(pop_successes, samp_successes) * combination(pop_failures, samp_failures);

    Ratio::new_raw(ways, total)
        .to_f64()
        .ok_or(DiversityError::DivisionByZero)
}

/// Binomial coefficient `C(n, k)`, exactly.
///
/// Computed as the falling product `n * (n - 1) * ... * (n - k + 1)`
/// divided by `k!`, so `C(n, k)` is zero whenever `k > n`.
pub fn combination(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    if k == 0 {
        return BigUint::one();
    }

    let mut numerator = BigUint::one();
    for i in (n - k + 1)..=n {
        numerator *= i;
    }

    numerator / factorial(k)
}

/// `n!`, exactly. `0! == 1! == 1`.
pub fn factorial(n: u64) -> BigUint {
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}
