//! Measure of Textual Lexical Diversity.
//!
//! MTLD walks the token sequence keeping a running type-token ratio (TTR).
//! Each time the ratio falls below the threshold a "factor" is complete and
//! the window restarts. Whatever is left at the end counts as a partial
//! factor, proportional to how far its TTR has fallen. The pass value is
//! `tokens / factors`; the estimator averages a forward and a backward pass
//! so the result does not depend on where the windows happen to break.

use lexd_types::{DiversityError, EstimatorResult};
use rustc_hash::FxHashSet;

/// Centre of the MTLD rescaling.
pub const MTLD_CENTER: f64 = 99.284;

/// Slope of the MTLD rescaling.
pub const MTLD_FACTOR: f64 = 0.5554;

/// Computes rescaled MTLD for a token sequence.
///
/// An empty sequence scores `0.0` without running either pass.
///
/// # Errors
///
/// Returns `DiversityError::DivisionByZero` when a pass completes no
/// factor at all, which happens whenever the TTR never drops (for example,
/// a sequence with no repeated token).
/// Returns `DiversityError::InvalidConfig` if `ttr_threshold` is not
/// strictly between 0 and 1.
pub fn mtld<S: AsRef<str>>(tokens: &[S], ttr_threshold: f64) -> EstimatorResult {
    if !(ttr_threshold > 0.0 && ttr_threshold < 1.0) {
        return Err(DiversityError::InvalidConfig(
            "ttr_threshold must be strictly between 0 and 1",
        ));
    }

    if tokens.is_empty() {
        return Ok(0.0);
    }

    let forward = mtld_pass(tokens.iter().map(AsRef::as_ref), ttr_threshold)?;
    let backward = mtld_pass(tokens.iter().rev().map(AsRef::as_ref), ttr_threshold)?;

    if forward == 0.0 || backward == 0.0 {
        return Ok(0.0);
    }

    Ok(rescale((forward + backward) / 2.0))
}

#[inline]
fn rescale(raw: f64) -> f64 {
    (raw - MTLD_CENTER) * MTLD_FACTOR + 100.0
}

/// One directional pass: `tokens / factors`.
fn mtld_pass<'a, I>(tokens: I, ttr_threshold: f64) -> EstimatorResult
where
    I: Iterator<Item = &'a str>,
{
    let mut window: FxHashSet<&'a str> = FxHashSet::default();
    let mut window_tokens = 0usize;
    let mut ttr = 1.0;
    let mut factors = 0.0;
    let mut seen = 0usize;

    for token in tokens {
        seen += 1;
        window_tokens += 1;
        window.insert(token);

        ttr = window.len() as f64 / window_tokens as f64;

        if ttr < ttr_threshold {
            factors += 1.0;
            window.clear();
            window_tokens = 0;
            ttr = 1.0;
        }
    }

    factors += (1.0 - ttr) / (1.0 - ttr_threshold);

    if factors == 0.0 {
        return Err(DiversityError::DivisionByZero);
    }

    Ok(seen as f64 / factors)
}
