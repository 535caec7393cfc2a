//! Yule's I, the inverse of Yule's characteristic K.
//!
//! Built from the frequency spectrum: how many types occur once, twice,
//! and so on. With `m1` the token count and `m2 = sum(V(f) * f^2)`,
//! `I = m1^2 / (m2 - m1)`.

use lexd_types::{DiversityError, EstimatorResult};
use smallvec::{smallvec, SmallVec};

use crate::frequency::FrequencyTable;

/// Centre of the Yule's I rescaling.
pub const YULES_CENTER: f64 = 100.793;

/// Slope of the Yule's I rescaling.
pub const YULES_FACTOR: f64 = 0.6818;

/// Computes rescaled Yule's I for a token sequence.
///
/// The spectrum holds `floor(types / 2)` frequency buckets.
///
/// # Errors
///
/// Returns `DiversityError::TokenOverused` naming the first type (in order
/// of first occurrence) whose count does not fit in the spectrum.
/// Returns `DiversityError::DivisionByZero` when `m2 == m1`, i.e. no token
/// repeats.
pub fn yules_i<S: AsRef<str>>(tokens: &[S]) -> EstimatorResult {
    yules_i_with_table(&FrequencyTable::new(tokens))
}

/// [`yules_i`] over an already counted sequence.
pub fn yules_i_with_table(table: &FrequencyTable<'_>) -> EstimatorResult {
    let mut spectrum: SmallVec<[f64; 64]> = smallvec![0.0; table.type_count() / 2];

    for (token, count) in table.iter() {
        if count >= spectrum.len() {
            return Err(DiversityError::TokenOverused {
                token: token.to_owned(),
            });
        }
        spectrum[count] += 1.0;
    }

    let m1 = table.token_count() as f64;
    let m2: f64 = spectrum
        .iter()
        .enumerate()
        .map(|(frequency, types)| types * (frequency * frequency) as f64)
        .sum();

    if m2 - m1 == 0.0 {
        return Err(DiversityError::DivisionByZero);
    }

    Ok(rescale((m1 * m1) / (m2 - m1)))
}

#[inline]
fn rescale(raw: f64) -> f64 {
    (raw - YULES_CENTER) * YULES_FACTOR + 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectrum_moments() {
        // Types: a2 b2 c1 d1 e1 f1 -> V(1) = 4, V(2) = 2, m1 = 8, m2 = 12.
        let tokens = ["a", "a", "b", "b", "c", "d", "e", "f"];
        let expected = (64.0 / 4.0 - 100.793) * 0.6818 + 100.0;
        assert_eq!(yules_i(&tokens), Ok(expected));
    }

    #[test]
    fn no_repeats_is_division_by_zero() {
        let tokens: Vec<String> = (0..40).map(|i| format!("w{}", i)).collect();
        assert_eq!(yules_i(&tokens), Err(DiversityError::DivisionByZero));
    }

    #[test]
    fn empty_is_division_by_zero() {
        let tokens: [&str; 0] = [];
        assert_eq!(yules_i(&tokens), Err(DiversityError::DivisionByZero));
    }

    #[test]
    fn count_at_spectrum_bound_is_overused() {
        // Five types -> two buckets; "the" occurs twice, which is already out of range.
        let tokens = ["the", "a", "the", "b", "c", "d"];
        assert_eq!(
            yules_i(&tokens),
            Err(DiversityError::TokenOverused {
                token: "the".into()
            })
        );
    }

    #[test]
    fn first_overused_type_is_reported() {
        let tokens = ["x", "y", "y", "x", "y", "z", "w"];
        assert_eq!(
            yules_i(&tokens),
            Err(DiversityError::TokenOverused { token: "x".into() })
        );
    }

    #[test]
    fn single_type_is_overused() {
        let tokens = vec!["same"; 40];
        assert_eq!(
            yules_i(&tokens),
            Err(DiversityError::TokenOverused {
                token: "same".into()
            })
        );
    }

    #[test]
    fn large_spectrum_spills_to_heap() {
        // 200 types, each twice: V(2) = 200, m1 = 400, m2 = 800.
        let mut tokens: Vec<String> = (0..200).map(|i| format!("w{}", i)).collect();
        tokens.extend((0..200).map(|i| format!("w{}", i)));
        let expected = (160_000.0 / 400.0 - 100.793) * 0.6818 + 100.0;
        assert_eq!(yules_i(&tokens), Ok(expected));
    }
}
