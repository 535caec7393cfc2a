//! Core types for the lexd lexical diversity engine.
//!
//! This crate holds the values that cross the boundary between the scoring
//! engine and whatever sits in front of it (a CLI, a web handler, a batch
//! job). Keeping them separate means:
//!
//! - **Small surface**: callers can match on outcomes without pulling in the engine
//! - **Stable wire text**: failure messages are defined once, next to the variants
//! - **Plain values**: everything here is constructed per call and immutable afterwards

#![warn(missing_docs)]

use core::fmt;

/// Default MTLD type-token ratio threshold.
pub const DEFAULT_TTR_THRESHOLD: f64 = 0.72;

/// Default HD-D sample size.
pub const DEFAULT_SAMPLE_SIZE: f64 = 40.0;

/// Minimum number of tokens a text needs before it is scored.
///
/// Matches the default HD-D sample size; enforced globally by the scorer.
pub const DEFAULT_MIN_TOKENS: usize = 40;

/// Reasons a diversity score could not be produced.
///
/// `Display` yields the exact text a handler returns to its client, so the
/// message can be forwarded without further formatting.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiversityError {
    /// Normalization produced no tokens at all.
    #[error("EMPTY STRING")]
    EmptyInput,
    /// Fewer tokens than the configured minimum.
    #[error("TOO SHORT")]
    TooShort {
        /// Number of tokens in the input.
        length: usize,
        /// Minimum number of tokens required.
        min_length: usize,
    },
    /// An estimator's denominator was zero.
    #[error("DIVIDE BY ZERO")]
    DivisionByZero,
    /// A single token occurs too often to be indexed in Yule's frequency spectrum.
    #[error("'{token}' USED TOO FREQUENTLY")]
    TokenOverused {
        /// The offending token.
        token: String,
    },
    /// Scoring parameters were rejected before any work was done.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl DiversityError {
    /// Returns true for failures detected before any estimator runs.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            DiversityError::EmptyInput | DiversityError::TooShort { .. }
        )
    }
}

/// Outcome of a single estimator.
///
/// `Ok(0.0)` is a valid, degenerate score (the "zero" classification), not
/// a failure.
pub type EstimatorResult = Result<f64, DiversityError>;

/// Reduced lexical diversity of a text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diversity {
    /// Mean of the three rescaled estimator values.
    Score(f64),
    /// At least one estimator reported exactly zero diversity.
    ///
    /// Averaging a zero component would produce a misleading composite, so
    /// it is surfaced on its own.
    Zero,
}

impl Diversity {
    /// Returns the numeric score, if there is one.
    #[inline]
    pub const fn value(self) -> Option<f64> {
        match self {
            Diversity::Score(v) => Some(v),
            Diversity::Zero => None,
        }
    }
}

impl fmt::Display for Diversity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diversity::Score(v) => write!(f, "{}", v),
            Diversity::Zero => f.write_str("ZERO"),
        }
    }
}

/// Individual estimator outcomes for one text, before reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct DiversityReport {
    /// Number of tokens scored.
    pub tokens: usize,
    /// Number of distinct tokens.
    pub types: usize,
    /// Rescaled MTLD.
    pub mtld: EstimatorResult,
    /// Rescaled HD-D.
    pub hdd: EstimatorResult,
    /// Rescaled Yule's I.
    pub yules_i: EstimatorResult,
}

impl DiversityReport {
    /// Reduces the three estimator outcomes to a single result.
    ///
    /// The first failure in the order MTLD, HD-D, Yule's I wins. If all
    /// three succeeded and any of them is exactly zero the result is
    /// [`Diversity::Zero`]; otherwise it is their arithmetic mean.
    pub fn composite(&self) -> Result<Diversity, DiversityError> {
        let mtld = self.mtld.clone()?;
        let hdd = self.hdd.clone()?;
        let yules_i = self.yules_i.clone()?;

        if mtld == 0.0 || hdd == 0.0 || yules_i == 0.0 {
            return Ok(Diversity::Zero);
        }

        Ok(Diversity::Score((mtld + hdd + yules_i) / 3.0))
    }
}

impl fmt::Display for DiversityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(r: &EstimatorResult) -> String {
            match r {
                Ok(v) => format!("{:.4}", v),
                Err(e) => e.to_string(),
            }
        }

        write!(
            f,
            "{} tokens, {} types, mtld={}, hdd={}, yules_i={}",
            self.tokens,
            self.types,
            part(&self.mtld),
            part(&self.hdd),
            part(&self.yules_i)
        )
    }
}

/// Scoring configuration options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversityConfig {
    /// Type-token ratio below which an MTLD factor is complete.
    /// Default: 0.72
    pub ttr_threshold: f64,
    /// Size of the hypothetical sample drawn by HD-D.
    /// Default: 40.0
    pub sample_size: f64,
    /// Texts with fewer tokens are rejected as too short.
    /// Default: 40
    pub min_tokens: usize,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            ttr_threshold: DEFAULT_TTR_THRESHOLD,
            sample_size: DEFAULT_SAMPLE_SIZE,
            min_tokens: DEFAULT_MIN_TOKENS,
        }
    }
}

impl DiversityConfig {
    /// Checks that the parameters keep every estimator well defined.
    ///
    /// # Errors
    ///
    /// Returns `DiversityError::InvalidConfig` if the threshold is outside
    /// `(0, 1)`, the sample size is not a whole number of at least one, or
    /// `min_tokens` would admit texts shorter than the HD-D sample.
    pub fn validate(&self) -> Result<(), DiversityError> {
        if !(self.ttr_threshold > 0.0 && self.ttr_threshold < 1.0) {
            return Err(DiversityError::InvalidConfig(
                "ttr_threshold must be strictly between 0 and 1",
            ));
        }

        if !self.sample_size.is_finite()
            || self.sample_size < 1.0
            || self.sample_size.fract() != 0.0
            || self.sample_size > u32::MAX as f64
        {
            return Err(DiversityError::InvalidConfig(
                "sample_size must be a whole number of at least 1",
            ));
        }

        if (self.min_tokens as f64) < self.sample_size {
            return Err(DiversityError::InvalidConfig(
                "min_tokens must be at least sample_size",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(mtld: EstimatorResult, hdd: EstimatorResult, yules_i: EstimatorResult) -> DiversityReport {
        DiversityReport {
            tokens: 40,
            types: 20,
            mtld,
            hdd,
            yules_i,
        }
    }

    #[test]
    fn error_text_matches_wire_format() {
        assert_eq!(DiversityError::EmptyInput.to_string(), "EMPTY STRING");
        assert_eq!(
            DiversityError::TooShort {
                length: 3,
                min_length: 40
            }
            .to_string(),
            "TOO SHORT"
        );
        assert_eq!(DiversityError::DivisionByZero.to_string(), "DIVIDE BY ZERO");
        assert_eq!(
            DiversityError::TokenOverused {
                token: "the".into()
            }
            .to_string(),
            "'the' USED TOO FREQUENTLY"
        );
    }

    #[test]
    fn client_errors() {
        assert!(DiversityError::EmptyInput.is_client_error());
        assert!(DiversityError::TooShort {
            length: 1,
            min_length: 40
        }
        .is_client_error());
        assert!(!DiversityError::DivisionByZero.is_client_error());
        assert!(!DiversityError::InvalidConfig("x").is_client_error());
    }

    #[test]
    fn composite_averages_three_values() {
        let r = report(Ok(90.0), Ok(100.0), Ok(110.0));
        assert_eq!(r.composite(), Ok(Diversity::Score(100.0)));
    }

    #[test]
    fn composite_first_failure_wins() {
        let r = report(
            Ok(90.0),
            Err(DiversityError::DivisionByZero),
            Err(DiversityError::TokenOverused {
                token: "a".into(),
            }),
        );
        assert_eq!(r.composite(), Err(DiversityError::DivisionByZero));

        let r = report(
            Err(DiversityError::DivisionByZero),
            Ok(1.0),
            Err(DiversityError::TokenOverused {
                token: "a".into(),
            }),
        );
        assert_eq!(r.composite(), Err(DiversityError::DivisionByZero));

        let r = report(
            Ok(1.0),
            Ok(1.0),
            Err(DiversityError::TokenOverused {
                token: "a".into(),
            }),
        );
        assert_eq!(
            r.composite(),
            Err(DiversityError::TokenOverused {
                token: "a".into()
            })
        );
    }

    #[test]
    fn composite_zero_component_is_not_averaged() {
        assert_eq!(
            report(Ok(0.0), Ok(100.0), Ok(100.0)).composite(),
            Ok(Diversity::Zero)
        );
        assert_eq!(
            report(Ok(100.0), Ok(0.0), Ok(100.0)).composite(),
            Ok(Diversity::Zero)
        );
        assert_eq!(
            report(Ok(100.0), Ok(100.0), Ok(0.0)).composite(),
            Ok(Diversity::Zero)
        );
    }

    #[test]
    fn failure_beats_zero() {
        let r = report(Ok(0.0), Ok(100.0), Err(DiversityError::DivisionByZero));
        assert_eq!(r.composite(), Err(DiversityError::DivisionByZero));
    }

    #[test]
    fn diversity_display() {
        assert_eq!(Diversity::Zero.to_string(), "ZERO");
        assert_eq!(Diversity::Score(87.5).to_string(), "87.5");
        assert_eq!(Diversity::Score(87.5).value(), Some(87.5));
        assert_eq!(Diversity::Zero.value(), None);
    }

    #[test]
    fn default_config_is_valid() {
        let c = DiversityConfig::default();
        assert_eq!(c.ttr_threshold, 0.72);
        assert_eq!(c.sample_size, 40.0);
        assert_eq!(c.min_tokens, 40);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_threshold() {
        for t in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let c = DiversityConfig {
                ttr_threshold: t,
                ..DiversityConfig::default()
            };
            assert!(matches!(c.validate(), Err(DiversityError::InvalidConfig(_))));
        }
    }

    #[test]
    fn config_rejects_bad_sample_size() {
        for s in [0.0, 0.5, 12.5, -40.0, f64::INFINITY, f64::NAN] {
            let c = DiversityConfig {
                sample_size: s,
                ..DiversityConfig::default()
            };
            assert!(matches!(c.validate(), Err(DiversityError::InvalidConfig(_))));
        }
    }

    #[test]
    fn config_rejects_minimum_below_sample() {
        let c = DiversityConfig {
            sample_size: 100.0,
            min_tokens: 60,
            ..DiversityConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(DiversityError::InvalidConfig(
                "min_tokens must be at least sample_size"
            ))
        );

        let c = DiversityConfig {
            min_tokens: 39,
            ..DiversityConfig::default()
        };
        assert!(c.validate().is_err());

        for min_tokens in [40, 100] {
            let c = DiversityConfig {
                min_tokens,
                ..DiversityConfig::default()
            };
            assert_eq!(c.validate(), Ok(()));
        }
    }

    #[test]
    fn report_display_lists_each_estimator() {
        let r = report(Ok(1.5), Err(DiversityError::DivisionByZero), Ok(2.0));
        assert_eq!(
            r.to_string(),
            "40 tokens, 20 types, mtld=1.5000, hdd=DIVIDE BY ZERO, yules_i=2.0000"
        );
    }
}
