//! Composite lexical diversity score.

use lexd_types::{Diversity, DiversityConfig, DiversityError, DiversityReport};
use tracing::{debug, trace};

use crate::estimators::{hdd_with_table, mtld, yules_i_with_table};
use crate::frequency::FrequencyTable;

/// Validates a token sequence, runs the three estimators and reduces them.
///
/// A `Scorer` holds only its (validated) configuration, so one instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    config: DiversityConfig,
}

impl Scorer {
    /// Creates a scorer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `DiversityError::InvalidConfig` if the configuration would
    /// leave an estimator undefined.
    pub fn new(config: DiversityConfig) -> Result<Self, DiversityError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &DiversityConfig {
        &self.config
    }

    /// Runs all three estimators and returns their individual outcomes.
    ///
    /// # Errors
    ///
    /// Returns `DiversityError::EmptyInput` for an empty sequence and
    /// `DiversityError::TooShort` for one below `min_tokens`. Estimator
    /// failures are not errors here; they are carried in the report.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn report<S: AsRef<str>>(&self, tokens: &[S]) -> Result<DiversityReport, DiversityError> {
        if tokens.is_empty() {
            debug!("rejected: empty input");
            return Err(DiversityError::EmptyInput);
        }

        if tokens.len() < self.config.min_tokens {
            debug!(min = self.config.min_tokens, "rejected: too short");
            return Err(DiversityError::TooShort {
                length: tokens.len(),
                min_length: self.config.min_tokens,
            });
        }

        let table = FrequencyTable::new(tokens);
        let report = DiversityReport {
            tokens: tokens.len(),
            types: table.type_count(),
            mtld: mtld(tokens, self.config.ttr_threshold),
            hdd: hdd_with_table(&table, self.config.sample_size),
            yules_i: yules_i_with_table(&table),
        };

        debug!(
            types = report.types,
            mtld = ?report.mtld,
            hdd = ?report.hdd,
            yules_i = ?report.yules_i,
            "estimators done"
        );

        Ok(report)
    }

    /// Scores a token sequence.
    ///
    /// # Errors
    ///
    /// Validation failures as for [`Scorer::report`], then the first
    /// estimator failure in the order MTLD, HD-D, Yule's I.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Diversity, DiversityError> {
        let outcome = self.report(tokens)?.composite();
        trace!(?outcome, "reduced");
        outcome
    }
}

/// Scores a token sequence with the default configuration.
///
/// # Example
///
/// ```
/// use lexd_types::DiversityError;
///
/// let tokens = lexd_core::normalize("far too short");
/// assert!(matches!(lexd_core::score(&tokens), Err(DiversityError::TooShort { .. })));
/// ```
pub fn score<S: AsRef<str>>(tokens: &[S]) -> Result<Diversity, DiversityError> {
    Scorer::default().score(tokens)
}
