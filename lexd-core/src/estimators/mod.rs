//! Lexical diversity estimators.
//!
//! Each estimator consumes the same token sequence independently and
//! returns an [`EstimatorResult`](lexd_types::EstimatorResult): a rescaled
//! score centred near 100, or the reason it could not be computed.

pub mod hdd;
pub mod mtld;
pub mod yules;

pub use hdd::{hdd, hdd_with_table};
pub use mtld::mtld;
pub use yules::{yules_i, yules_i_with_table};
