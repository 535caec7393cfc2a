//! `lexd-core`: lexical diversity scoring.
//!
//! Raw text goes through the [`analyzer`] (markup stripping, ASCII
//! normalization, tokenization) and the resulting token sequence is scored
//! by three independent estimators:
//!
//! - **MTLD**: forward/backward type-token-ratio factor counting
//! - **HD-D**: expected vocabulary coverage of a random sample
//! - **Yule's I**: moments of the word frequency spectrum
//!
//! The [`scorer`] averages them into one number or reports why it could
//! not. Everything is synchronous and stateless; independent calls can run
//! on any thread.
//!
//! ```
//! use lexd_core::DiversityError;
//!
//! let tokens = lexd_core::normalize("<p>Hello, <b>world</b>!</p>");
//! assert_eq!(tokens, ["hello", "world"]);
//! assert!(matches!(lexd_core::score(&tokens), Err(DiversityError::TooShort { .. })));
//! ```

pub mod analyzer;
pub mod estimators;
pub mod frequency;
pub mod response;
pub mod scorer;

pub use analyzer::normalize;
pub use response::{respond, Response};
pub use scorer::{score, Scorer};

pub use lexd_types::{
    Diversity, DiversityConfig, DiversityError, DiversityReport, EstimatorResult,
};
