//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Strips markup and reduces raw text to lowercase ASCII words
//! - **Tokenizer**: Splits normalized text into an ordered token sequence

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use tokenizer::Tokenizer;

/// Turns raw text into its ordered token sequence.
///
/// # Example
///
/// ```
/// assert_eq!(lexd_core::normalize("<b>Hello</b> World!"), ["hello", "world"]);
/// ```
pub fn normalize(raw_text: &str) -> Vec<String> {
    let normalized = TextNormalizer::new().normalize(raw_text);
    let mut tokens = Vec::new();
    Tokenizer::new().tokenize(&normalized, |text, _| tokens.push(text.to_owned()));
    tokens
}
