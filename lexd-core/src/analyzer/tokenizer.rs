//! Streaming Tokenizer Module
//!
//! Splits normalized text into word tokens. It is the second stage of the
//! pipeline, taking the output of [`TextNormalizer`](super::normalizer::TextNormalizer)
//! and breaking it into the units the estimators count.
//!
//! ## What It Does
//!
//! Given normalized input like `"the cat saw the dog"`, it emits each word
//! with its position in the text:
//!
//! ```ignore
//! ("the", 0)
//! ("cat", 1)
//! ("saw", 2)
//! ("the", 3)
//! ("dog", 4)
//! ```
//!
//! Order matters: MTLD walks the sequence forwards and backwards.
//!
//! ## The Input Contract
//!
//! The tokenizer expects **pre-normalized** input:
//! - No leading or trailing spaces
//! - No consecutive spaces between words
//!
//! Violations panic in debug builds.

use memchr::memchr_iter;

/// Streaming tokenizer - splits normalized text into tokens.
///
/// Tokens are slices (`&str`) of the input, emitted through a callback, so
/// tokenizing allocates nothing.
///
/// ## Example
///
/// ```
/// use lexd_core::analyzer::tokenizer::Tokenizer;
///
/// let mut count = 0;
/// Tokenizer::new().tokenize("hello world foo", |_text, _pos| count += 1);
///
/// assert_eq!(count, 3);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits `(text, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace: normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace: normalizer contract violated"
        );

        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces: normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // Splitting on ASCII space keeps both halves on char boundaries.
                emit(&normalized[start..i], pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            emit(&normalized[start..], pos);
        }
    }

    /// Collects the tokens of normalized input into a vector of slices.
    pub fn tokens<'n>(&self, normalized: &'n str) -> Vec<&'n str> {
        let mut out = Vec::with_capacity(normalized.len() / 5 + 1);
        self.tokenize(normalized, |text, _| out.push(text));
        out
    }
}
