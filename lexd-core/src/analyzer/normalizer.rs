//! Raw text cleanup.
//!
//! Turns submitted text (often scraped HTML or form input with literal
//! escape sequences) into lowercase ASCII words separated by single
//! spaces, ready for the [`Tokenizer`](super::tokenizer::Tokenizer).

use memchr::{memchr, memmem};

const NBSP_ENTITY: &[u8] = b"&nbsp;";
const ESCAPED_NEWLINE: &[u8] = b"\\n";

/// Text normalizer for diversity scoring.
///
/// Applies, in order:
/// - Replaces tag markup (`<` up to the next `>`, across lines) with a space
/// - Replaces `&nbsp;` entities with a space
/// - Replaces the two-character sequence `\n` with a space
/// - Drops every byte that is not an ASCII letter, digit or space
/// - Lowercases what is left
///
/// The output additionally has no leading, trailing or repeated spaces.
/// Tabs and real line breaks are dropped, not treated as separators.
///
/// # Examples
///
/// ```
/// use lexd_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("<b>Hello</b> World!"), "hello world");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        let mut stage = Vec::with_capacity(input.len());
        replace_tags(input.as_bytes(), &mut stage);

        let mut next = Vec::with_capacity(stage.len());
        replace_all(&stage, NBSP_ENTITY, &mut next);

        stage.clear();
        replace_all(&next, ESCAPED_NEWLINE, &mut stage);

        out.reserve(stage.len());
        let mut prev_space = true;
        for &b in &stage {
            if b == b' ' {
                if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
            } else if b.is_ascii_alphanumeric() {
                out.push(b.to_ascii_lowercase() as char);
                prev_space = false;
            }
        }

        if out.ends_with(' ') {
            out.pop();
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Copies `input` to `out`, replacing each `<...>` run with one space.
///
/// Matching is non-greedy: a tag ends at the first `>` after its `<`. An
/// unterminated `<` is copied through unchanged.
fn replace_tags(input: &[u8], out: &mut Vec<u8>) {
    let mut rest = input;

    while let Some(open) = memchr(b'<', rest) {
        let Some(close) = memchr(b'>', &rest[open + 1..]) else {
            break;
        };
        out.extend_from_slice(&rest[..open]);
        out.push(b' ');
        rest = &rest[open + 1 + close + 1..];
    }

    out.extend_from_slice(rest);
}

/// Copies `input` to `out`, replacing every non-overlapping `needle` with one space.
fn replace_all(input: &[u8], needle: &[u8], out: &mut Vec<u8>) {
    let mut last = 0;

    for at in memmem::find_iter(input, needle) {
        out.extend_from_slice(&input[last..at]);
        out.push(b' ');
        last = at + needle.len();
    }

    out.extend_from_slice(&input[last..]);
}
