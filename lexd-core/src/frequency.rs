//! Type counts for a token sequence.

use rustc_hash::FxHashMap;

/// Distinct tokens of a sequence, in order of first occurrence, with the
/// number of times each occurs.
#[derive(Debug, Clone)]
pub struct FrequencyTable<'a> {
    entries: Vec<(&'a str, usize)>,
    total: usize,
}

impl<'a> FrequencyTable<'a> {
    /// Counts every token in `tokens`.
    pub fn new<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        let mut slots: FxHashMap<&'a str, usize> = FxHashMap::default();
        let mut entries: Vec<(&'a str, usize)> = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            match slots.get(token) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    slots.insert(token, entries.len());
                    entries.push((token, 1));
                }
            }
        }

        Self {
            entries,
            total: tokens.len(),
        }
    }

    /// Number of tokens counted.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn type_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterates `(token, occurrences)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.entries.iter().copied()
    }
}
