//! Adaptive fuzzy matching of near-miss tokens against canonical spellings.

use crate::correction::levenshtein::similarity_ratio;
use crate::correction::table::MisspellingTable;

/// Minimum similarity required for a canonical token of the given length.
///
/// Short tokens saturate the similarity ratio too easily from chance edits
/// ("de" must not become "def"), so they demand a stricter score than long
/// ones.
pub fn adaptive_threshold(canonical_len: usize) -> f64 {
    match canonical_len {
        0..=3 => 0.90,
        4..=6 => 0.80,
        _ => 0.70,
    }
}

/// Scores unrecognized words against every canonical token in a table and
/// accepts the best near-miss, if any clears its length-adaptive threshold.
///
/// A disabled matcher never alters output: it returns `None` without
/// computing any similarity.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    enabled: bool,
}

impl FuzzyMatcher {
    pub fn new(enabled: bool) -> Self {
        FuzzyMatcher { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Find the canonical token `word` is most plausibly a misspelling of.
    ///
    /// Candidates outside a sane length band never match: single characters
    /// would fuzzy-match almost anything, and words longer than twice the
    /// longest canonical token cannot be a plausible misspelling of it.
    /// Among canonical tokens clearing their own threshold the highest
    /// score wins; ties go to the smaller length difference, then to table
    /// order. `None` means the caller keeps the original word.
    pub fn find_match<'a>(&self, word: &str, table: &'a MisspellingTable) -> Option<&'a str> {
        if !self.enabled {
            return None;
        }

        let word_len = word.chars().count();
        if word_len <= 1 || word_len > 2 * table.max_canonical_len() {
            return None;
        }

        let mut best: Option<(&str, f64, usize)> = None;
        for canonical in table.canonical_tokens() {
            let canonical_len = canonical.chars().count();
            let score = similarity_ratio(word, canonical);
            if score < adaptive_threshold(canonical_len) {
                continue;
            }

            let len_diff = word_len.abs_diff(canonical_len);
            let better = match best {
                None => true,
                Some((_, best_score, best_diff)) => {
                    score > best_score || (score == best_score && len_diff < best_diff)
                }
            };
            if better {
                best = Some((canonical, score, len_diff));
            }
        }

        best.map(|(canonical, _, _)| canonical)
    }
}
