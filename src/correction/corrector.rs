//! Whole-word token corrector orchestrating exact and fuzzy rewriting.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::correction::fuzzy::FuzzyMatcher;
use crate::correction::table::MisspellingTable;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Result of one correction pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Corrected text, identical to the input when nothing matched.
    pub text: String,
    /// Whether any substitution was applied.
    pub changed: bool,
}

/// Whole-word token corrector over a configurable vocabulary.
///
/// Correction is purely lexical: substitution is global and unconditional
/// within the text, with no awareness of string literals, comments, or
/// scoping. A token that happens to be a recognized alternate is replaced
/// everywhere, including inside quoted text.
///
/// The crate instantiates this twice: over the keyword table for source
/// text, and over the option table for argv (see
/// [`OptionCorrector`](crate::correction::options::OptionCorrector)).
#[derive(Debug, Clone)]
pub struct TokenCorrector {
    table: MisspellingTable,
    fuzzy: FuzzyMatcher,
}

impl TokenCorrector {
    /// Create a corrector owning the given vocabulary.
    pub fn new(table: MisspellingTable, fuzzy_enabled: bool) -> Self {
        TokenCorrector {
            table,
            fuzzy: FuzzyMatcher::new(fuzzy_enabled),
        }
    }

    /// Corrector seeded with the built-in keyword vocabulary.
    pub fn for_keywords(fuzzy_enabled: bool) -> Self {
        Self::new(MisspellingTable::python_keywords(), fuzzy_enabled)
    }

    pub fn table(&self) -> &MisspellingTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut MisspellingTable {
        &mut self.table
    }

    pub fn fuzzy_enabled(&self) -> bool {
        self.fuzzy.is_enabled()
    }

    pub fn set_fuzzy_enabled(&mut self, enabled: bool) {
        self.fuzzy.set_enabled(enabled);
    }

    /// Correct `text`: the exact whole-word rewrite runs first, then (when
    /// fuzzy matching is enabled) a fuzzy pass over the tokens the table
    /// does not know. The `changed` flag tells the caller whether to
    /// surface a "fixed spelling" notice.
    pub fn correct(&self, text: &str) -> CorrectionResult {
        let mut fixed = self.exact_rewrite(text);
        if self.fuzzy.is_enabled() {
            fixed = self.fuzzy_rewrite(&fixed);
        }

        let changed = fixed != text;
        CorrectionResult {
            text: fixed,
            changed,
        }
    }

    /// Fuzzy-match a single isolated word against the vocabulary.
    ///
    /// `None` unless fuzzy matching is enabled and some canonical token
    /// clears its adaptive threshold.
    pub fn find_fuzzy_match(&self, word: &str) -> Option<&str> {
        self.fuzzy.find_match(word, &self.table)
    }

    /// One cumulative whole-word substitution pass per alternate, in table
    /// order over the same mutable buffer. Earlier substitutions change
    /// the text later alternates are tested against; this must stay
    /// sequential, never a union of patterns in one pass.
    fn exact_rewrite(&self, text: &str) -> String {
        let mut fixed = text.to_string();
        for entry in self.table.entries() {
            for alternate in entry.alternates() {
                if alternate == entry.canonical() {
                    continue;
                }
                fixed = replace_whole_word(&fixed, alternate, entry.canonical());
            }
        }
        fixed
    }

    /// Replace standalone word tokens the fuzzy matcher recognizes;
    /// canonical spellings and everything unmatched stay verbatim.
    fn fuzzy_rewrite(&self, text: &str) -> String {
        WORD_RE
            .replace_all(text, |caps: &regex::Captures| {
                let word = &caps[0];
                if self.table.is_canonical(word) {
                    return word.to_string();
                }
                match self.fuzzy.find_match(word, &self.table) {
                    Some(canonical) => canonical.to_string(),
                    None => word.to_string(),
                }
            })
            .into_owned()
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace every whole-word occurrence of `from` with `to`.
///
/// A word boundary is a transition between a word character and a non-word
/// character or the string edge, the same rule the token scan regex uses.
/// Case-sensitive, byte-exact matching.
fn replace_whole_word(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(found) = text[pos..].find(from) {
        let start = pos + found;
        let end = start + from.len();

        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        let bounded =
            before.is_none_or(|c| !is_word_char(c)) && after.is_none_or(|c| !is_word_char(c));

        if bounded {
            out.push_str(&text[pos..start]);
            out.push_str(to);
            pos = end;
        } else {
            // Not a whole word; step past the first character of this
            // occurrence so overlapping later matches are still found.
            let step = text[start..].chars().next().map_or(1, char::len_utf8);
            out.push_str(&text[pos..start + step]);
            pos = start + step;
        }
    }

    out.push_str(&text[pos..]);
    out
}
