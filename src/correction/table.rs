//! Misspelling registry mapping canonical tokens to alternate spellings.

use std::collections::HashMap;

/// Alternate spellings accepted for one canonical token.
///
/// The canonical spelling is always present. When the caller did not list
/// it, it is force-inserted in first position so future longest-match or
/// priority policies have a stable anchor, even though lookup today is
/// plain membership.
#[derive(Debug, Clone)]
pub struct MisspellingEntry {
    canonical: String,
    alternates: Vec<String>,
}

impl MisspellingEntry {
    fn new(canonical: &str, alternates: Vec<String>) -> Self {
        let mut list: Vec<String> = Vec::with_capacity(alternates.len() + 1);
        if !alternates.iter().any(|a| a == canonical) {
            list.push(canonical.to_string());
        }
        for alternate in alternates {
            if !list.contains(&alternate) {
                list.push(alternate);
            }
        }

        MisspellingEntry {
            canonical: canonical.to_string(),
            alternates: list,
        }
    }

    /// The single correct spelling this entry belongs to.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// All accepted spellings, canonical included, without duplicates.
    pub fn alternates(&self) -> &[String] {
        &self.alternates
    }
}

/// Insertion-ordered mapping from canonical token to its misspellings.
///
/// Iteration order is insertion order, which makes the cumulative exact
/// rewrite deterministic. The table is owned by a corrector instance,
/// seeded at construction, and mutated only through [`register`] and
/// [`add_alternate`]. It is not designed for concurrent writers.
///
/// [`register`]: MisspellingTable::register
/// [`add_alternate`]: MisspellingTable::add_alternate
#[derive(Debug, Clone, Default)]
pub struct MisspellingTable {
    entries: Vec<MisspellingEntry>,
    index: HashMap<String, usize>,
}

impl MisspellingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        MisspellingTable {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create or overwrite the entry for `canonical`.
    ///
    /// With `None` the entry becomes just the canonical spelling itself.
    /// An existing entry keeps its position in the iteration order.
    pub fn register(&mut self, canonical: &str, alternates: Option<Vec<String>>) {
        let alternates = alternates.unwrap_or_else(|| vec![canonical.to_string()]);
        let entry = MisspellingEntry::new(canonical, alternates);

        match self.index.get(canonical) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(canonical.to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Append `alternate` to an existing canonical token's entry.
    ///
    /// Returns whether the canonical token was known. Adding an alternate
    /// that is already present is a no-op, so the call is idempotent.
    pub fn add_alternate(&mut self, canonical: &str, alternate: &str) -> bool {
        match self.index.get(canonical) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                if !entry.alternates.iter().any(|a| a == alternate) {
                    entry.alternates.push(alternate.to_string());
                }
                true
            }
            None => false,
        }
    }

    /// All accepted spellings for `canonical`; empty if unknown.
    pub fn lookup(&self, canonical: &str) -> &[String] {
        self.index
            .get(canonical)
            .map(|&i| self.entries[i].alternates.as_slice())
            .unwrap_or(&[])
    }

    /// Reverse lookup: the canonical token `alternate` is a spelling of.
    pub fn canonical_for(&self, alternate: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.alternates.iter().any(|a| a == alternate))
            .map(|entry| entry.canonical())
    }

    /// Whether `word` is one of the canonical spellings.
    pub fn is_canonical(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &MisspellingEntry> {
        self.entries.iter()
    }

    /// Canonical tokens in insertion order.
    pub fn canonical_tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.canonical())
    }

    /// Character length of the longest canonical token, 0 when empty.
    pub fn max_canonical_len(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.canonical.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Number of canonical tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_seed(seed: &[(&str, &[&str])]) -> Self {
        let mut table = MisspellingTable::new();
        for (canonical, alternates) in seed {
            let alternates = alternates.iter().map(|s| s.to_string()).collect();
            table.register(canonical, Some(alternates));
        }
        table
    }

    /// Built-in keyword vocabulary: definition, branching, looping,
    /// membership, exception handling, literals, logical operators, and
    /// I/O, each with its commonly observed misspellings.
    pub fn python_keywords() -> Self {
        let seed: &[(&str, &[&str])] = &[
            ("def", &["def", "deff", "define", "defin"]),
            ("if", &["if", "iff", "iif"]),
            ("elif", &["elif", "elsif", "elseif", "else_if"]),
            ("else", &["else", "els", "elze"]),
            ("for", &["for", "fore", "four", "fr"]),
            ("while", &["while", "wile", "whyle", "whil"]),
            ("in", &["in", "inn", "iin"]),
            ("return", &["return", "retrun", "retrn", "ret"]),
            ("import", &["import", "imprt", "imort", "importt"]),
            ("from", &["from", "frm", "fom"]),
            ("as", &["as", "az", "ass"]),
            ("class", &["class", "clas", "clss", "klass"]),
            ("try", &["try", "tri", "tyr"]),
            ("except", &["except", "exept", "excpt", "catch"]),
            ("finally", &["finally", "finaly", "finale"]),
            ("with", &["with", "wth", "wit"]),
            ("and", &["and", "andd", "adn"]),
            ("or", &["or", "orr"]),
            ("not", &["not", "nott", "no"]),
            ("is", &["is", "iz", "iss"]),
            ("True", &["True", "true", "TRUE", "tru"]),
            ("False", &["False", "false", "FALSE", "fals"]),
            ("None", &["None", "none", "NONE", "null", "nil"]),
            ("print", &["print", "prin", "prnt", "pritn"]),
        ];

        Self::from_seed(seed)
    }

    /// Built-in long-option vocabulary for the CLI shell.
    pub fn cli_options() -> Self {
        let seed: &[(&str, &[&str])] = &[
            ("help", &["help", "halp", "helap", "hepl"]),
            ("fuzzy", &["fuzzy", "fuzy", "fuzz", "fuzi", "fzzy"]),
            ("interactive", &["interactive", "interactiv", "intractiv", "interact"]),
        ];

        Self::from_seed(seed)
    }
}
