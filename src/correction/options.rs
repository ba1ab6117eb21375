//! Spelling correction for CLI long-option names.

use serde::{Deserialize, Serialize};

use crate::correction::corrector::{TokenCorrector, is_word_char};
use crate::correction::table::MisspellingTable;

/// Result of correcting one argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCorrection {
    /// Arguments with option names normalized, order preserved.
    pub args: Vec<String>,
    /// Applied substitutions as (original, canonical) pairs, in argument
    /// order, for the caller to report.
    pub fixes: Vec<(String, String)>,
}

impl OptionCorrection {
    pub fn changed(&self) -> bool {
        !self.fixes.is_empty()
    }
}

/// Corrects misspelled long-option names (`--xxx`) against a small, fixed
/// vocabulary.
///
/// Only the option name is ever touched: values after `=`, short options,
/// and positional arguments pass through unchanged. The corrector never
/// invents, drops, or reorders arguments, and unrecognized options survive
/// verbatim. Fuzzy matching is always available for options, under the
/// same adaptive thresholds as keyword correction.
#[derive(Debug, Clone)]
pub struct OptionCorrector {
    corrector: TokenCorrector,
}

impl OptionCorrector {
    /// Corrector over the built-in `--help` / `--fuzzy` / `--interactive`
    /// vocabulary.
    pub fn new() -> Self {
        Self::with_table(MisspellingTable::cli_options())
    }

    /// Corrector over a caller-supplied option vocabulary.
    pub fn with_table(table: MisspellingTable) -> Self {
        OptionCorrector {
            corrector: TokenCorrector::new(table, true),
        }
    }

    pub fn table(&self) -> &MisspellingTable {
        self.corrector.table()
    }

    /// Normalize option names in `args`, reporting every substitution.
    pub fn correct_options(&self, args: &[String]) -> OptionCorrection {
        let mut corrected = Vec::with_capacity(args.len());
        let mut fixes = Vec::new();

        for arg in args {
            match self.correct_one(arg) {
                Some(fixed) if fixed != *arg => {
                    fixes.push((arg.clone(), fixed.clone()));
                    corrected.push(fixed);
                }
                _ => corrected.push(arg.clone()),
            }
        }

        OptionCorrection {
            args: corrected,
            fixes,
        }
    }

    /// Exact reverse lookup first, then fuzzy matching.
    pub fn find_option_match(&self, name: &str) -> Option<&str> {
        if let Some(canonical) = self.corrector.table().canonical_for(name) {
            return Some(canonical);
        }
        self.corrector.find_fuzzy_match(name)
    }

    /// Normalize a single argument, or `None` when it is not shaped like a
    /// long option or no canonical name matches.
    fn correct_one(&self, arg: &str) -> Option<String> {
        let body = arg.strip_prefix("--")?;
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        if name.is_empty() || !name.chars().all(is_word_char) {
            return None;
        }

        let canonical = self.find_option_match(name)?;
        match value {
            Some(value) => Some(format!("--{canonical}={value}")),
            None => Some(format!("--{canonical}")),
        }
    }
}

impl Default for OptionCorrector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_option_correction() {
        let corrector = OptionCorrector::new();

        let result = corrector.correct_options(&args(&["--halp"]));
        assert_eq!(result.args, ["--help"]);
        assert_eq!(
            result.fixes,
            [("--halp".to_string(), "--help".to_string())]
        );
        assert!(result.changed());
    }

    #[test]
    fn test_known_misspelling_matrices() {
        let corrector = OptionCorrector::new();

        for (misspelled, canonical) in [
            ("--halp", "--help"),
            ("--helap", "--help"),
            ("--hepl", "--help"),
            ("--fuzy", "--fuzzy"),
            ("--fuzz", "--fuzzy"),
            ("--fuzi", "--fuzzy"),
            ("--fzzy", "--fuzzy"),
            ("--interactiv", "--interactive"),
            ("--intractiv", "--interactive"),
            ("--interact", "--interactive"),
        ] {
            let result = corrector.correct_options(&args(&[misspelled]));
            assert_eq!(result.args, [canonical], "for {misspelled}");
        }
    }

    #[test]
    fn test_fuzzy_option_match() {
        let corrector = OptionCorrector::new();

        // Not in the alternates table, close enough for the fuzzy layer.
        assert_eq!(corrector.find_option_match("helpx"), Some("help"));
        assert_eq!(corrector.find_option_match("hellp"), Some("help"));
        assert_eq!(corrector.find_option_match("interactve"), Some("interactive"));
        assert_eq!(corrector.find_option_match("unknown_option_xyz"), None);

        let result = corrector.correct_options(&args(&["--hellp"]));
        assert_eq!(result.args, ["--help"]);
    }

    #[test]
    fn test_correct_option_already_canonical() {
        let corrector = OptionCorrector::new();

        let result = corrector.correct_options(&args(&["--fuzzy", "--interactive"]));
        assert_eq!(result.args, ["--fuzzy", "--interactive"]);
        assert!(result.fixes.is_empty());
        assert!(!result.changed());
    }

    #[test]
    fn test_short_options_and_positionals_pass_through() {
        let corrector = OptionCorrector::new();

        let result = corrector.correct_options(&args(&["-i", "test.py"]));
        assert_eq!(result.args, ["-i", "test.py"]);
        assert!(result.fixes.is_empty());
    }

    #[test]
    fn test_unrecognized_long_options_pass_through() {
        let corrector = OptionCorrector::new();

        let result = corrector.correct_options(&args(&["--unknown", "--valid"]));
        assert_eq!(result.args, ["--unknown", "--valid"]);
        assert!(result.fixes.is_empty());
    }

    #[test]
    fn test_mixed_argument_vector_keeps_order() {
        let corrector = OptionCorrector::new();

        let result =
            corrector.correct_options(&args(&["--valid", "--halp", "file.py", "-x"]));
        assert_eq!(result.args, ["--valid", "--help", "file.py", "-x"]);
        assert_eq!(
            result.fixes,
            [("--halp".to_string(), "--help".to_string())]
        );
    }

    #[test]
    fn test_value_part_is_never_touched() {
        let corrector = OptionCorrector::new();

        let result = corrector.correct_options(&args(&["--halp=fuzy"]));
        assert_eq!(result.args, ["--help=fuzy"]);
        assert_eq!(
            result.fixes,
            [("--halp=fuzy".to_string(), "--help=fuzy".to_string())]
        );
    }

    #[test]
    fn test_bare_double_dash_passes_through() {
        let corrector = OptionCorrector::new();

        let result = corrector.correct_options(&args(&["--", "--halp"]));
        assert_eq!(result.args, ["--", "--help"]);
    }

    #[test]
    fn test_empty_argument_vector() {
        let corrector = OptionCorrector::new();

        let result = corrector.correct_options(&[]);
        assert!(result.args.is_empty());
        assert!(result.fixes.is_empty());
    }
}
