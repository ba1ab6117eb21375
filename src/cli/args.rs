//! Command line argument parsing for the lapsus CLI using clap.
//!
//! Spelling of the option names themselves is normalized by
//! [`OptionCorrector`](crate::correction::options::OptionCorrector) before
//! clap ever sees the argument vector; these definitions only describe the
//! canonical surface.

use clap::Parser;
use std::path::PathBuf;

/// Lapsus - a spelling-tolerant source corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "lapsus")]
#[command(about = "Corrects misspelled keywords before handing code downstream")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LapsusArgs {
    /// Enable fuzzy matching for near-miss keywords the table does not know
    #[arg(long)]
    pub fuzzy: bool,

    /// Start an interactive session instead of reading a file
    #[arg(long)]
    pub interactive: bool,

    /// Source file to correct; omit to read interactively
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = LapsusArgs::parse_from(["lapsus"]);
        assert!(!args.fuzzy);
        assert!(!args.interactive);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_parse_flags_and_file() {
        let args = LapsusArgs::parse_from(["lapsus", "--fuzzy", "test.phy"]);
        assert!(args.fuzzy);
        assert!(!args.interactive);
        assert_eq!(args.file, Some(PathBuf::from("test.phy")));

        let args = LapsusArgs::parse_from(["lapsus", "--fuzzy", "--interactive"]);
        assert!(args.fuzzy);
        assert!(args.interactive);
    }
}
