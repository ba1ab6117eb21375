//! Lapsus CLI binary.

use clap::Parser;
use lapsus::cli::{args::*, commands::*};
use lapsus::correction::options::OptionCorrector;
use std::process;

fn main() {
    // Normalize misspelled long options before clap ever sees them.
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let correction = OptionCorrector::new().correct_options(&raw);
    for (original, fixed) in &correction.fixes {
        eprintln!("fixed option: {original} -> {fixed}");
    }

    let argv = std::iter::once("lapsus".to_string()).chain(correction.args);
    let args = LapsusArgs::parse_from(argv);

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
