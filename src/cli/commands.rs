//! Command implementations for the lapsus CLI.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::args::LapsusArgs;
use crate::correction::corrector::TokenCorrector;
use crate::error::{LapsusError, Result};
use crate::exec::{EchoExecutor, Executor};

/// Execute the CLI: file mode when FILE is given, interactive otherwise.
pub fn execute_command(args: LapsusArgs) -> Result<()> {
    let corrector = TokenCorrector::for_keywords(args.fuzzy);
    let mut executor = EchoExecutor::new(io::stdout());

    match &args.file {
        Some(file) if !args.interactive => run_file(file, &corrector, &mut executor),
        _ => run_interactive(io::stdin().lock(), &corrector, &mut executor),
    }
}

/// Correct a source file and hand the result to the executor.
pub fn run_file(
    path: &Path,
    corrector: &TokenCorrector,
    executor: &mut dyn Executor,
) -> Result<()> {
    let code = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            LapsusError::other(format!("file '{}' not found", path.display()))
        }
        io::ErrorKind::PermissionDenied => {
            LapsusError::other(format!("permission denied reading '{}'", path.display()))
        }
        _ => LapsusError::Io(e),
    })?;

    run_source(&code, corrector, executor)
}

/// Correct one chunk of source and hand it to the executor.
///
/// The "fixed spelling" notice goes to stderr so corrected program text on
/// stdout stays clean for whatever consumes it.
pub fn run_source(
    code: &str,
    corrector: &TokenCorrector,
    executor: &mut dyn Executor,
) -> Result<()> {
    let result = corrector.correct(code);
    if result.changed {
        eprintln!("fixed spelling -> {}", result.text.trim_end());
    }

    executor.execute(&result.text)?;
    Ok(())
}

/// Interactive line loop with multi-line buffering: a line ending in `:`
/// or starting indented continues the statement, a blank line flushes the
/// buffer, and `exit`/`quit` (with or without parentheses) leaves
/// immediately, discarding any partially entered statement.
///
/// Input is read from `input` (stdin in the CLI) so sessions can be
/// scripted.
pub fn run_interactive(
    input: impl BufRead,
    corrector: &TokenCorrector,
    executor: &mut dyn Executor,
) -> Result<()> {
    let mut buffer: Vec<String> = Vec::new();

    print_prompt(false)?;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if matches!(
            trimmed.to_lowercase().as_str(),
            "exit" | "exit()" | "quit" | "quit()"
        ) {
            break;
        }

        if !trimmed.is_empty() {
            buffer.push(line.clone());
            if line.trim_end().ends_with(':')
                || line.starts_with(' ')
                || line.starts_with('\t')
            {
                print_prompt(true)?;
                continue;
            }
        }

        if !buffer.is_empty() {
            let code = buffer.join("\n");
            buffer.clear();
            // Executor failures are reported with their label and the
            // session continues.
            if let Err(e) = run_source(&code, corrector, executor) {
                eprintln!("{e}");
            }
        }
        print_prompt(false)?;
    }

    Ok(())
}

fn print_prompt(continuation: bool) -> Result<()> {
    let mut out = io::stdout();
    if continuation {
        write!(out, "lapsus... ")?;
    } else {
        write!(out, "lapsus>>> ")?;
    }
    out.flush()?;
    Ok(())
}
