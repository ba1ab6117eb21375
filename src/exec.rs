//! Executor collaborator contract.
//!
//! The corrector hands corrected text to an [`Executor`] and does not run
//! any language itself. Failures come back through [`ExecError`], one
//! variant per kind, so a caller can show the user a distinguishing label
//! and tell a genuine program defect from a correction artifact.

use std::io::Write;

use thiserror::Error;

/// Failure taxonomy an executor reports back for corrected text.
///
/// Every kind is enumerated explicitly; anything outside the known kinds
/// travels through [`ExecError::Unexpected`] with the underlying kind name
/// and message preserved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The corrected text still does not parse
    #[error("SyntaxError: {0}")]
    Syntax(String),

    /// A name could not be resolved at execution time
    #[error("NameError: {0}")]
    Name(String),

    /// An operation was applied to a value of the wrong type
    #[error("TypeError: {0}")]
    Type(String),

    /// A value was of the right type but unusable
    #[error("ValueError: {0}")]
    Value(String),

    /// A module or import target could not be resolved
    #[error("ImportError: {0}")]
    Import(String),

    /// The user interrupted execution
    #[error("Interrupted: {0}")]
    Interrupted(String),

    /// Anything the taxonomy does not name, with the underlying kind kept
    #[error("UnexpectedError ({kind}): {message}")]
    Unexpected { kind: String, message: String },
}

impl ExecError {
    /// Distinguishing label for this kind of failure.
    pub fn label(&self) -> &'static str {
        match self {
            ExecError::Syntax(_) => "SyntaxError",
            ExecError::Name(_) => "NameError",
            ExecError::Type(_) => "TypeError",
            ExecError::Value(_) => "ValueError",
            ExecError::Import(_) => "ImportError",
            ExecError::Interrupted(_) => "Interrupted",
            ExecError::Unexpected { .. } => "UnexpectedError",
        }
    }
}

/// Anything that can run corrected source text.
///
/// Implementations are expected to classify their failures into the
/// [`ExecError`] taxonomy rather than flattening everything into one bucket.
pub trait Executor {
    /// Execute one chunk of corrected source.
    fn execute(&mut self, code: &str) -> Result<(), ExecError>;
}

/// Executor that forwards corrected text to a writer, unexecuted.
///
/// This is the crate's own end of the seam: the CLI points it at stdout so
/// a real interpreter downstream receives clean text. Tests point it at a
/// buffer.
#[derive(Debug)]
pub struct EchoExecutor<W: Write> {
    sink: W,
}

impl<W: Write> EchoExecutor<W> {
    pub fn new(sink: W) -> Self {
        EchoExecutor { sink }
    }

    /// Consume the executor and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Executor for EchoExecutor<W> {
    fn execute(&mut self, code: &str) -> Result<(), ExecError> {
        let write = |sink: &mut W| {
            sink.write_all(code.as_bytes())?;
            if !code.ends_with('\n') {
                writeln!(sink)?;
            }
            sink.flush()
        };

        write(&mut self.sink).map_err(|e| ExecError::Unexpected {
            kind: "io".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_labels() {
        assert_eq!(ExecError::Syntax(String::new()).label(), "SyntaxError");
        assert_eq!(ExecError::Name(String::new()).label(), "NameError");
        assert_eq!(ExecError::Type(String::new()).label(), "TypeError");
        assert_eq!(ExecError::Value(String::new()).label(), "ValueError");
        assert_eq!(ExecError::Import(String::new()).label(), "ImportError");
        assert_eq!(ExecError::Interrupted(String::new()).label(), "Interrupted");

        let unexpected = ExecError::Unexpected {
            kind: "OSError".to_string(),
            message: "disk on fire".to_string(),
        };
        assert_eq!(unexpected.label(), "UnexpectedError");
    }

    #[test]
    fn test_error_display_carries_label() {
        let error = ExecError::Name("name 'pritn' is not defined".to_string());
        assert_eq!(
            error.to_string(),
            "NameError: name 'pritn' is not defined"
        );

        let unexpected = ExecError::Unexpected {
            kind: "OSError".to_string(),
            message: "disk on fire".to_string(),
        };
        assert_eq!(
            unexpected.to_string(),
            "UnexpectedError (OSError): disk on fire"
        );
    }

    #[test]
    fn test_echo_executor_forwards_text() {
        let mut executor = EchoExecutor::new(Vec::new());
        executor.execute("print('x')").unwrap();
        executor.execute("print('y')\n").unwrap();

        let written = String::from_utf8(executor.into_inner()).unwrap();
        assert_eq!(written, "print('x')\nprint('y')\n");
    }
}
