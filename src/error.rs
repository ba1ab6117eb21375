//! Error types for the Lapsus library.
//!
//! The correction engine itself is total: every correction operation
//! accepts any input and returns a plain value, with "no match" as a normal
//! outcome. Only I/O around the engine and executor outcomes travel through
//! [`Result`].

use std::io;

use thiserror::Error;

use crate::exec::ExecError;

/// The main error type for Lapsus operations.
#[derive(Error, Debug)]
pub enum LapsusError {
    /// I/O errors (reading source files, writing corrected output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failures reported by the downstream executor
    #[error("{0}")]
    Exec(#[from] ExecError),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LapsusError.
pub type Result<T> = std::result::Result<T, LapsusError>;

impl LapsusError {
    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LapsusError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LapsusError::other("something went sideways");
        assert_eq!(error.to_string(), "Error: something went sideways");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = LapsusError::from(io_error);

        match error {
            LapsusError::Io(_) => {}
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn test_exec_error_conversion() {
        let exec_error = ExecError::Syntax("unexpected indent".to_string());
        let error = LapsusError::from(exec_error);

        assert_eq!(error.to_string(), "SyntaxError: unexpected indent");
    }
}
