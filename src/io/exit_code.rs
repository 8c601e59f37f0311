//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - every requested translation unit was rendered
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::{CompilationDatabaseError, ParsingError};

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Input file or database not found (code 3)
    NotFound = 3,

    /// libclang could not produce a translation unit (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl ExitCode {
    /// Map a parsing failure to an exit code.
    ///
    /// Library-level problems are general errors since no file was ever
    /// looked at; everything libclang rejects is a parse error.
    pub fn from_parsing_error(error: &ParsingError) -> Self {
        match error {
            ParsingError::LibraryLoad { .. } | ParsingError::IndexCreationFailure => {
                ExitCode::GeneralError
            }
            _ => ExitCode::ParseError,
        }
    }

    pub fn from_database_error(error: &CompilationDatabaseError) -> Self {
        match error {
            CompilationDatabaseError::FileRead { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                ExitCode::NotFound
            }
            CompilationDatabaseError::FileRead { .. } => ExitCode::IoError,
            CompilationDatabaseError::Malformed { .. }
            | CompilationDatabaseError::MissingArguments { .. }
            | CompilationDatabaseError::UnterminatedQuote { .. } => ExitCode::ParseError,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }

    /// Get a human-readable description of the exit code.
    pub fn description(&self) -> &str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::GeneralError => "General error",
            ExitCode::NotFound => "Not found",
            ExitCode::ParseError => "Parse error",
            ExitCode::IoError => "I/O error",
            ExitCode::ConfigError => "Configuration error",
        }
    }
}
