//! Error types for parsing C/C++ sources through libclang
//!
//! This module provides structured error types using thiserror. libclang reports
//! failures as bare integer codes; they are translated here into variants that
//! name the file they concern.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading libclang or parsing a translation unit
#[derive(Error, Debug)]
pub enum ParsingError {
    /// File name contains an interior NUL byte and cannot be passed to C
    #[error("File name '{0}' cannot be converted to a C string")]
    FileNameConversionProblem(String),

    /// A compiler argument contains an interior NUL byte
    #[error("Compiler argument '{argument}' for '{file}' cannot be converted to a C string")]
    ArgumentConversionProblem { file: String, argument: String },

    /// In-memory file contents contain an interior NUL byte
    #[error("Unsaved contents for '{0}' cannot be converted to a C string")]
    UnsavedFileConversionProblem(String),

    #[error("Failed to load libclang: {reason}")]
    LibraryLoad { reason: String },

    #[error("libclang could not create an index")]
    IndexCreationFailure,

    /// `CXError_Failure`
    #[error("libclang failed to parse '{0}'")]
    GenericFailure(String),

    /// `CXError_Crashed`
    #[error("libclang crashed while parsing '{0}'")]
    Crash(String),

    /// `CXError_InvalidArguments`
    #[error("libclang rejected the arguments for '{0}'")]
    InvalidArguments(String),

    /// `CXError_ASTReadError`
    #[error("libclang could not read the AST for '{0}'")]
    AstReadError(String),

    #[error("libclang returned unknown error code {code} for '{file}'")]
    UnknownError { code: i32, file: String },
}

impl ParsingError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON output
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileNameConversionProblem(_) => "FILE_NAME_CONVERSION",
            Self::ArgumentConversionProblem { .. } => "ARGUMENT_CONVERSION",
            Self::UnsavedFileConversionProblem(_) => "UNSAVED_FILE_CONVERSION",
            Self::LibraryLoad { .. } => "LIBRARY_LOAD_ERROR",
            Self::IndexCreationFailure => "INDEX_CREATION_FAILURE",
            Self::GenericFailure(_) => "PARSE_FAILURE",
            Self::Crash(_) => "PARSER_CRASHED",
            Self::InvalidArguments(_) => "INVALID_ARGUMENTS",
            Self::AstReadError(_) => "AST_READ_ERROR",
            Self::UnknownError { .. } => "UNKNOWN_ERROR",
        }
        .to_string()
    }

    /// The file this error concerns, if any
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::FileNameConversionProblem(file)
            | Self::UnsavedFileConversionProblem(file)
            | Self::GenericFailure(file)
            | Self::Crash(file)
            | Self::InvalidArguments(file)
            | Self::AstReadError(file)
            | Self::ArgumentConversionProblem { file, .. }
            | Self::UnknownError { file, .. } => Some(file),
            Self::LibraryLoad { .. } | Self::IndexCreationFailure => None,
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::LibraryLoad { .. } => vec![
                "Install libclang (e.g. the libclang-dev package)",
                "Set LIBCLANG_PATH to the directory containing libclang.so",
            ],
            Self::GenericFailure(_) => vec![
                "Check that the file exists and is readable",
                "Pass '-x c++' when parsing C++ headers",
            ],
            Self::InvalidArguments(_) | Self::ArgumentConversionProblem { .. } => vec![
                "Check the compiler arguments passed after '--'",
                "Remove arguments libclang does not understand",
            ],
            Self::AstReadError(_) => {
                vec!["The precompiled AST may have been built by another clang version"]
            }
            Self::Crash(_) => vec!["Retry with fewer options, or report the input to LLVM"],
            _ => vec![],
        }
    }
}

/// Errors raised while loading a JSON compilation database
#[derive(Error, Debug)]
pub enum CompilationDatabaseError {
    #[error("Failed to read compilation database '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed compilation database '{path}': {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Entry has neither `arguments` nor `command`
    #[error("Compile command for '{file}' has neither 'arguments' nor 'command'")]
    MissingArguments { file: String },

    #[error("Unterminated quote in command for '{file}'")]
    UnterminatedQuote { file: String },
}

impl CompilationDatabaseError {
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "DATABASE_READ_ERROR",
            Self::Malformed { .. } => "DATABASE_MALFORMED",
            Self::MissingArguments { .. } => "DATABASE_MISSING_ARGUMENTS",
            Self::UnterminatedQuote { .. } => "DATABASE_UNTERMINATED_QUOTE",
        }
        .to_string()
    }

    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that compile_commands.json exists",
                "Generate it with CMAKE_EXPORT_COMPILE_COMMANDS=ON or bear",
            ],
            Self::Malformed { .. } => {
                vec!["The database must be a JSON array of compile command objects"]
            }
            Self::MissingArguments { .. } | Self::UnterminatedQuote { .. } => {
                vec!["Regenerate the compilation database with your build system"]
            }
        }
    }
}

/// Result type alias for parse operations
pub type ParsingResult<T> = Result<T, ParsingError>;

/// Result type alias for compilation database operations
pub type DatabaseResult<T> = Result<T, CompilationDatabaseError>;
