/// The main library module for clangview
pub mod config;
pub mod error;
pub mod io;
pub mod source;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{CompilationDatabaseError, DatabaseResult, ParsingError, ParsingResult};
pub use source::{
    CompilationDatabase, CompileCommand, CursorKind, Entry, Source, TUOptionsBuilder,
    TranslationUnit,
};
