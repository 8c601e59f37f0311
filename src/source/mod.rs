//! Parsing C/C++ sources into owned translation units
//!
//! A [`Source`] owns one libclang index and the results of every translation
//! unit parsed with it. Failures are kept per unit, so one broken entry of a
//! compilation database does not hide the others.

mod compilation_database;
mod index;
mod library;
mod translation_unit;

pub use compilation_database::{CompilationDatabase, CompileCommand, split_command};
pub use index::{DeclarationFromPchMode, DiagnosticsMode, Index};
pub use library::ClangLibrary;
pub use translation_unit::TranslationUnit;
pub use translation_unit::UnsavedFile;
pub use translation_unit::cursor::{
    AccessSpecifierType, CodeSpan, ConstructorType, CursorKind, CursorType, Position, Virtuality,
};
pub use translation_unit::diagnostic::{Diagnostic, DiagnosticSeverity};
pub use translation_unit::entry::{Entry, Walk};
pub use translation_unit::options::{
    TUOptionsBuilder, TranslationUnitFlags, TranslationUnitOption,
};

use crate::error::{ParsingError, ParsingResult};
use tracing::info;

pub struct Source {
    index: Index,
    pub translation_units: Vec<ParsingResult<TranslationUnit>>,
}

impl Source {
    /// Create an empty source with its own index
    pub fn new(
        pch_mode: DeclarationFromPchMode,
        diagnostics_mode: DiagnosticsMode,
    ) -> ParsingResult<Source> {
        Ok(Source {
            index: Index::new(pch_mode, diagnostics_mode)?,
            translation_units: vec![],
        })
    }

    pub fn from_file(
        file_name: String,
        pch_mode: DeclarationFromPchMode,
        diagnostics_mode: DiagnosticsMode,
        command_line_args: Vec<String>,
        options: TUOptionsBuilder,
    ) -> ParsingResult<Source> {
        let mut source = Source::new(pch_mode, diagnostics_mode)?;
        source.parse_file(&file_name, &command_line_args, &options);
        Ok(source)
    }

    /// Parse an in-memory buffer as if it were `file_name`
    pub fn from_unsaved(
        file_name: String,
        contents: String,
        pch_mode: DeclarationFromPchMode,
        diagnostics_mode: DiagnosticsMode,
        command_line_args: Vec<String>,
        options: TUOptionsBuilder,
    ) -> ParsingResult<Source> {
        let mut source = Source::new(pch_mode, diagnostics_mode)?;
        let unsaved = [UnsavedFile::new(file_name.clone(), contents)];
        let result = TranslationUnit::parse(
            &source.index,
            &file_name,
            &command_line_args,
            &unsaved,
            &options,
        );
        source.translation_units.push(result);
        Ok(source)
    }

    pub fn from_compilation_database(
        pch_mode: DeclarationFromPchMode,
        diagnostics_mode: DiagnosticsMode,
        compilation_database: CompilationDatabase,
        options: TUOptionsBuilder,
    ) -> ParsingResult<Source> {
        let mut source = Source::new(pch_mode, diagnostics_mode)?;
        for command in &compilation_database.commands {
            source.parse_file(&command.file_name(), &command.clang_args(), &options);
        }
        let failed = source.translation_units.iter().filter(|r| r.is_err()).count();
        info!(
            "Parsed {} translation unit(s) from compilation database, {failed} failed",
            source.translation_units.len()
        );
        Ok(source)
    }

    /// Parse another file with this source's index and append the result
    pub fn parse_file(
        &mut self,
        file_name: &str,
        command_line_args: &[String],
        options: &TUOptionsBuilder,
    ) -> &ParsingResult<TranslationUnit> {
        let result =
            TranslationUnit::parse(&self.index, file_name, command_line_args, &[], options);
        self.translation_units.push(result);
        &self.translation_units[self.translation_units.len() - 1]
    }

    pub fn translation_units(&self) -> &[ParsingResult<TranslationUnit>] {
        &self.translation_units
    }

    pub fn into_translation_units(self) -> Vec<ParsingResult<TranslationUnit>> {
        self.translation_units
    }

    /// Split results into parsed units and errors, preserving order
    pub fn partition(self) -> (Vec<TranslationUnit>, Vec<ParsingError>) {
        let mut parsed = Vec::new();
        let mut failed = Vec::new();
        for result in self.translation_units {
            match result {
                Ok(unit) => parsed.push(unit),
                Err(e) => failed.push(e),
            }
        }
        (parsed, failed)
    }
}
