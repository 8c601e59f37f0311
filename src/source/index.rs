use crate::error::{ParsingError, ParsingResult};
use crate::source::library::ClangLibrary;
use clang_sys::{CXIndex, clang_createIndex, clang_disposeIndex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Whether declarations from precompiled headers are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationFromPchMode {
    Include = 0,
    Exclude = 1,
}

/// Whether libclang prints diagnostics to stderr while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticsMode {
    Disabled = 0,
    Enabled = 1,
}

impl DeclarationFromPchMode {
    pub fn from_exclude_flag(exclude: bool) -> Self {
        if exclude {
            Self::Exclude
        } else {
            Self::Include
        }
    }
}

impl DiagnosticsMode {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Owned `CXIndex`
///
/// Field order matters: the index is disposed in `drop` before the library
/// guard is released.
pub struct Index {
    raw: CXIndex,
    _library: ClangLibrary,
}

impl Index {
    pub fn new(
        pch_mode: DeclarationFromPchMode,
        diagnostics_mode: DiagnosticsMode,
    ) -> ParsingResult<Index> {
        let library = ClangLibrary::acquire()?;
        let raw = unsafe { clang_createIndex(pch_mode as i32, diagnostics_mode as i32) };
        if raw.is_null() {
            return Err(ParsingError::IndexCreationFailure);
        }
        debug!("Created index ({pch_mode:?}, diagnostics {diagnostics_mode:?})");
        Ok(Index {
            raw,
            _library: library,
        })
    }

    pub(crate) fn raw(&self) -> CXIndex {
        self.raw
    }
}

impl Drop for Index {
    fn drop(&mut self) {
        unsafe {
            clang_disposeIndex(self.raw);
        }
    }
}
