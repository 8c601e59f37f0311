use super::cursor::{Position, into_owned_string};
use clang_sys::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticSeverity {
    Ignored,
    Note,
    Warning,
    Error,
    Fatal,
}

impl From<i32> for DiagnosticSeverity {
    fn from(severity: i32) -> Self {
        match severity {
            clang_sys::CXDiagnostic_Note => DiagnosticSeverity::Note,
            clang_sys::CXDiagnostic_Warning => DiagnosticSeverity::Warning,
            clang_sys::CXDiagnostic_Error => DiagnosticSeverity::Error,
            clang_sys::CXDiagnostic_Fatal => DiagnosticSeverity::Fatal,
            _ => DiagnosticSeverity::Ignored,
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticSeverity::Ignored => "ignored",
            DiagnosticSeverity::Note => "note",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Fatal => "fatal error",
        };
        f.write_str(label)
    }
}

/// A compiler diagnostic reported while parsing a translation unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position: Option<Position>,
}

impl Diagnostic {
    pub(crate) fn collect(translation_unit: CXTranslationUnit) -> Vec<Diagnostic> {
        let count = unsafe { clang_getNumDiagnostics(translation_unit) };
        (0..count)
            .filter_map(|i| {
                let raw = unsafe { clang_getDiagnostic(translation_unit, i) };
                if raw.is_null() {
                    return None;
                }
                let diagnostic = unsafe {
                    let position = Position::from_location(clang_getDiagnosticLocation(raw));
                    Diagnostic {
                        severity: clang_getDiagnosticSeverity(raw).into(),
                        message: into_owned_string(clang_getDiagnosticSpelling(raw)),
                        position: (!position.file_name.is_empty()).then_some(position),
                    }
                };
                unsafe { clang_disposeDiagnostic(raw) };
                Some(diagnostic)
            })
            .collect()
    }

    pub fn is_error(&self) -> bool {
        self.severity >= DiagnosticSeverity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{position}: {}: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
