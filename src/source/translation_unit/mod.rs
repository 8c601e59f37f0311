pub mod cursor;
pub mod diagnostic;
pub mod entry;
pub mod options;

use crate::error::{ParsingError, ParsingResult};
use crate::source::index::Index;
use clang_sys::*;
use cursor::{CodeSpan, CursorKind};
use diagnostic::Diagnostic;
use entry::Entry;
use options::TUOptionsBuilder;
use serde::{Deserialize, Serialize};
use std::ffi::{CString, c_char, c_ulong, c_void};
use std::ptr;
use tracing::{debug, warn};

/// In-memory contents that replace (or stand in for) a file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsavedFile {
    pub file_name: String,
    pub contents: String,
}

impl UnsavedFile {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }
}

/// A parsed translation unit
///
/// Holds only owned data; the libclang handle is released once the AST and
/// diagnostics have been copied out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationUnit {
    file_name: String,
    ast: Entry,
    diagnostics: Vec<Diagnostic>,
}

/// Owns a `CXTranslationUnit` for the duration of a parse
struct TranslationUnitHandle {
    raw: CXTranslationUnit,
}

impl Drop for TranslationUnitHandle {
    fn drop(&mut self) {
        unsafe {
            clang_disposeTranslationUnit(self.raw);
        }
    }
}

impl TranslationUnit {
    pub fn parse(
        index: &Index,
        file_name: &str,
        command_line_args: &[String],
        unsaved_files: &[UnsavedFile],
        options: &TUOptionsBuilder,
    ) -> ParsingResult<TranslationUnit> {
        let c_file_name = CString::new(file_name)
            .map_err(|_| ParsingError::FileNameConversionProblem(file_name.to_string()))?;
        let c_args = command_line_args
            .iter()
            .map(|arg| {
                CString::new(arg.as_str()).map_err(|_| ParsingError::ArgumentConversionProblem {
                    file: file_name.to_string(),
                    argument: arg.clone(),
                })
            })
            .collect::<ParsingResult<Vec<_>>>()?;
        let c_unsaved = unsaved_files
            .iter()
            .map(|unsaved| {
                let name = CString::new(unsaved.file_name.as_str()).map_err(|_| {
                    ParsingError::FileNameConversionProblem(unsaved.file_name.clone())
                })?;
                let contents = CString::new(unsaved.contents.as_str()).map_err(|_| {
                    ParsingError::UnsavedFileConversionProblem(unsaved.file_name.clone())
                })?;
                Ok((name, contents))
            })
            .collect::<ParsingResult<Vec<_>>>()?;

        debug!(
            "Parsing '{file_name}' with {} argument(s) and {} unsaved file(s)",
            c_args.len(),
            c_unsaved.len()
        );

        let handle = parse_handle(index, &c_file_name, &c_args, &c_unsaved, options)?;
        let diagnostics = Diagnostic::collect(handle.raw);
        let ast = build_ast(unsafe { clang_getTranslationUnitCursor(handle.raw) });
        debug!(
            "Parsed '{file_name}': {} node(s), {} diagnostic(s)",
            ast.count(),
            diagnostics.len()
        );

        Ok(TranslationUnit {
            file_name: file_name.to_string(),
            ast,
            diagnostics,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn ast(&self) -> &Entry {
        &self.ast
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True if any diagnostic is an error or fatal
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

fn parse_handle(
    index: &Index,
    file_name: &CString,
    args: &[CString],
    unsaved: &[(CString, CString)],
    options: &TUOptionsBuilder,
) -> ParsingResult<TranslationUnitHandle> {
    let arg_ptrs: Vec<*const c_char> = args.iter().map(|arg| arg.as_ptr()).collect();
    let mut unsaved_files: Vec<CXUnsavedFile> = unsaved
        .iter()
        .map(|(name, contents)| CXUnsavedFile {
            Filename: name.as_ptr(),
            Contents: contents.as_ptr(),
            Length: contents.as_bytes().len() as c_ulong,
        })
        .collect();
    let mut raw: CXTranslationUnit = ptr::null_mut();

    let code = unsafe {
        clang_parseTranslationUnit2(
            index.raw(),
            file_name.as_ptr(),
            arg_ptrs.as_ptr(),
            arg_ptrs.len() as i32,
            if unsaved_files.is_empty() {
                ptr::null_mut()
            } else {
                unsaved_files.as_mut_ptr()
            },
            unsaved_files.len() as u32,
            options.build(),
            &mut raw,
        )
    };

    let file = file_name.to_string_lossy().into_owned();
    let result = match code {
        clang_sys::CXError_Success if !raw.is_null() => return Ok(TranslationUnitHandle { raw }),
        clang_sys::CXError_Success | clang_sys::CXError_Failure => {
            ParsingError::GenericFailure(file)
        }
        clang_sys::CXError_Crashed => ParsingError::Crash(file),
        clang_sys::CXError_InvalidArguments => ParsingError::InvalidArguments(file),
        clang_sys::CXError_ASTReadError => ParsingError::AstReadError(file),
        code => ParsingError::UnknownError { code, file },
    };
    warn!("libclang error code {code}: {result}");
    Err(result)
}

fn build_ast(root: CXCursor) -> Entry {
    let mut ast = Entry::root(vec![]);
    unsafe {
        clang_visitChildren(root, visit_cursor, &mut ast as *mut Entry as *mut c_void);
    }
    ast
}

extern "C" fn visit_cursor(
    current: CXCursor,
    _parent: CXCursor,
    client_data: CXClientData,
) -> CXChildVisitResult {
    unsafe {
        if clang_Location_isInSystemHeader(clang_getCursorLocation(current)) != 0 {
            return CXChildVisit_Continue;
        }
        let parent = &mut *(client_data as *mut Entry);
        let mut node = Entry::new(
            CursorKind::from_cursor(current),
            Some(CodeSpan::from_cursor(current)),
        );
        clang_visitChildren(current, visit_cursor, &mut node as *mut Entry as *mut c_void);
        parent.children.push(node);
    }
    CXChildVisit_Continue
}
