#![allow(dead_code, unused_macros)]

use clangview::source::{
    ClangLibrary, DeclarationFromPchMode, DiagnosticsMode, Entry, Source, TUOptionsBuilder,
    TranslationUnit,
};
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const CLASS_H: &str = "tests/fixtures/class.h";
pub const ABSTRACT_CLASS_H: &str = "tests/fixtures/abstract_class.h";
pub const FUNCTIONS_H: &str = "tests/fixtures/functions.h";
pub const INHERITANCE_H: &str = "tests/fixtures/inheritance.h";
pub const COMPILE_COMMANDS: &str = "tests/fixtures/compile_commands.json";

/// Set to make tests fail instead of skip when libclang is missing
pub const REQUIRE_LIBCLANG_VAR: &str = "CLANGVIEW_REQUIRE_LIBCLANG";

/// Skip the current test when libclang cannot be loaded on this machine
macro_rules! require_libclang {
    () => {
        if !$crate::common::libclang_available() {
            $crate::common::skip_or_fail();
            return;
        }
    };
}

pub fn libclang_available() -> bool {
    ClangLibrary::acquire().is_ok()
}

pub fn skip_or_fail() {
    if libclang_required(std::env::var_os(REQUIRE_LIBCLANG_VAR).as_deref()) {
        panic!("libclang not found but {REQUIRE_LIBCLANG_VAR} is set");
    }
    eprintln!("libclang not found, skipping (set {REQUIRE_LIBCLANG_VAR}=1 to fail instead)");
}

/// Any value other than empty or `0` turns on the requirement
pub fn libclang_required(value: Option<&OsStr>) -> bool {
    value.is_some_and(|value| !value.is_empty() && value != "0")
}

pub fn cpp_args() -> Vec<String> {
    vec!["-x".to_string(), "c++".to_string()]
}

/// Parse a single file and return its only translation unit
pub fn parse(file: &str, args: Vec<String>) -> TranslationUnit {
    let source = Source::from_file(
        file.to_string(),
        DeclarationFromPchMode::Exclude,
        DiagnosticsMode::Disabled,
        args,
        TUOptionsBuilder::new(),
    )
    .expect("Failed to create source");
    let mut units = source.into_translation_units();
    assert_eq!(units.len(), 1);
    units.remove(0).expect("Failed to parse translation unit")
}

/// Labels and names of the direct children of `entry`
pub fn outline(entry: &Entry) -> Vec<(&'static str, String)> {
    entry
        .children
        .iter()
        .map(|child| (child.kind.label(), child.name().unwrap_or_default().to_string()))
        .collect()
}

pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}
