mod json_compile_commands;

pub use json_compile_commands::split_command;

use crate::error::DatabaseResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// A single compile command, with paths resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    pub directory: PathBuf,
    pub file: PathBuf,
    /// Full command line, compiler first
    pub arguments: Vec<String>,
    pub output: Option<String>,
}

impl CompileCommand {
    /// Arguments to hand to libclang
    ///
    /// Drops the compiler itself, the source file, `-c` and `-o <out>`, and
    /// pins the working directory so relative include paths still resolve.
    pub fn clang_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.arguments.len() + 1);
        let mut iter = self.arguments.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-c" => {}
                "-o" => {
                    iter.next();
                }
                other if other.starts_with("-o") => {}
                other if self.is_source_argument(other) => {}
                _ => args.push(arg.clone()),
            }
        }
        if let Ok(directory) = self.directory.canonicalize() {
            args.push(format!("-working-directory={}", directory.display()));
        }
        args
    }

    /// Source file path as passed to libclang
    pub fn file_name(&self) -> String {
        match self.directory.canonicalize() {
            Ok(directory) => directory
                .join(self.file.strip_prefix(&self.directory).unwrap_or(&self.file))
                .display()
                .to_string(),
            Err(_) => self.file.display().to_string(),
        }
    }

    fn is_source_argument(&self, arg: &str) -> bool {
        let path = Path::new(arg);
        path == self.file || self.directory.join(path) == self.file
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompilationDatabase {
    pub commands: Vec<CompileCommand>,
}

impl CompilationDatabase {
    /// Load a `compile_commands.json` file
    ///
    /// Relative `directory` entries are resolved against the database's own
    /// directory.
    pub fn from_file(path: &Path) -> DatabaseResult<CompilationDatabase> {
        let commands = json_compile_commands::from_file(path)?;
        info!(
            "Loaded {} compile command(s) from {}",
            commands.len(),
            path.display()
        );
        Ok(CompilationDatabase { commands })
    }

    pub fn from_json_str(json: &str, base_dir: &Path) -> DatabaseResult<CompilationDatabase> {
        Ok(CompilationDatabase {
            commands: json_compile_commands::from_str(json, base_dir)?,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
