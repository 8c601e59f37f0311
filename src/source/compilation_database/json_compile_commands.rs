//! Reader for the JSON compilation database format (`compile_commands.json`)

use super::CompileCommand;
use crate::error::{CompilationDatabaseError, DatabaseResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One raw entry as written by CMake, Bear, etc.
#[derive(Deserialize, PartialEq, Debug)]
struct RawCommand {
    #[serde(default)]
    directory: String,
    file: String,
    #[serde(default)]
    arguments: Option<Vec<String>>,
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    output: Option<String>,
}

pub fn from_file(path: &Path) -> DatabaseResult<Vec<CompileCommand>> {
    let json = std::fs::read_to_string(path).map_err(|source| {
        CompilationDatabaseError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    from_str(&json, base_dir).map_err(|e| match e {
        CompilationDatabaseError::Malformed { source, .. } => CompilationDatabaseError::Malformed {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

pub fn from_str(json: &str, base_dir: &Path) -> DatabaseResult<Vec<CompileCommand>> {
    let raw: Vec<RawCommand> =
        serde_json::from_str(json).map_err(|source| CompilationDatabaseError::Malformed {
            path: PathBuf::new(),
            source,
        })?;
    raw.into_iter()
        .map(|entry| into_command(entry, base_dir))
        .collect()
}

fn into_command(entry: RawCommand, base_dir: &Path) -> DatabaseResult<CompileCommand> {
    let arguments = match (entry.arguments, entry.command) {
        (Some(arguments), _) => arguments,
        (None, Some(command)) => {
            split_command(&command).ok_or_else(|| CompilationDatabaseError::UnterminatedQuote {
                file: entry.file.clone(),
            })?
        }
        (None, None) => {
            return Err(CompilationDatabaseError::MissingArguments { file: entry.file });
        }
    };
    let directory = if entry.directory.is_empty() {
        base_dir.to_path_buf()
    } else {
        base_dir.join(&entry.directory)
    };
    Ok(CompileCommand {
        file: directory.join(&entry.file),
        directory,
        arguments,
        output: entry.output,
    })
}

/// Split a shell command line into words
///
/// Handles single quotes, double quotes and backslash escapes. Returns `None`
/// when a quote is left open.
pub fn split_command(command: &str) -> Option<Vec<String>> {
    #[derive(PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                } else {
                    current.push(c);
                }
            }
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\' | '$' | '`')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => return None,
                },
                _ => current.push(c),
            },
            Quote::None => match c {
                '\'' => {
                    quote = Quote::Single;
                    in_word = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_word = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                        in_word = true;
                    }
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote != Quote::None {
        return None;
    }
    if in_word {
        words.push(current);
    }
    Some(words)
}
