//! JSON Lines output for AST visualization
//!
//! Streams extracted AST nodes one JSON object per line so large translation
//! units can be consumed by external tools without buffering the whole tree.

use crate::io::ExitCode;
use crate::source::{Entry, Position};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing rendered output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error(
        "Failed to create output file: {path}\n{source}\nSuggestion: Check write permissions for the directory"
    )]
    OutputCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Failed to write output\n{source}\nSuggestion: Check disk space and output file permissions"
    )]
    OutputWriteError {
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Failed to serialize node to JSON\n{source}\nSuggestion: This is an internal error, please report it"
    )]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },
}

impl OutputError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            OutputError::OutputCreateError { .. } | OutputError::OutputWriteError { .. } => {
                ExitCode::IoError
            }
            OutputError::SerializationError { .. } => ExitCode::GeneralError,
        }
    }
}

/// Open `path` for writing, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, OutputError> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| OutputError::OutputCreateError {
                path: path.display().to_string(),
                source: e,
            })?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Information about a single AST node
#[derive(Debug, Serialize, PartialEq)]
pub struct NodeInfo {
    /// Cursor kind label (e.g., "Class", "Method")
    pub kind: String,
    /// Spelling of the cursor, when it has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
    /// Depth in the AST (0 = root)
    pub depth: usize,
    /// Unique node ID within the translation unit
    pub id: usize,
    /// Parent node ID (omitted for root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,
}

impl NodeInfo {
    fn new(entry: &Entry, depth: usize, id: usize, parent: Option<usize>) -> Self {
        Self {
            kind: entry.kind.label().to_string(),
            name: entry.name().map(String::from),
            start: entry.span.as_ref().map(|span| span.start_pos.clone()),
            end: entry.span.as_ref().map(|span| span.end_pos.clone()),
            depth,
            id,
            parent,
        }
    }
}

/// JSONL writer numbering nodes in pre-order
pub struct AstStream<W: Write> {
    writer: W,
    next_id: usize,
}

impl<W: Write> AstStream<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, next_id: 0 }
    }

    /// Write a node to the output in JSONL format
    pub fn write_node(&mut self, node: &NodeInfo) -> Result<(), OutputError> {
        let json = serde_json::to_string(node)?;
        writeln!(self.writer, "{json}").map_err(|e| OutputError::OutputWriteError { source: e })?;
        self.writer
            .flush()
            .map_err(|e| OutputError::OutputWriteError { source: e })?;
        Ok(())
    }

    /// Stream `entry` and its descendants down to `max_depth`
    ///
    /// Ids keep counting across calls, so several translation units written
    /// to one stream never share an id.
    pub fn write_entry(
        &mut self,
        entry: &Entry,
        max_depth: Option<usize>,
    ) -> Result<(), OutputError> {
        self.walk_and_stream(entry, 0, None, max_depth)
    }

    fn walk_and_stream(
        &mut self,
        entry: &Entry,
        depth: usize,
        parent_id: Option<usize>,
        max_depth: Option<usize>,
    ) -> Result<(), OutputError> {
        let current_id = self.next_id;
        self.next_id += 1;

        self.write_node(&NodeInfo::new(entry, depth, current_id, parent_id))?;

        // Stop traversing if we've reached max depth
        if let Some(max) = max_depth
            && depth >= max
        {
            return Ok(());
        }

        for child in &entry.children {
            self.walk_and_stream(child, depth + 1, Some(current_id), max_depth)?;
        }

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
