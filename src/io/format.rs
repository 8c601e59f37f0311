//! Output format selection for rendered ASTs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a translation unit is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented, human-readable tree (default)
    #[default]
    Tree,
    /// The whole translation unit as one pretty-printed JSON document
    Json,
    /// One JSON object per AST node
    Jsonl,
}
