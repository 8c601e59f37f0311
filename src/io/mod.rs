//! Output handling for the CLI: formats, rendering and exit codes.

pub mod exit_code;
pub mod format;
pub mod render;
pub mod stream;

pub use exit_code::ExitCode;
pub use format::OutputFormat;
pub use render::render_tree;
pub use stream::{AstStream, NodeInfo, OutputError, open_output};
