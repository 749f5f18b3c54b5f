use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads, merges, or writes a report.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the input has no title line followed by a dashed rule.
    #[error("no table header followed by a dashed rule was found; is this a popdist report?")]
    MissingHeader,

    /// Raised when a line inside a table segment has no `|` separating the
    /// row label from its values.
    #[error("segment {segment}, line {line}: expected '<label> | <values>', found '{text}'")]
    MissingPipe {
        segment: usize,
        line: usize,
        text: String,
    },

    /// Raised when a segment has a different number of rows than the first.
    #[error("segment {segment} has {found} rows but the first segment has {expected}")]
    RowCountMismatch {
        segment: usize,
        found: usize,
        expected: usize,
    },

    /// Raised when a segment lists its rows under different labels than the
    /// first segment.
    #[error("segment {segment}, row {row}: label '{found}' does not match '{expected}'")]
    RowLabelMismatch {
        segment: usize,
        row: usize,
        found: String,
        expected: String,
    },

    /// Raised when the header pattern cannot be compiled.
    #[error("invalid header pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Raised when the CLI is invoked with the wrong positional arguments.
    #[error("{0}")]
    Usage(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ToolError {
    /// Process exit status reported by the command line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolError::Usage(_) => 2,
            _ => 1,
        }
    }
}
