use std::fs::File;
use std::io::{self, Read};

use tracing::debug;

use crate::popdist::tables::error::{Result, ToolError};
use crate::popdist::tables::io::Endpoint;

/// Reads a whole popdist report and strips surrounding whitespace, leaving
/// the text in the shape [`merge_tables`](crate::merge::merge_tables)
/// expects.
pub fn read_report(source: &Endpoint) -> Result<String> {
    let mut text = String::new();

    match source {
        Endpoint::Stdio => {
            io::stdin().lock().read_to_string(&mut text)?;
        }
        Endpoint::Path(path) => {
            if !path.exists() {
                return Err(ToolError::MissingInput(path.clone()));
            }
            File::open(path)?.read_to_string(&mut text)?;
        }
    }

    debug!(source = %source, bytes = text.len(), "read report");
    Ok(text.trim().to_string())
}
