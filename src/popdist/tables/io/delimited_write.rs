use std::fs::File;
use std::io::{self, Write};

use tracing::debug;

use crate::popdist::tables::error::Result;
use crate::popdist::tables::io::Endpoint;
use crate::popdist::tables::model::Table;
use crate::popdist::tables::options::MergeOptions;

/// Renders the table as delimited text. No line ending follows the last row.
pub fn render_table(table: &Table, options: &MergeOptions) -> String {
    table
        .lines()
        .into_iter()
        .map(|cells| {
            cells
                .into_iter()
                .map(|cell| quote_cell(cell, options.quote.as_deref()))
                .collect::<Vec<_>>()
                .join(options.separator.as_str())
        })
        .collect::<Vec<_>>()
        .join(options.line_ending.as_str())
}

fn quote_cell(cell: &str, quote: Option<&str>) -> String {
    match quote {
        Some(quote) => format!("{quote}{cell}{quote}"),
        None => cell.to_string(),
    }
}

/// Writes the rendered text to the given endpoint and flushes it.
pub fn write_output(target: &Endpoint, text: &str) -> Result<()> {
    match target {
        Endpoint::Stdio => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        Endpoint::Path(path) => {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
            file.flush()?;
        }
    }

    debug!(target = %target, bytes = text.len(), "wrote merged table");
    Ok(())
}
