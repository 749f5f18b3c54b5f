use regex::Regex;
use tracing::{debug, info, instrument, trace, warn};

use crate::popdist::tables::error::{Result, ToolError};
use crate::popdist::tables::io::delimited_write::render_table;
use crate::popdist::tables::model::{Document, Row, Segment, Table};
use crate::popdist::tables::options::MergeOptions;

/// Header line (optional title word, filler, a pipe, column captions)
/// followed by a rule of dashes. The leading line break means the header can
/// never be the very first line of the report.
pub const HEADER_PATTERN: &str = r"\n(\w*)\W*\|.*\n-+\n";

/// Merges the side-by-side segments of a popdist report into one delimited
/// table rendered with `options`.
pub fn merge_tables(input: &str, options: &MergeOptions) -> Result<String> {
    let document = parse_document(input)?;
    let table = merge_segments(document)?;
    Ok(render_table(&table, options))
}

/// Splits a report into its title and segments.
#[instrument(level = "debug", skip(input), fields(input_len = input.len()))]
pub fn parse_document(input: &str) -> Result<Document> {
    let header = Regex::new(HEADER_PATTERN)?;

    let title = header
        .captures(input)
        .and_then(|c| c.get(1).map(|m| m.as_str().to_owned()))
        .ok_or_else(|| {
            warn!("no header line followed by a dashed rule");
            ToolError::MissingHeader
        })?;
    trace!(title = %title, "parsed table title");

    let segments = header
        .split(input)
        .skip(1)
        .enumerate()
        .map(|(index, body)| parse_segment(index + 1, body))
        .collect::<Result<Vec<_>>>()?;
    info!(
        title = %title,
        segment_count = segments.len(),
        "parsed report"
    );

    Ok(Document { title, segments })
}

fn parse_segment(number: usize, body: &str) -> Result<Segment> {
    let mut rows = Vec::new();

    for (index, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (label, values) = line.split_once('|').ok_or_else(|| ToolError::MissingPipe {
            segment: number,
            line: index + 1,
            text: line.to_string(),
        })?;
        let fields = values.split_whitespace().map(str::to_string).collect();
        rows.push(Row::new(label.trim(), fields));
    }

    trace!(segment = number, row_count = rows.len(), "parsed segment");
    Ok(Segment { rows })
}

/// Concatenates every segment's fields row by row, in segment order.
///
/// The first segment fixes the row labels; every later segment must list the
/// same labels in the same order.
pub fn merge_segments(document: Document) -> Result<Table> {
    let Document { title, segments } = document;
    let mut segments = segments.into_iter();

    let first = segments.next().unwrap_or_default();
    let labels: Vec<String> = first.labels().map(str::to_string).collect();
    let mut rows: Vec<Vec<String>> = first.rows.into_iter().map(|row| row.fields).collect();

    for (offset, segment) in segments.enumerate() {
        let number = offset + 2;
        if segment.rows.len() != labels.len() {
            return Err(ToolError::RowCountMismatch {
                segment: number,
                found: segment.rows.len(),
                expected: labels.len(),
            });
        }

        for (index, (row, merged)) in segment.rows.into_iter().zip(rows.iter_mut()).enumerate() {
            if row.label != labels[index] {
                return Err(ToolError::RowLabelMismatch {
                    segment: number,
                    row: index + 1,
                    found: row.label,
                    expected: labels[index].clone(),
                });
            }
            merged.extend(row.fields);
        }
    }

    debug!(
        row_count = rows.len(),
        column_count = rows.first().map_or(0, Vec::len),
        "merged segments"
    );
    Ok(Table {
        title,
        labels,
        rows,
    })
}
