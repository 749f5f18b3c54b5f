use crate::popdist::tables::error::Result;
use crate::popdist::tables::io::Endpoint;
use crate::popdist::tables::io::delimited_write::write_output;
use crate::popdist::tables::io::report_read::read_report;
use crate::popdist::tables::merge::merge_tables;
use crate::popdist::tables::options::MergeOptions;
use tracing::{debug, instrument};

/// Reads a popdist report, merges its segments, and writes the delimited
/// table. Nothing is written when the merge fails.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input, output = %output, line_ending = %options.line_ending)
)]
pub fn merge_file(input: &Endpoint, output: &Endpoint, options: &MergeOptions) -> Result<()> {
    let text = read_report(input)?;
    let merged = merge_tables(&text, options)?;
    debug!(bytes = merged.len(), "table merged");
    write_output(output, &merged)
}
