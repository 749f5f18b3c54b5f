//! Core library for the popdist-merge command line application.
//!
//! popdist prints wide distance matrices as several narrow tables stacked on
//! top of each other, each with its own header and dashed rule. This crate
//! stitches those segments back into a single delimited table. Parsing and
//! merging live in [`popdist::tables::merge`], the parsed and merged shapes
//! in [`popdist::tables::model`], output formatting in
//! [`popdist::tables::options`], stdin/file adapters under
//! [`popdist::tables::io`], and the read-merge-write pipeline used by the
//! binary in [`popdist::tables::convert`].

pub mod popdist;

pub use popdist::tables::{Result, ToolError, convert, error, io, merge, model, options};
