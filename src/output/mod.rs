//! Report renderers.
//!
//! Each writer reads only the result fields it needs and applies
//! display-level rounding through `format`; none of them re-derive
//! aggregate totals.

pub mod format;
pub mod json;
pub mod markdown;
pub mod terminal;

use clap::ValueEnum;
use std::io::Write;

use crate::core::AnalysisReport;

pub use format::ColorMode;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

/// Build a writer for the requested format over any byte sink.
pub fn create_writer(writer: Box<dyn Write>, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}
