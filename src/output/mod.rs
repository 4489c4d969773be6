//! Report output
//!
//! Counting results are pushed into a [`ReportSink`] as they are produced:
//! - `text` - one `<path>    <lines>` line per file plus a total, optionally colored
//! - `json` - a single JSON document written once the run is finished

mod config;
mod json;
mod text;

pub use config::OutputConfig;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use std::io;

use crate::counter::{CountSummary, FileCount};

/// Receives counting results in report order.
pub trait ReportSink {
    /// Called once per counted file.
    fn file(&mut self, count: &FileCount) -> io::Result<()>;

    /// Called once after every root has been counted. Not called when a
    /// fail-fast run stops on an error.
    fn finish(&mut self, summary: &CountSummary) -> io::Result<()>;
}

/// Sink that discards everything, for callers that only want the summary.
#[derive(Debug, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn file(&mut self, _count: &FileCount) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, _summary: &CountSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that keeps every report line, mostly useful in tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub files: Vec<FileCount>,
    pub finished: bool,
}

impl ReportSink for CollectingSink {
    fn file(&mut self, count: &FileCount) -> io::Result<()> {
        self.files.push(count.clone());
        Ok(())
    }

    fn finish(&mut self, _summary: &CountSummary) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}
