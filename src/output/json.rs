//! JSON output formatting

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::counter::{CountSummary, FileCount};

use super::ReportSink;

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileCount],
    file_count: usize,
    total_lines: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a Path>,
    message: String,
}

/// Buffers report lines and writes one pretty-printed document on finish.
pub struct JsonFormatter<W: Write = io::Stdout> {
    files: Vec<FileCount>,
    out: W,
}

impl JsonFormatter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            files: Vec::new(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonFormatter<W> {
    fn file(&mut self, count: &FileCount) -> io::Result<()> {
        self.files.push(count.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &CountSummary) -> io::Result<()> {
        let report = JsonReport {
            files: &self.files,
            file_count: summary.files,
            total_lines: summary.total_lines,
            errors: summary
                .errors
                .iter()
                .map(|e| JsonError {
                    path: e.path(),
                    message: e.to_string(),
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
