//! Plain text output
//!
//! `TextFormatter` writes each report line as soon as it arrives, so in
//! sequential mode the listing streams while the tree is being walked.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::counter::{CountSummary, FileCount};

use super::ReportSink;
use super::config::OutputConfig;

/// Separator between a path and its line count.
pub const COLUMN_GAP: &str = "    ";

/// Text formatter writing to any color-capable writer.
pub struct TextFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout. Color detection is the caller's job,
    /// `use_color` is taken as final.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> ReportSink for TextFormatter<W> {
    fn file(&mut self, count: &FileCount) -> io::Result<()> {
        if self.config.quiet {
            return Ok(());
        }

        write!(self.out, "{}{}", count.path.display(), COLUMN_GAP)?;
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        self.out.set_color(&spec)?;
        write!(self.out, "{}", count.lines)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn finish(&mut self, summary: &CountSummary) -> io::Result<()> {
        let mut bold = ColorSpec::new();
        bold.set_bold(true);
        self.out.set_color(&bold)?;
        write!(self.out, "Total lines of code: {}", summary.total_lines)?;
        self.out.reset()?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
