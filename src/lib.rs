//! linecount - count lines of code in C and C++ source trees

pub mod config;
pub mod counter;
pub mod error;
pub mod lines;
pub mod output;
pub mod suffix;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{CounterConfig, DEFAULT_ROOTS, default_roots};
pub use counter::{CountSummary, FileCount, LineCounter, count_roots};
pub use error::CountError;
pub use lines::{count_file_lines, count_lines};
pub use output::{CollectingSink, JsonFormatter, NullSink, OutputConfig, ReportSink, TextFormatter};
pub use suffix::{DEFAULT_SUFFIXES, SuffixSet};
pub use walker::Walker;
