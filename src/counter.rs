//! Line counting over a set of roots
//!
//! The total is folded out of the traversal and handed back in a
//! [`CountSummary`]; nothing is accumulated outside a run. Two strategies
//! share the same report order:
//!
//! - sequential (`parallel_workers == 1`): each file is counted and reported
//!   before the next is read
//! - parallel: files are discovered first, counted on a rayon pool, then
//!   reported in discovery order from the calling thread

use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::CounterConfig;
use crate::error::CountError;
use crate::lines::count_file_lines;
use crate::output::ReportSink;
use crate::walker::Walker;

/// Line count for one qualifying file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub path: PathBuf,
    pub lines: usize,
}

/// Result of a counting run.
#[derive(Debug, Default)]
pub struct CountSummary {
    /// Number of files counted
    pub files: usize,
    pub total_lines: usize,
    /// Errors recorded in keep-going mode. Always empty in fail-fast mode.
    pub errors: Vec<CountError>,
}

impl CountSummary {
    /// Add one file to the summary.
    pub fn record(&mut self, count: &FileCount) {
        self.files += 1;
        self.total_lines += count.lines;
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Counts lines across the configured roots.
pub struct LineCounter {
    config: CounterConfig,
    walker: Walker,
}

impl LineCounter {
    pub fn new(config: CounterConfig) -> Self {
        let walker = Walker::from_config(&config);
        Self { config, walker }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Count every qualifying file under every root, reporting into `sink`.
    ///
    /// In fail-fast mode the first error is returned and `sink.finish` is
    /// never called. In keep-going mode errors land in the summary instead.
    pub fn run<S: ReportSink>(&self, sink: &mut S) -> Result<CountSummary, CountError> {
        let summary = if self.config.is_parallel() {
            self.run_parallel(sink)?
        } else {
            self.run_sequential(sink)?
        };
        sink.finish(&summary)?;
        Ok(summary)
    }

    fn run_sequential<S: ReportSink>(&self, sink: &mut S) -> Result<CountSummary, CountError> {
        let mut summary = CountSummary::default();

        for root in &self.config.roots {
            log::debug!("counting under {}", root.display());
            let files = match self.walker.walk(root) {
                Ok(files) => files,
                Err(e) => {
                    self.recover(&mut summary, e)?;
                    continue;
                }
            };

            for file in files {
                let result = file.and_then(|path| {
                    let lines = count_file_lines(&path)?;
                    Ok(FileCount { path, lines })
                });
                match result {
                    Ok(count) => {
                        sink.file(&count)?;
                        summary.record(&count);
                    }
                    Err(e) => self.recover(&mut summary, e)?,
                }
            }
        }

        Ok(summary)
    }

    fn run_parallel<S: ReportSink>(&self, sink: &mut S) -> Result<CountSummary, CountError> {
        let mut summary = CountSummary::default();

        // Phase 1: discover files in report order. Discovery errors keep
        // their position so they settle in the same order as a sequential run.
        let mut files = Vec::new();
        let mut order: Vec<Result<usize, CountError>> = Vec::new();
        for root in &self.config.roots {
            log::debug!("discovering under {}", root.display());
            let walk = match self.walker.walk(root) {
                Ok(walk) => walk,
                Err(e) => {
                    order.push(Err(e));
                    continue;
                }
            };
            for file in walk {
                match file {
                    Ok(path) => {
                        order.push(Ok(files.len()));
                        files.push(path);
                    }
                    Err(e) => order.push(Err(e)),
                }
            }
        }

        // Phase 2: count in parallel, keeping discovery order
        let counts: Vec<Result<usize, CountError>> = in_pool(self.config.parallel_workers, || {
            files.par_iter().map(|path| count_file_lines(path)).collect()
        });

        // Phase 3: settle errors in discovery order before reporting anything
        let mut slots: Vec<Option<(PathBuf, Result<usize, CountError>)>> =
            files.into_iter().zip(counts).map(Some).collect();
        let mut counted = Vec::with_capacity(slots.len());
        for entry in order {
            let result = entry.and_then(|i| match slots[i].take() {
                Some((path, result)) => result.map(|lines| Some(FileCount { path, lines })),
                None => Ok(None),
            });
            match result {
                Ok(Some(count)) => counted.push(count),
                Ok(None) => {}
                Err(e) => self.recover(&mut summary, e)?,
            }
        }
        for count in &counted {
            sink.file(count)?;
            summary.record(count);
        }

        Ok(summary)
    }

    /// Record `err` in keep-going mode, otherwise hand it back to stop the run.
    fn recover(&self, summary: &mut CountSummary, err: CountError) -> Result<(), CountError> {
        if !self.config.keep_going {
            return Err(err);
        }
        log::debug!("recording error and continuing: {}", err);
        summary.errors.push(err);
        Ok(())
    }
}

/// Run `op` on a pool of `workers` threads (0 = rayon's global pool).
fn in_pool<R, F>(workers: usize, op: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    if workers == 0 {
        return op();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(op),
        Err(e) => {
            // Fall back to rayon's global pool if custom pool creation fails
            log::warn!("cannot build {}-thread pool, using default: {}", workers, e);
            op()
        }
    }
}

/// Count lines under `config.roots` with `config`, reporting into `sink`.
pub fn count_roots<S: ReportSink>(
    config: CounterConfig,
    sink: &mut S,
) -> Result<CountSummary, CountError> {
    LineCounter::new(config).run(sink)
}
