//! Configuration for line counting

use std::path::PathBuf;

use crate::suffix::SuffixSet;

/// Roots walked when none are given, as path components.
pub const DEFAULT_ROOTS: &[&[&str]] = &[
    &["src"],
    &["include", "private"],
    &["include", "public", "GameForge"],
];

/// Build the default roots with the platform's separator.
pub fn default_roots() -> Vec<PathBuf> {
    DEFAULT_ROOTS
        .iter()
        .map(|parts| parts.iter().collect::<PathBuf>())
        .collect()
}

/// Configuration for a counting run.
#[derive(Debug, Clone)]
pub struct CounterConfig {
    /// Roots walked in order.
    pub roots: Vec<PathBuf>,
    pub suffixes: SuffixSet,
    /// Follow symbolic links. Off by default; link loops are errors when on.
    pub follow_links: bool,
    /// Honor .gitignore/.ignore files and skip hidden entries.
    pub respect_gitignore: bool,
    /// Record errors and keep counting instead of stopping at the first one.
    pub keep_going: bool,
    /// Number of counting workers.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential, streaming each report line as it is counted
    /// N = use N worker threads
    pub parallel_workers: usize,
}

impl CounterConfig {
    /// Default configuration over the given roots.
    pub fn with_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel_workers != 1
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            suffixes: SuffixSet::default(),
            follow_links: false,
            respect_gitignore: false,
            keep_going: false,
            parallel_workers: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_roots() {
        let roots = default_roots();
        assert_eq!(roots.len(), 3);
        assert_eq!(roots[0], Path::new("src"));
        assert_eq!(roots[1], Path::new("include").join("private"));
        assert_eq!(
            roots[2],
            Path::new("include").join("public").join("GameForge")
        );
    }

    #[test]
    fn test_default_config_is_sequential_fail_fast() {
        let config = CounterConfig::default();
        assert!(!config.is_parallel());
        assert!(!config.keep_going);
        assert!(!config.follow_links);
        assert!(!config.respect_gitignore);
        assert_eq!(config.suffixes, SuffixSet::default());
    }

    #[test]
    fn test_with_roots_keeps_order() {
        let config = CounterConfig::with_roots(["b", "a"]);
        assert_eq!(config.roots, vec![PathBuf::from("b"), PathBuf::from("a")]);
        assert_eq!(config.parallel_workers, 1);
    }
}
