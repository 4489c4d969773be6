//! Discovery of qualifying files under a root

use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};

use crate::config::CounterConfig;
use crate::error::CountError;
use crate::suffix::SuffixSet;

/// Finds files whose names carry a recognized suffix.
///
/// Entries inside each directory are visited in file-name order so repeated
/// runs over the same tree report the same sequence.
#[derive(Debug, Clone)]
pub struct Walker {
    suffixes: SuffixSet,
    follow_links: bool,
    respect_gitignore: bool,
}

impl Walker {
    pub fn new(suffixes: SuffixSet) -> Self {
        Self {
            suffixes,
            follow_links: false,
            respect_gitignore: false,
        }
    }

    pub fn from_config(config: &CounterConfig) -> Self {
        Self::new(config.suffixes.clone())
            .follow_links(config.follow_links)
            .respect_gitignore(config.respect_gitignore)
    }

    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.respect_gitignore = yes;
        self
    }

    /// Walk `root`, yielding qualifying files and any traversal errors.
    ///
    /// Fails up front if `root` does not exist or cannot be inspected.
    pub fn walk(&self, root: &Path) -> Result<QualifyingFiles<'_>, CountError> {
        match root.try_exists() {
            Ok(true) => {}
            Ok(false) => {
                return Err(CountError::MissingRoot {
                    path: root.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(CountError::Root {
                    path: root.to_path_buf(),
                    source,
                });
            }
        }

        let filters = self.respect_gitignore;
        let walk = WalkBuilder::new(root)
            .hidden(filters)
            .parents(filters)
            .ignore(filters)
            .git_ignore(filters)
            .git_global(filters)
            .git_exclude(filters)
            .require_git(false)
            .follow_links(self.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        Ok(QualifyingFiles {
            walk,
            root: root.to_path_buf(),
            suffixes: &self.suffixes,
        })
    }

    /// Collect every qualifying file under `root`, stopping at the first error.
    pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>, CountError> {
        self.walk(root)?.collect()
    }
}

/// Iterator over the qualifying files of one root.
pub struct QualifyingFiles<'a> {
    walk: Walk,
    root: PathBuf,
    suffixes: &'a SuffixSet,
}

impl Iterator for QualifyingFiles<'_> {
    type Item = Result<PathBuf, CountError>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.walk.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(CountError::walk(&self.root, e))),
            };

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_symlink() {
                log::debug!("skipping symlink {}", entry.path().display());
                continue;
            }
            if !file_type.is_file() {
                continue;
            }
            if !self.suffixes.matches(entry.file_name()) {
                continue;
            }
            return Some(Ok(entry.into_path()));
        }
        None
    }
}
