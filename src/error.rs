//! Error types for line counting

use std::io;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use thiserror::Error;

/// Everything that can stop (or, with `keep_going`, be recorded during) a count.
#[derive(Debug, Error)]
pub enum CountError {
    /// A configured root does not exist.
    #[error("cannot access '{}': No such file or directory", path.display())]
    MissingRoot { path: PathBuf },

    /// A configured root could not be inspected (permissions, a file used as
    /// a directory, link loops, over-long names).
    #[error("cannot access '{}': {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory enumeration failed (permissions, removal mid-walk, link loops).
    #[error("cannot walk '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// A qualifying file could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A qualifying file is not valid UTF-8 text.
    #[error("'{}' is not valid UTF-8 text: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl CountError {
    /// Path the error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CountError::MissingRoot { path }
            | CountError::Root { path, .. }
            | CountError::Walk { path, .. }
            | CountError::Read { path, .. }
            | CountError::Encoding { path, .. } => Some(path),
            CountError::Output(_) => None,
        }
    }

    /// Build a walk error, pulling the offending path out of the `ignore` error when it has one.
    pub(crate) fn walk(root: &Path, source: ignore::Error) -> Self {
        let path = walk_error_path(&source).unwrap_or_else(|| root.to_path_buf());
        CountError::Walk { path, source }
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.iter().find_map(walk_error_path),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_message() {
        let err = CountError::MissingRoot {
            path: PathBuf::from("nowhere"),
        };
        assert_eq!(
            err.to_string(),
            "cannot access 'nowhere': No such file or directory"
        );
        assert_eq!(err.path(), Some(Path::new("nowhere")));
    }

    #[test]
    fn test_root_error_keeps_io_message() {
        let err = CountError::Root {
            path: PathBuf::from("file.c/sub"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        assert_eq!(
            err.to_string(),
            "cannot access 'file.c/sub': Permission denied"
        );
        assert_eq!(err.path(), Some(Path::new("file.c/sub")));
    }

    #[test]
    fn test_walk_error_uses_inner_path() {
        let inner = ignore::Error::WithPath {
            path: PathBuf::from("root/locked"),
            err: Box::new(ignore::Error::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "denied",
            ))),
        };
        let err = CountError::walk(Path::new("root"), inner);
        assert_eq!(err.path(), Some(Path::new("root/locked")));
    }

    #[test]
    fn test_walk_error_falls_back_to_root() {
        let inner = ignore::Error::Io(io::Error::other("boom"));
        let err = CountError::walk(Path::new("root"), inner);
        assert_eq!(err.path(), Some(Path::new("root")));
    }

    #[test]
    fn test_output_error_has_no_path() {
        let err = CountError::from(io::Error::other("closed"));
        assert!(err.path().is_none());
        assert!(err.to_string().starts_with("error writing output"));
    }
}
