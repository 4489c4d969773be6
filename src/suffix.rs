//! Recognized file suffixes

use std::ffi::OsStr;
use std::fmt;

/// Suffixes counted when no others are configured: C and C++ headers and sources.
pub const DEFAULT_SUFFIXES: &[&str] = &[".hpp", ".cpp", ".h", ".c"];

/// Ordered, de-duplicated set of file-name suffixes.
///
/// Matching is a case-sensitive `ends_with` on the file name, so `.h`
/// matches `foo.h` but not `foo.H`, and a file named just `.c` qualifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixSet {
    suffixes: Vec<String>,
}

impl SuffixSet {
    /// Build a set from suffixes. A suffix without a leading `.` gets one;
    /// empty entries are dropped.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Vec::new();
        for suffix in suffixes {
            let suffix = suffix.as_ref().trim();
            if suffix.is_empty() {
                continue;
            }
            let suffix = if suffix.starts_with('.') {
                suffix.to_string()
            } else {
                format!(".{}", suffix)
            };
            if !set.contains(&suffix) {
                set.push(suffix);
            }
        }
        Self { suffixes: set }
    }

    /// Check whether `file_name` ends with one of the suffixes.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        let name = file_name.to_string_lossy();
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }
}

impl Default for SuffixSet {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIXES)
    }
}

impl fmt::Display for SuffixSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffixes.join(", "))
    }
}
