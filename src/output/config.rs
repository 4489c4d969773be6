//! Output configuration types

/// Configuration for report formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Only print the total, not the per-file lines.
    pub quiet: bool,
}
