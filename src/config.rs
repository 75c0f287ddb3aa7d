//! Configuration types for report generation

/// Size limit for captured file contents. Files strictly larger than this
/// are replaced by a sentinel when `omit_large_files` is set; a file of
/// exactly this many bytes is still captured.
pub const MAX_CONTENT_BYTES: u64 = 50 * 1024;

/// Per-invocation configuration. Built once, passed by reference into the
/// builder, filter, and capturer.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Paths matching any of these globs are pruned from the tree.
    pub exclude: Vec<String>,
    /// When non-empty, only matching paths (or ancestors of a pattern)
    /// survive.
    pub include: Vec<String>,
    /// Matching files keep their tree entry but their content is replaced
    /// by a sentinel.
    pub content_exclude: Vec<String>,
    /// List the effective pattern sets above the structure section.
    pub show_patterns: bool,
    /// Capture file contents and append them to the report.
    pub show_file_contents: bool,
    /// Replace contents over [`MAX_CONTENT_BYTES`] with a size sentinel.
    pub omit_large_files: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            include: Vec::new(),
            content_exclude: Vec::new(),
            show_patterns: false,
            show_file_contents: false,
            omit_large_files: true,
        }
    }
}
