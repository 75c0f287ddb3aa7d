//! File content capture policy

use std::path::Path;

use crate::config::{MAX_CONTENT_BYTES, ReportConfig};
use crate::filter::PatternFilter;

/// Sentinel for files whose content is excluded by pattern.
pub const CONTENT_EXCLUDED: &str = "// Content omitted (excluded by patterns)";

/// Sentinel for zero-byte files.
pub const EMPTY_FILE: &str = "// This file is empty";

/// Two-line sentinel for files over the size limit.
pub const LARGE_FILE: &str =
    "// File content omitted (exceeds 50KB limit)\n// Disable with '--no-omit-large-files'";

/// Produces the text payload (or a sentinel) for a file node.
pub struct ContentCapturer<'a> {
    config: &'a ReportConfig,
    filter: &'a PatternFilter,
}

impl<'a> ContentCapturer<'a> {
    pub fn new(config: &'a ReportConfig, filter: &'a PatternFilter) -> Self {
        Self { config, filter }
    }

    /// Capture never fails: read errors fold into a diagnostic sentinel so
    /// a single unreadable file cannot abort the surrounding walk.
    pub fn capture(&self, relative_path: &str, full_path: &Path) -> String {
        if self.filter.should_exclude_content(relative_path) {
            return CONTENT_EXCLUDED.to_string();
        }

        let bytes = match std::fs::read(full_path) {
            Ok(b) => b,
            Err(e) => return format!("// Error reading file: {}", e),
        };

        // Exactly MAX_CONTENT_BYTES still passes; the limit is strict.
        if self.config.omit_large_files && bytes.len() as u64 > MAX_CONTENT_BYTES {
            return LARGE_FILE.to_string();
        }

        // Lossy on purpose: invalid UTF-8 degrades to U+FFFD instead of
        // dropping the file from the report.
        let text = String::from_utf8_lossy(&bytes);
        if text.is_empty() {
            EMPTY_FILE.to_string()
        } else {
            text.into_owned()
        }
    }
}
