//! Sketch - directory structure reports with glob filtering and optional
//! file contents

pub mod cancel;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cancel::CancellationToken;
pub use config::{MAX_CONTENT_BYTES, ReportConfig};
pub use error::{Error, Result};
pub use filter::PatternFilter;
pub use output::{ReportFormatter, ReportOptions, print_json};
pub use tree::{ContentCapturer, TreeBuilder, TreeNode};
