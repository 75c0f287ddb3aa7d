//! Directory tree walking logic

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rayon::prelude::*;

use crate::cancel::CancellationToken;
use crate::config::ReportConfig;
use crate::error::{Error, Result};
use crate::filter::PatternFilter;

use super::capture::ContentCapturer;
use super::node::TreeNode;

/// Builds the full tree in memory, pruning excluded paths as it goes.
/// Pruned directories are never descended into, so nothing beneath an
/// excluded directory is visited or tested.
pub struct TreeBuilder<'a> {
    config: &'a ReportConfig,
    filter: &'a PatternFilter,
    cancel: CancellationToken,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(config: &'a ReportConfig, filter: &'a PatternFilter) -> Self {
        Self {
            config,
            filter,
            cancel: CancellationToken::new(),
        }
    }

    /// Poll the given token while walking; a tripped token abandons the
    /// whole build with [`Error::Cancelled`].
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Build the tree rooted at `root`. The root is always a directory
    /// node, even when everything beneath it is pruned.
    pub fn build(&self, root: &Path) -> Result<TreeNode> {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        let children = self.build_children(root, "")?;
        Ok(TreeNode::Dir { name, children })
    }

    fn build_children(&self, dir: &Path, relative: &str) -> Result<Vec<TreeNode>> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        debug!("listing {}", dir.display());
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                // Non-fatal: the subtree is truncated here and the walk
                // continues with siblings and ancestors.
                warn!("cannot list {}: {}", dir.display(), e);
                return Ok(Vec::new());
            }
        };

        // Survivors in enumeration order, never sorted. Exclusion is tested
        // against the /-joined relative path before any descent.
        let mut survivors: Vec<Entry> = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let name = entry.file_name().to_string_lossy().to_string();
            let relative_path = if relative.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", relative, name)
            };
            if self.filter.should_exclude(&relative_path) {
                continue;
            }
            // file_type does not follow symlinks; a symlinked directory is
            // treated as a file, matching the listing primitive's report.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            survivors.push(Entry {
                name,
                relative_path,
                path: entry.path(),
                is_dir,
            });
        }

        let capturer = ContentCapturer::new(self.config, self.filter);

        // Subtrees are built in parallel but collected by original index,
        // so sibling order always matches enumeration order. A child is
        // only attached once its own children are fully resolved.
        survivors
            .into_par_iter()
            .map(|entry| {
                if entry.is_dir {
                    let children = self.build_children(&entry.path, &entry.relative_path)?;
                    Ok(TreeNode::Dir {
                        name: entry.name,
                        children,
                    })
                } else {
                    let content = if self.config.show_file_contents {
                        Some(capturer.capture(&entry.relative_path, &entry.path))
                    } else {
                        None
                    };
                    Ok(TreeNode::File {
                        name: entry.name,
                        relative_path: entry.relative_path,
                        content,
                    })
                }
            })
            .collect()
    }
}

struct Entry {
    name: String,
    relative_path: String,
    path: PathBuf,
    is_dir: bool,
}
