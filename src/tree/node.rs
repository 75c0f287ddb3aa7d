//! Tree data model

use serde::Serialize;

/// One filesystem entry. A node is a directory or a file, never both; the
/// variant split keeps that invariant structural instead of relying on
/// nullable fields.
///
/// Sibling order is whatever the directory listing produced. The tree is
/// immutable once built; rendering only borrows it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        /// Path relative to the traversal root, `/`-separated on all
        /// platforms.
        relative_path: String,
        /// Captured text or a sentinel; `None` when capture is disabled.
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    Dir {
        name: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }
}
