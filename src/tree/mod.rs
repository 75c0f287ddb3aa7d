//! Directory tree model and walking logic
//!
//! - `node` - the tree data model
//! - `builder` - filesystem walk with pattern pruning
//! - `capture` - file content capture policy and sentinels

mod builder;
mod capture;
mod node;

pub use builder::TreeBuilder;
pub use capture::{CONTENT_EXCLUDED, ContentCapturer, EMPTY_FILE, LARGE_FILE};
pub use node::TreeNode;
