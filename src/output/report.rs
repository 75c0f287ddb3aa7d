//! Report formatting: structure diagram plus content appendix
//!
//! `ReportFormatter::format` is a pure function of the tree and options;
//! re-rendering the same tree always yields byte-identical output.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

/// Hint appended beneath the pattern-exclusion sentinel, pointing at the
/// responsible configuration key.
const CONTENT_EXCLUDE_HINT: &str = "// Adjust patterns with '--content-exclude'";

const HORIZONTAL_RULE: &str = "---";

/// Rendering options. Pattern lists are only consulted when
/// `show_patterns` is set.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub show_patterns: bool,
    pub exclude_patterns: Vec<String>,
    pub include_patterns: Vec<String>,
    pub use_color: bool,
}

pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Render the full report: optional patterns header, the structure
    /// section, and the content section. No trailing newline.
    pub fn format(&self, root: &TreeNode) -> String {
        let mut report = String::new();
        if self.options.show_patterns {
            report.push_str(&self.format_patterns());
        }
        report.push_str(&format_structure(root));
        report.push_str(&format_contents(root));
        report
    }

    /// Write the report to stdout, coloring the structure section when
    /// enabled. The byte content matches `format` plus a final newline.
    pub fn print(&self, root: &TreeNode) -> io::Result<()> {
        let choice = if self.options.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        if self.options.show_patterns {
            write!(stdout, "{}", self.format_patterns())?;
        }

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(stdout, "{}/", root.name())?;
        stdout.reset()?;
        if let TreeNode::Dir { children, .. } = root {
            print_children(children, "", &mut stdout)?;
        }

        write!(stdout, "{}", format_contents(root))?;
        writeln!(stdout)?;
        Ok(())
    }

    fn format_patterns(&self) -> String {
        let mut header = String::new();
        if self.options.exclude_patterns.is_empty() && self.options.include_patterns.is_empty() {
            header.push_str("No patterns specified\n");
        } else {
            header.push_str("Exclude patterns:\n");
            push_pattern_list(&mut header, &self.options.exclude_patterns);
            header.push_str("Include patterns:\n");
            push_pattern_list(&mut header, &self.options.include_patterns);
        }
        header.push('\n');
        header.push_str(HORIZONTAL_RULE);
        header.push_str("\n\n");
        header
    }
}

fn push_pattern_list(out: &mut String, patterns: &[String]) {
    if patterns.is_empty() {
        out.push_str("- (none)\n");
    } else {
        for pattern in patterns {
            out.push_str("- ");
            out.push_str(pattern);
            out.push('\n');
        }
    }
}

fn format_structure(root: &TreeNode) -> String {
    let mut lines = vec![format!("{}/", root.name())];
    if let TreeNode::Dir { children, .. } = root {
        format_children(children, "", &mut lines);
    }
    lines.join("\n")
}

fn format_children(children: &[TreeNode], prefix: &str, lines: &mut Vec<String>) {
    let last = children.len().saturating_sub(1);
    for (idx, child) in children.iter().enumerate() {
        let is_last = idx == last;
        let connector = if is_last { "└── " } else { "├── " };
        let suffix = if child.is_dir() { "/" } else { "" };
        lines.push(format!("{}{}{}{}", prefix, connector, child.name(), suffix));

        if let TreeNode::Dir {
            children: grandchildren,
            ..
        } = child
        {
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            format_children(grandchildren, &child_prefix, lines);
        }
    }
}

fn print_children(
    children: &[TreeNode],
    prefix: &str,
    stdout: &mut StandardStream,
) -> io::Result<()> {
    let last = children.len().saturating_sub(1);
    for (idx, child) in children.iter().enumerate() {
        let is_last = idx == last;
        let connector = if is_last { "└── " } else { "├── " };

        write!(stdout, "\n{}{}", prefix, connector)?;
        if child.is_dir() {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(stdout, "{}/", child.name())?;
        } else {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
            write!(stdout, "{}", child.name())?;
        }
        stdout.reset()?;

        if let TreeNode::Dir {
            children: grandchildren,
            ..
        } = child
        {
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            print_children(grandchildren, &child_prefix, stdout)?;
        }
    }
    Ok(())
}

/// Content appendix: one block per file that carries content, collected in
/// the same depth-first order as the structure section. Empty when no node
/// carries content.
fn format_contents(root: &TreeNode) -> String {
    let mut blocks = Vec::new();
    collect_content_blocks(root, &mut blocks);
    if blocks.is_empty() {
        String::new()
    } else {
        format!("\n\n{}", blocks.join("\n\n"))
    }
}

fn collect_content_blocks(node: &TreeNode, blocks: &mut Vec<String>) {
    match node {
        TreeNode::File {
            name,
            relative_path,
            content: Some(content),
        } => {
            // Omission sentinels render as plain text, never fenced.
            if content.contains("excluded by patterns") {
                blocks.push(format!(
                    "{}\n{}\n{}",
                    relative_path, content, CONTENT_EXCLUDE_HINT
                ));
            } else if content.contains("50KB limit") {
                blocks.push(format!("{}\n{}", relative_path, content));
            } else {
                blocks.push(format!(
                    "{}\n```{}\n{}\n```",
                    relative_path,
                    extension(name),
                    content
                ));
            }
        }
        TreeNode::Dir { children, .. } => {
            for child in children {
                collect_content_blocks(child, blocks);
            }
        }
        TreeNode::File { content: None, .. } => {}
    }
}

/// Fence tag for a file name: the text after the last `.`, lowercased.
/// Names with no extension (including leading-dot names like `.gitignore`)
/// get an untagged fence.
fn extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
