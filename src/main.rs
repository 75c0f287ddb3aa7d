//! CLI entry point for sketch

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sketch::{
    PatternFilter, ReportConfig, ReportFormatter, ReportOptions, TreeBuilder, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sketch")]
#[command(about = "Generate a directory structure report with optional file contents")]
#[command(version)]
struct Args {
    /// Directory to report on
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Prune paths matching GLOB from the tree (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,

    /// Keep only paths matching GLOB, or ancestors of one (can be used
    /// multiple times)
    #[arg(short = 'i', long = "include", value_name = "GLOB")]
    include: Vec<String>,

    /// Keep matching files in the tree but replace their content with a
    /// sentinel (can be used multiple times)
    #[arg(short = 'x', long = "content-exclude", value_name = "GLOB")]
    content_exclude: Vec<String>,

    /// Append file contents to the report
    #[arg(short = 'c', long = "contents")]
    contents: bool,

    /// List the effective patterns above the tree
    #[arg(short = 'p', long = "show-patterns")]
    show_patterns: bool,

    /// Capture files over the 50KB limit instead of a size sentinel
    #[arg(long = "no-omit-large-files")]
    no_omit_large_files: bool,

    /// Output the tree in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = ReportConfig {
        exclude: args.exclude.clone(),
        include: args.include.clone(),
        content_exclude: args.content_exclude.clone(),
        show_patterns: args.show_patterns,
        show_file_contents: args.contents,
        omit_large_files: !args.no_omit_large_files,
    };

    // Pattern compilation failures abort before any traversal starts.
    let filter = match PatternFilter::compile(&config) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("sketch: {}", e);
            process::exit(1);
        }
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.is_dir() {
        eprintln!(
            "sketch: cannot access '{}': No such directory",
            args.path.display()
        );
        process::exit(1);
    }

    let tree = match TreeBuilder::new(&config, &filter).build(&root) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("sketch: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&tree)
    } else {
        let formatter = ReportFormatter::new(ReportOptions {
            show_patterns: args.show_patterns,
            exclude_patterns: filter.exclude_patterns(),
            include_patterns: filter.include_patterns(),
            use_color: should_use_color(args.color),
        });
        formatter.print(&tree)
    };

    if let Err(e) = result {
        eprintln!("sketch: error writing output: {}", e);
        process::exit(1);
    }
}
