//! Edge case tests for sketch


use harness::{TestTree, run_sketch};

#[test]
fn test_file_at_size_limit_is_captured() {
    let tree = TestTree::new();
    tree.add_bytes("at.txt", &vec![b'x'; 51200]);

    let (stdout, _stderr, success) = run_sketch(tree.path(), &["--contents"]);
    assert!(success);
    assert!(
        !stdout.contains("exceeds 50KB limit"),
        "51200 bytes is within the limit: {}",
        stdout
    );
    assert!(stdout.contains("```txt\n"), "content should be fenced");
}

#[test]
fn test_file_over_size_limit_gets_sentinel() {
    let tree = TestTree::new();
    tree.add_bytes("over.txt", &vec![b'x'; 51201]);

    let (stdout, _stderr, success) = run_sketch(tree.path(), &["--contents"]);
    assert!(success);
    assert!(
        stdout.contains("// File content omitted (exceeds 50KB limit)"),
        "size sentinel expected: {}",
        stdout
    );
    assert!(
        stdout.contains("// Disable with '--no-omit-large-files'"),
        "second sentinel line expected: {}",
        stdout
    );
    assert!(!stdout.contains("```"), "sentinel must not be fenced");
}

#[test]
fn test_no_omit_large_files_flag() {
    let tree = TestTree::new();
    tree.add_bytes("over.txt", &vec![b'x'; 51201]);

    let (stdout, _stderr, success) =
        run_sketch(tree.path(), &["--contents", "--no-omit-large-files"]);
    assert!(success);
    assert!(
        !stdout.contains("exceeds 50KB limit"),
        "no size omission when disabled: {}",
        stdout
    );
    assert!(stdout.contains("```txt\n"));
}

#[test]
fn test_dotfiles_are_listed_and_matchable() {
    let tree = TestTree::new();
    tree.add_file(".gitignore", "target");
    tree.add_file(".env", "SECRET=1");
    tree.add_file("main.rs", "fn main() {}");

    // Dotfiles show up by default.
    let (stdout, _stderr, success) = run_sketch(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains(".gitignore"));
    assert!(stdout.contains(".env"));

    // And glob wildcards match them (no implicit dotfile protection).
    let (stdout, _stderr, success) = run_sketch(tree.path(), &["-e", ".*"]);
    assert!(success);
    assert!(!stdout.contains(".gitignore"), "{}", stdout);
    assert!(!stdout.contains(".env"));
    assert!(stdout.contains("main.rs"));
}

#[test]
fn test_empty_directory_is_rendered() {
    let tree = TestTree::new();
    tree.add_dir("empty");

    let (stdout, _stderr, success) = run_sketch(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("empty/"), "empty dir with slash: {}", stdout);
}

#[test]
fn test_deeply_nested_structure() {
    let tree = TestTree::new();
    tree.add_file("a/b/c/d/e.txt", "deep");

    let (stdout, _stderr, success) = run_sketch(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("└── e.txt"), "{}", stdout);
}

#[test]
fn test_include_with_exclude_combination() {
    let tree = TestTree::new();
    tree.add_file("docs/readme.md", "keep");
    tree.add_file("docs/internal.md", "drop");
    tree.add_file("src/main.rs", "drop");

    let (stdout, _stderr, success) = run_sketch(
        tree.path(),
        &["-i", "docs/**", "-e", "docs/internal.md"],
    );
    assert!(success);
    assert!(stdout.contains("readme.md"));
    assert!(!stdout.contains("internal.md"), "{}", stdout);
    assert!(!stdout.contains("src"));
}

#[test]
fn test_content_exclude_does_not_prune_structure() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "visible");
    tree.add_file("b.txt", "hidden");

    let (stdout, _stderr, success) =
        run_sketch(tree.path(), &["--contents", "-x", "b.txt"]);
    assert!(success);
    assert!(stdout.contains("b.txt"), "structure entry kept: {}", stdout);
    assert!(stdout.contains("a.txt\n```txt\nvisible\n```"), "{}", stdout);
    assert!(!stdout.contains("hidden"), "excluded content must not appear");
}

#[test]
fn test_unicode_file_names_and_content() {
    let tree = TestTree::new();
    tree.add_file("naïve.md", "héllo wörld");

    let (stdout, _stderr, success) = run_sketch(tree.path(), &["--contents"]);
    assert!(success);
    assert!(stdout.contains("naïve.md"));
    assert!(stdout.contains("héllo wörld"));
}

#[test]
fn test_report_ends_with_single_newline() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");

    let (stdout, _stderr, success) = run_sketch(tree.path(), &[]);
    assert!(success);
    assert!(stdout.ends_with('\n'));
    assert!(!stdout.ends_with("\n\n"), "exactly one trailing newline");
}
