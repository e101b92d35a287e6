//! Integration tests for treewalk


use harness::{TestDir, run_treewalk};

fn lines(stdout: &str) -> Vec<&str> {
    stdout.lines().collect()
}

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_treewalk(dir.path(), &[]);
    assert!(success, "treewalk should succeed: {}", stderr);
    assert_eq!(lines(&stdout), ["[DIR]  ."]);
}

#[test]
fn test_flat_directory_line_format() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "a");
    dir.add_file("b.txt", "b");

    let (stdout, _stderr, success) = run_treewalk(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        lines(&stdout),
        ["[DIR]  .", "   [FILE] ./a.txt", "   [FILE] ./b.txt"]
    );
}

#[test]
fn test_nested_directories() {
    let dir = TestDir::new();
    dir.add_file("top.txt", "");
    dir.add_file("sub/c.txt", "");
    dir.add_file("sub/deeper/d.txt", "");

    let (stdout, _stderr, success) = run_treewalk(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        lines(&stdout),
        [
            "[DIR]  .",
            "   [FILE] ./top.txt",
            "[DIR]  ./sub",
            "   [FILE] ./sub/c.txt",
            "[DIR]  ./sub/deeper",
            "   [FILE] ./sub/deeper/d.txt",
        ]
    );
}

#[test]
fn test_explicit_path_argument() {
    let dir = TestDir::new();
    dir.add_file("project/src/main.py", "");

    let (stdout, _stderr, success) = run_treewalk(dir.path(), &["project"]);
    assert!(success);
    assert_eq!(
        lines(&stdout),
        [
            "[DIR]  project",
            "[DIR]  project/src",
            "   [FILE] project/src/main.py",
        ]
    );
}

#[test]
fn test_absolute_path_argument() {
    let dir = TestDir::new();
    dir.add_file("data.csv", "");
    let root = dir.path().to_string_lossy().to_string();

    let (stdout, _stderr, success) = run_treewalk(dir.path(), &[root.as_str()]);
    assert!(success);
    assert_eq!(stdout.lines().next(), Some(format!("[DIR]  {}", root).as_str()));
    assert!(stdout.contains(&format!("   [FILE] {}/data.csv", root)));
}

#[test]
fn test_missing_root_prints_nothing() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_treewalk(dir.path(), &["does-not-exist"]);
    assert!(success, "missing root is not a failure");
    assert!(stdout.is_empty(), "unexpected output: {}", stdout);
    assert!(stderr.is_empty(), "unexpected diagnostics: {}", stderr);
}

#[test]
fn test_file_root_prints_nothing() {
    let dir = TestDir::new();
    dir.add_file("notes.txt", "");

    let (stdout, _stderr, success) = run_treewalk(dir.path(), &["notes.txt"]);
    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_missing_root_reported_on_request() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_treewalk(dir.path(), &["--report-errors", "gone"]);
    assert!(success);
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("treewalk: warning: cannot access 'gone'"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_summary_flag() {
    let dir = TestDir::new();
    dir.add_file("a/1.txt", "");
    dir.add_file("b/2.txt", "");
    dir.add_file("3.txt", "");

    let (stdout, _stderr, success) = run_treewalk(dir.path(), &["--summary"]);
    assert!(success);
    assert!(
        stdout.ends_with("\n\n3 directories, 3 files\n"),
        "stdout: {}",
        stdout
    );
}

#[test]
fn test_no_color_when_piped() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");

    let (stdout, _stderr, success) = run_treewalk(dir.path(), &[]);
    assert!(success);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_color_always() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");

    let (stdout, _stderr, success) = run_treewalk(dir.path(), &["--color", "always"]);
    assert!(success);
    assert!(stdout.contains('\x1b'), "expected escapes: {:?}", stdout);
    assert!(stdout.contains("./a.txt"));
}

#[test]
fn test_unsorted_lists_everything() {
    let dir = TestDir::new();
    for name in ["x.txt", "m.txt", "a.txt"] {
        dir.add_file(name, "");
    }

    let (stdout, _stderr, success) = run_treewalk(dir.path(), &["-U"]);
    assert!(success);
    let mut got = lines(&stdout);
    got.sort();
    assert_eq!(
        got,
        [
            "   [FILE] ./a.txt",
            "   [FILE] ./m.txt",
            "   [FILE] ./x.txt",
            "[DIR]  .",
        ]
    );
}
