use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tsort() -> Command {
    Command::cargo_bin("tsort").unwrap()
}

#[test]
fn test_chain_from_stdin() {
    tsort()
        .write_stdin("a b\nb c\n")
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn test_dash_reads_stdin() {
    tsort()
        .arg("-")
        .write_stdin("a b\nb c\n")
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn test_empty_input() {
    tsort().write_stdin("").assert().success().stdout("");
}

#[test]
fn test_loop_is_reported() {
    tsort()
        .write_stdin("a b\nb a\n")
        .assert()
        .code(1)
        .stdout("-: input contains a loop\n")
        .stderr(predicate::str::contains("-: loop: a -> b -> a"));
}

#[test]
fn test_self_loop_is_reported() {
    tsort()
        .write_stdin("x y\na a\n")
        .assert()
        .code(1)
        .stdout("-: input contains a loop\n")
        .stderr(predicate::str::contains("loop: a -> a"));
}

#[test]
fn test_three_tokens_rejected() {
    tsort()
        .write_stdin("a b c\n")
        .assert()
        .code(1)
        .stdout("-: input contains an odd number of tokens\n");
}

#[test]
fn test_single_token_rejected() {
    tsort()
        .write_stdin("a b\nc\n")
        .assert()
        .code(1)
        .stdout("-: input contains an odd number of tokens\n");
}

#[test]
fn test_blank_lines_and_duplicates() {
    tsort()
        .write_stdin("a b\n\n  \na b\nb c\n")
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn test_disconnected_components() {
    tsort()
        .write_stdin("a b\nc d\n")
        .assert()
        .success()
        .stdout("a\nc\nb\nd\n");
}

#[test]
fn test_tabs_separate_tokens() {
    tsort()
        .write_stdin("libc\tlibm\nlibm\t\tapp\n")
        .assert()
        .success()
        .stdout("libc\nlibm\napp\n");
}

#[test]
fn test_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deps.txt");
    fs::write(&path, "build test\ntest deploy\nbuild lint\n").unwrap();

    tsort()
        .arg(&path)
        .assert()
        .success()
        .stdout("build\ntest\nlint\ndeploy\n");
}

#[test]
fn test_loop_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cyclic.txt");
    fs::write(&path, "a b\nb c\nc a\n").unwrap();

    tsort()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(format!("{}: input contains a loop\n", path.display()));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    tsort()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(format!("{}: ", path.display())));
}

#[test]
fn test_extra_operand() {
    tsort()
        .args(["one", "two"])
        .assert()
        .code(1)
        .stdout("extra operand 'two'\n");
}

#[test]
fn test_version() {
    tsort()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsort"));
}

#[test]
fn test_non_utf8_tokens_pass_through() {
    tsort()
        .write_stdin(&b"caf\xe9 bar\nbar baz\n"[..])
        .assert()
        .success()
        .stdout(&b"caf\xe9\nbar\nbaz\n"[..]);
}

#[test]
fn test_non_utf8_loop_is_reported() {
    tsort()
        .write_stdin(&b"\xff x\nx \xff\n"[..])
        .assert()
        .code(1)
        .stdout("-: input contains a loop\n");
}
