//! CLI integration tests for parsemd.

use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command instance for the parsemd binary, run inside `dir`.
fn parsemd_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("parsemd"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Create a temporary directory holding `todo.md`.
fn setup_document(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("todo.md"), content).unwrap();
    dir
}

const TODO_DOC: &str = "# Todo\n\n- \\- [ ] Write docs\n- \\- [x] Ship\n- Plain\n";

#[test]
fn test_parse_echoes_file() {
    let dir = setup_document(TODO_DOC);

    parsemd_cmd(dir.path())
        .args(["parse", "todo.md"])
        .assert()
        .success()
        .stdout(format!("{TODO_DOC}\n"));
}

#[test]
fn test_parse_alias() {
    let dir = setup_document("hello");

    parsemd_cmd(dir.path())
        .args(["p", "todo.md"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_parse_keeps_non_utf8_bytes() {
    let dir = TempDir::new().unwrap();
    let content = [b'a', 0xff, b'b', b'\n'];
    fs::write(dir.path().join("raw.md"), content).unwrap();

    let mut expected = content.to_vec();
    expected.push(b'\n');

    parsemd_cmd(dir.path())
        .args(["parse", "raw.md"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_convert_renders_todo_blocks() {
    let dir = setup_document(TODO_DOC);

    parsemd_cmd(dir.path())
        .args(["convert", "todo.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Todo</h1>"))
        .stdout(predicate::str::contains(
            "<div class=\"todo-item\">\n<input type=\"checkbox\" disabled>\n<span class=\"todo-text\">Write docs</span>\n</div>",
        ))
        .stdout(predicate::str::contains(
            r#"<div class="todo-item completed">"#,
        ))
        .stdout(predicate::str::contains("<li>Plain</li>"));
}

#[test]
fn test_convert_alias() {
    let dir = setup_document("- \\* [x] Done\n");

    parsemd_cmd(dir.path())
        .args(["c", "todo.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checked disabled"));
}

#[test]
fn test_convert_without_todo_plugin() {
    let dir = setup_document(TODO_DOC);

    parsemd_cmd(dir.path())
        .args(["convert", "--no-todo", "todo.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<li>- [ ] Write docs</li>"))
        .stdout(predicate::str::contains("todo-item").not());
}

#[test]
fn test_convert_reads_discovered_config() {
    let dir = setup_document(TODO_DOC);
    fs::write(dir.path().join("parsemd.toml"), "[plugins]\ntodo = false\n").unwrap();

    parsemd_cmd(dir.path())
        .args(["convert", "todo.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("todo-item").not());
}

#[test]
fn test_convert_explicit_config_with_gfm() {
    let dir = setup_document("- [x] Native\n");
    fs::write(dir.path().join("custom.toml"), "[markdown]\ngfm = true\n").unwrap();

    parsemd_cmd(dir.path())
        .args(["--config", "custom.toml", "convert", "todo.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"type="checkbox""#))
        .stdout(predicate::str::contains("todo-item").not());
}

#[test]
fn test_convert_missing_config_fails() {
    let dir = setup_document(TODO_DOC);

    parsemd_cmd(dir.path())
        .args(["convert", "--config", "nope.toml", "todo.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    for command in ["parse", "convert"] {
        parsemd_cmd(dir.path())
            .args([command, "missing.md"])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Error: reading file missing.md"));
    }
}

#[test]
fn test_convert_invalid_utf8_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.md"), b"# ok\n\xff\n").unwrap();

    parsemd_cmd(dir.path())
        .args(["convert", "bad.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: converting markdown"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    let dir = TempDir::new().unwrap();

    parsemd_cmd(dir.path())
        .args(["render", "todo.md"])
        .assert()
        .code(2);
}
