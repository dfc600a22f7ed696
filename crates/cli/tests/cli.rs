use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn publish_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("publish"));
    cmd.env_remove("RUST_LOG").env_remove("BLOGPUB_DEFAULT_AUTHOR");
    cmd
}

#[test]
fn missing_arguments_exit_with_usage() {
    publish_cmd()
        .arg("only-one.md")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: publish"));
}

#[test]
fn no_arguments_exit_with_usage() {
    publish_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("<MARKDOWN_FILE>"));
}

#[test]
fn help_exits_successfully() {
    publish_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("OUTPUT_DIR"));
}

#[test]
fn publishes_post_and_index() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let md = src.path().join("hello.md");
    fs::write(&md, "---\ntitle: Hello, World!\ndate: 2024-01-01\n---\nBody text").unwrap();

    publish_cmd()
        .arg(&md)
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Published:"))
        .stdout(predicate::str::contains("hello-world.json"))
        .stderr(predicate::str::contains("Updated index with 1 posts"));

    let post: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("hello-world.json")).unwrap())
            .unwrap();
    assert_eq!(post["title"], "Hello, World!");
    assert_eq!(post["author"], "[Your Company]");
    assert_eq!(post["content"], "<p>Body text</p>");

    let index: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("index.json")).unwrap()).unwrap();
    assert_eq!(index[0]["slug"], "hello-world");
}

#[test]
fn default_author_from_flag() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let md = src.path().join("note.md");
    fs::write(&md, "---\ntitle: Note\n---\nx").unwrap();

    publish_cmd()
        .args(["--default-author", "Editorial"])
        .arg(&md)
        .arg(out.path())
        .assert()
        .success();

    let post: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("note.json")).unwrap()).unwrap();
    assert_eq!(post["author"], "Editorial");
}

#[test]
fn escape_html_flag_escapes_raw_markup() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let md = src.path().join("raw.md");
    fs::write(&md, "---\ntitle: Raw\n---\n<b>bold</b>").unwrap();

    publish_cmd()
        .arg("--escape-html")
        .arg(&md)
        .arg(out.path())
        .assert()
        .success();

    let post: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("raw.json")).unwrap()).unwrap();
    let content = post["content"].as_str().unwrap();
    assert!(content.contains("&lt;b&gt;"), "{content}");
}

#[test]
fn missing_input_file_fails() {
    let out = TempDir::new().unwrap();
    publish_cmd()
        .arg(out.path().join("absent.md"))
        .arg(out.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("absent.md"));
}

#[test]
fn quiet_suppresses_info_logs() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let md = src.path().join("q.md");
    fs::write(&md, "---\ntitle: Q\n---\nx").unwrap();

    publish_cmd()
        .arg("--quiet")
        .arg(&md)
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Updated index").not());
}
