use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn seed_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let records: Vec<serde_json::Value> = (1..=5)
        .map(|n| {
            let created = format!("2026-01-0{n}T09:00:00Z");
            serde_json::json!({
                "id": format!("id-{n}"),
                "title": format!("Todo {n}"),
                "description": null,
                "status": if n % 2 == 0 { "completed" } else { "pending" },
                "created_at": created,
                "updated_at": created,
                "due_date": (n != 3).then(|| format!("2026-02-0{n}")),
            })
        })
        .collect();
    write!(file, "{}", serde_json::Value::Array(records)).unwrap();
    file
}

fn todo_read() -> Command {
    Command::cargo_bin("todo-read").unwrap()
}

#[test]
fn test_cli_help() {
    todo_read()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paginated read-side queries"));
}

#[test]
fn test_cli_serve_help() {
    todo_read()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port"));
}

#[test]
fn test_list_defaults_newest_first() {
    let seed = seed_file();
    let output = todo_read().arg("list").arg("--seed").arg(seed.path()).assert().success();
    let body: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(body["data"][0]["id"], "id-5");
    assert_eq!(body["pagination"]["total"], 5);
    assert_eq!(body["pagination"]["totalPages"], 1);
}

#[test]
fn test_list_status_filter_and_paging() {
    let seed = seed_file();
    let output = todo_read()
        .args(["list", "--status", "pending", "--limit", "2", "--page", "2", "--order", "asc"])
        .arg("--seed")
        .arg(seed.path())
        .assert()
        .success();
    let body: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(body["data"][0]["id"], "id-5");
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["totalPages"], 2);
}

#[test]
fn test_list_due_date_desc_puts_null_first() {
    let seed = seed_file();
    let output = todo_read()
        .args(["list", "--sort", "due_date", "--order", "desc"])
        .arg("--seed")
        .arg(seed.path())
        .assert()
        .success();
    let body: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(body["data"][0]["id"], "id-3");
    assert_eq!(body["data"][1]["id"], "id-5");
}

#[test]
fn test_list_invalid_limit_fails() {
    let seed = seed_file();
    todo_read()
        .args(["list", "--limit", "0"])
        .arg("--seed")
        .arg(seed.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameter: limit must be >= 1"));
}

#[test]
fn test_list_missing_seed_file_fails() {
    todo_read()
        .args(["list", "--seed", "/nonexistent/todos.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("seed file"));
}
