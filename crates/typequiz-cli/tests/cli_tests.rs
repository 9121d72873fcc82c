//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn typequiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("typequiz").unwrap()
}

/// A temp dir populated by `typequiz init`.
fn initialized_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    typequiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Answers every bundled question with its first option, then declines a retake.
fn all_first_options() -> String {
    let mut script = "1\n".repeat(20);
    script.push_str("n\n");
    script
}

fn saved_results(dir: &Path, ext: &str) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|p| p.extension().is_some_and(|e| e == ext))
        .collect()
}

#[test]
fn help_lists_commands() {
    typequiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("take"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag() {
    typequiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("typequiz"));
}

#[test]
fn validate_bundled_data() {
    typequiz()
        .arg("validate")
        .arg("--questions")
        .arg("data/questions.json")
        .arg("--types")
        .arg("data/types.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("20 questions"))
        .stdout(predicate::str::contains("Type descriptions: 16"))
        .stdout(predicate::str::contains("Quiz data valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let questions = dir.path().join("questions.json");
    std::fs::write(
        &questions,
        r#"{"questions":[
            {"id":1,"question":"Parties?","options":[{"text":"Yes","value":"E"},{"text":"No","value":"I"}]},
            {"id":2,"question":"Plans?","options":[{"text":"Yes","value":"J"},{"text":"No","value":"P"},{"text":"Maybe","value":"P"}]}
        ]}"#,
    )
    .unwrap();

    typequiz()
        .arg("validate")
        .arg("--questions")
        .arg(&questions)
        .arg("--types")
        .arg("data/types.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("expected 2 options, found 3"))
        .stdout(predicate::str::contains("S/N"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_rejects_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let questions = dir.path().join("questions.json");
    std::fs::write(
        &questions,
        r#"{"questions":[
            {"id":1,"question":"Parties?","options":[{"text":"Yes","value":"E"},{"text":"No","value":"I"}]},
            {"id":1,"question":"Plans?","options":[{"text":"Yes","value":"J"},{"text":"No","value":"P"}]}
        ]}"#,
    )
    .unwrap();

    typequiz()
        .arg("validate")
        .arg("--questions")
        .arg(&questions)
        .arg("--types")
        .arg("data/types.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate question id: 1"));
}

#[test]
fn take_rejects_optionless_question() {
    let dir = initialized_dir();
    std::fs::write(
        dir.path().join("data/questions.json"),
        r#"{"questions":[{"id":1,"question":"Stuck?","options":[]}]}"#,
    )
    .unwrap();

    typequiz()
        .current_dir(dir.path())
        .arg("take")
        .arg("--no-delay")
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("question 1 has no options"));
}

#[test]
fn validate_nonexistent_file() {
    typequiz()
        .arg("validate")
        .arg("--questions")
        .arg("nonexistent.json")
        .arg("--types")
        .arg("data/types.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    typequiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created typequiz.toml"))
        .stdout(predicate::str::contains("Created data/questions.json"))
        .stdout(predicate::str::contains("Created data/types.json"));

    assert!(dir.path().join("typequiz.toml").exists());
    assert!(dir.path().join("data/questions.json").exists());
    assert!(dir.path().join("data/types.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = initialized_dir();
    std::fs::write(dir.path().join("typequiz.toml"), "reveal_delay_ms = 0\n").unwrap();

    typequiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("typequiz.toml already exists, skipping."));

    let config = std::fs::read_to_string(dir.path().join("typequiz.toml")).unwrap();
    assert_eq!(config, "reveal_delay_ms = 0\n");
}

#[test]
fn take_full_quiz() {
    let dir = initialized_dir();

    typequiz()
        .current_dir(dir.path())
        .arg("take")
        .arg("--no-delay")
        .write_stdin(all_first_options())
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1/20"))
        .stdout(predicate::str::contains("Question 20/20"))
        .stdout(predicate::str::contains("Your personality type: ESTJ"))
        .stdout(predicate::str::contains("Executive"))
        .stdout(predicate::str::contains("Share:"));
}

#[test]
fn take_blocks_next_without_answer() {
    let dir = initialized_dir();
    let mut script = String::from("\nb\n");
    script.push_str(&all_first_options());

    typequiz()
        .current_dir(dir.path())
        .env("TYPEQUIZ_REVEAL_DELAY_MS", "0")
        .arg("take")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please choose an option first."))
        .stdout(predicate::str::contains("Already at the first question."))
        .stdout(predicate::str::contains("ESTJ"));
}

#[test]
fn take_quit_early() {
    let dir = initialized_dir();

    typequiz()
        .current_dir(dir.path())
        .arg("take")
        .arg("--no-delay")
        .write_stdin("1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz abandoned."));
}

#[test]
fn take_rejects_unknown_format_before_asking() {
    let dir = initialized_dir();

    typequiz()
        .current_dir(dir.path())
        .arg("take")
        .arg("--no-delay")
        .arg("--format")
        .arg("json,pdf")
        .write_stdin(all_first_options())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Question 1/20").not())
        .stderr(predicate::str::contains("unknown format: pdf"));
}

#[test]
fn take_without_question_file_fails() {
    let dir = TempDir::new().unwrap();

    typequiz()
        .current_dir(dir.path())
        .arg("take")
        .arg("--no-delay")
        .arg("--questions")
        .arg("missing.json")
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("cannot start"));
}

#[test]
fn show_type() {
    typequiz()
        .arg("show")
        .arg("intj")
        .arg("--types")
        .arg("data/types.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("INTJ — Architect"))
        .stdout(predicate::str::contains("Strengths:"));
}

#[test]
fn show_rejects_bad_code() {
    typequiz()
        .arg("show")
        .arg("EEEE")
        .arg("--types")
        .arg("data/types.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn saved_result_renders() {
    let dir = initialized_dir();
    let out = dir.path().join("results");

    typequiz()
        .current_dir(dir.path())
        .arg("take")
        .arg("--no-delay")
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&out)
        .write_stdin(all_first_options())
        .assert()
        .success();

    let saved = saved_results(&out, "json");
    assert_eq!(saved.len(), 1);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&saved[0]).unwrap()).unwrap();
    assert_eq!(json["type_code"], "ESTJ");
    assert_eq!(json["answered"], 20);

    typequiz()
        .arg("render")
        .arg("--report")
        .arg(&saved[0])
        .assert()
        .success()
        .stdout(predicate::str::contains("ESTJ — Executive"))
        .stdout(predicate::str::contains("20 of 20 questions answered"));

    typequiz()
        .arg("render")
        .arg("--report")
        .arg(&saved[0])
        .arg("--format")
        .arg("html")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML result:"));
    assert_eq!(saved_results(&out, "html").len(), 1);

    typequiz()
        .arg("render")
        .arg("--report")
        .arg(&saved[0])
        .arg("--format")
        .arg("pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}
