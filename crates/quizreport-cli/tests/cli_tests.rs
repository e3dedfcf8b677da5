//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MATH_VERBOSE: &str = "Report for quiz test Math Basics

Question 1: 2+2=?
1) 3
2) 4
3) 5
Answers: 2
Correct: yes

Total questions: 1
Correct answers: 1
";

const MATH_CONCISE: &str = "Report for quiz test Math Basics

1(+): 2
Total questions: 1
Correct answers: 1
";

fn quiz_log(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../quiz-logs")
        .join(name)
}

/// A `quizreport` command isolated from any config in the cwd or home dir.
fn quizreport(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizreport").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("QUIZREPORT_TITLE")
        .env_remove("QUIZREPORT_REPORT_ENABLED")
        .env_remove("QUIZREPORT_REPORT_MODE")
        .env_remove("QUIZREPORT_OUTPUT_PATH");
    cmd
}

#[test]
fn render_verbose_to_console() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("math-basics.json"))
        .arg("--title")
        .arg("Math Basics")
        .assert()
        .success()
        .stdout(MATH_VERBOSE);
}

#[test]
fn render_concise_to_console() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("math-basics.json"))
        .arg("--title")
        .arg("Math Basics")
        .arg("--mode")
        .arg("concise")
        .assert()
        .success()
        .stdout(MATH_CONCISE);
}

#[test]
fn render_uses_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("quizreport.toml"),
        "title = \"Math Basics\"\n\n[report]\nmode = \"concise\"\n",
    )
    .unwrap();

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("math-basics.json"))
        .assert()
        .success()
        .stdout(MATH_CONCISE);
}

#[test]
fn render_concise_mixed_log() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("mixed.json"))
        .arg("--mode")
        .arg("concise")
        .assert()
        .success()
        .stdout(predicate::str::contains("1(+): 1,3\n2(-): 3\n3(-): \n"))
        .stdout(predicate::str::ends_with(
            "Total questions: 3\nCorrect answers: 1\n",
        ));
}

#[test]
fn render_twice_is_identical() {
    let dir = TempDir::new().unwrap();

    let run = || {
        quizreport(&dir)
            .arg("render")
            .arg("--log")
            .arg(quiz_log("mixed.json"))
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn render_disabled_is_silent() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("mixed.json"))
        .arg("--disable")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn render_disabled_by_env() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .env("QUIZREPORT_REPORT_ENABLED", "false")
        .arg("render")
        .arg("--log")
        .arg(quiz_log("mixed.json"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn render_to_file() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("report.txt");

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("math-basics.json"))
        .arg("--title")
        .arg("Math Basics")
        .arg("--path")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(std::fs::read_to_string(&report_path).unwrap(), MATH_VERBOSE);
}

#[test]
fn render_unwritable_path_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("missing-dir").join("report.txt");

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("math-basics.json"))
        .arg("--path")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("report sink unavailable"));

    assert!(!report_path.exists());
}

#[test]
fn render_russian_labels() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("math-basics.json"))
        .arg("--locale")
        .arg("ru")
        .arg("--title")
        .arg("Математика")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Отчёт о прохождении теста Математика\n\n",
        ))
        .stdout(predicate::str::contains("Содержит правильный ответ: да"));
}

#[test]
fn render_missing_log_fails() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg("no_such_log.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn render_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("math-basics.json"))
        .arg("--config")
        .arg("nope.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn render_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg(quiz_log("math-basics.json"))
        .arg("--mode")
        .arg("loud")
        .assert()
        .failure();
}

#[test]
fn validate_clean_log() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("validate")
        .arg("--log")
        .arg(quiz_log("mixed.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("3 entries, 1 correct"))
        .stdout(predicate::str::contains("Quiz log valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("validate")
        .arg("--log")
        .arg(quiz_log("inconsistent.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[#1] WARNING"))
        .stdout(predicate::str::contains("2 warning(s) found."));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizreport.toml"))
        .stdout(predicate::str::contains("Created quiz-logs/example.json"));

    assert!(dir.path().join("quizreport.toml").exists());
    assert!(dir.path().join("quiz-logs/example.json").exists());

    // The generated files work together.
    quizreport(&dir)
        .arg("render")
        .arg("--log")
        .arg("quiz-logs/example.json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Report for quiz test Example Quiz\n"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir).arg("init").assert().success();

    quizreport(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    quizreport(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz session report renderer"));
}
