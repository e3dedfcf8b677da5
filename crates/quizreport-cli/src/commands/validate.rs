//! The `quizreport validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(log_path: PathBuf) -> Result<()> {
    let log = quizreport_core::parser::load_quiz_log(&log_path)?;

    println!(
        "Quiz log: {} entries, {} correct",
        log.total(),
        log.successful()
    );

    let warnings = quizreport_core::parser::validate_quiz_log(&log);
    for w in &warnings {
        let prefix = w
            .entry
            .map(|n| format!("  [#{n}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Quiz log valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
