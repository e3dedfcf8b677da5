//! JSON quiz log loader.
//!
//! Loads completed quiz logs from disk and checks them for common producer
//! mistakes.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Entry, QuizLog};

/// Read a quiz log from a JSON file.
pub fn load_quiz_log(path: &Path) -> Result<QuizLog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz log: {}", path.display()))?;

    parse_quiz_log_str(&content, path)
}

/// Parse a JSON string into a `QuizLog` (useful for testing).
pub fn parse_quiz_log_str(content: &str, source_path: &Path) -> Result<QuizLog> {
    let log: QuizLog = serde_json::from_str(content)
        .with_context(|| format!("failed to parse quiz log JSON: {}", source_path.display()))?;
    tracing::debug!(
        entries = log.total(),
        "loaded quiz log from {}",
        source_path.display()
    );
    Ok(log)
}

/// A warning from quiz log validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The entry number (if applicable).
    pub entry: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz log for common issues.
///
/// Rendering never depends on these checks; they only help spot a broken
/// producer.
pub fn validate_quiz_log(log: &QuizLog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for (idx, entry) in log.iter().enumerate() {
        if !seen.insert(entry.number) {
            warnings.push(ValidationWarning {
                entry: Some(entry.number),
                message: format!("duplicate entry number: {}", entry.number),
            });
        } else if entry.number as usize != idx + 1 {
            warnings.push(ValidationWarning {
                entry: Some(entry.number),
                message: format!("entry number {} found at position {}", entry.number, idx + 1),
            });
        }
    }

    for entry in log {
        if entry.question.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                entry: Some(entry.number),
                message: "question text is empty".into(),
            });
        }

        let option_count = entry.question.options.len() as u32;
        for &answer in &entry.answers {
            if answer == 0 || answer > option_count {
                warnings.push(ValidationWarning {
                    entry: Some(entry.number),
                    message: format!(
                        "answer {answer} is outside the option range 1..={option_count}"
                    ),
                });
            }
        }

        if let Some(expected) = expected_success(entry) {
            if expected != entry.successful {
                warnings.push(ValidationWarning {
                    entry: Some(entry.number),
                    message: format!(
                        "marked {} but the answers {} the recorded correct options",
                        if entry.successful { "correct" } else { "incorrect" },
                        if expected { "match" } else { "do not match" }
                    ),
                });
            }
        }
    }

    warnings
}

/// Whether the answers select exactly the recorded correct options.
fn expected_success(entry: &Entry) -> Option<bool> {
    let correct = &entry.question.correct_answers;
    if correct.is_empty() {
        return None;
    }
    let chosen: HashSet<u32> = entry.answers.iter().copied().collect();
    let expected: HashSet<u32> = correct.iter().copied().collect();
    Some(chosen == expected)
}
