//! Core data model types for quizreport.
//!
//! A [`QuizLog`] is the record of one completed quiz session. It is produced by
//! whatever conducts the quiz and is only ever read by the report renderer.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A question as it was shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text.
    pub text: String,
    /// Answer options in display order.
    #[serde(default)]
    pub options: Vec<String>,
    /// 1-based indices of the correct options, if the producer recorded them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub correct_answers: Vec<u32>,
}

impl Question {
    pub fn new(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
            correct_answers: Vec::new(),
        }
    }

    pub fn with_correct_answers(mut self, correct: Vec<u32>) -> Self {
        self.correct_answers = correct;
        self
    }
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// 1-based position in the session, assigned by the producer.
    pub number: u32,
    /// The question that was asked.
    pub question: Question,
    /// Selected option indices, in selection order. May be empty.
    #[serde(default)]
    pub answers: Vec<u32>,
    /// Whether the producer judged the answer correct.
    pub successful: bool,
}

/// The ordered log of a completed quiz session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizLog {
    #[serde(default)]
    entries: Vec<Entry>,
}

impl QuizLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from already-numbered entries.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Append an answered question, numbering it after the last entry.
    pub fn record(&mut self, question: Question, answers: Vec<u32>, successful: bool) {
        let number = self.entries.len() as u32 + 1;
        self.entries.push(Entry {
            number,
            question,
            answers,
            successful,
        });
    }

    /// Number of answered questions.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries marked correct.
    pub fn successful(&self) -> usize {
        self.entries.iter().filter(|e| e.successful).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Save the log as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize quiz log")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write quiz log to {}", path.display()))?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a QuizLog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
