//! Plain-text quiz report generator.
//!
//! Renders a completed [`QuizLog`] as a header line, one block per entry and a
//! closing tally, then writes it to the configured console or file sink.

use std::io::Write;
use std::sync::Arc;

use quizreport_core::config::{AppConfig, ReportMode, ReportSettings};
use quizreport_core::model::{Entry, QuizLog};

use crate::diagnostics::Diagnostics;
use crate::error::ReportError;
use crate::labels::Labels;
use crate::sink::Sink;

/// What a call to [`ReportGenerator::generate`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Reporting is switched off; nothing was written.
    Disabled,
    /// The full report was written.
    Written,
    /// The sink failed; the error went to diagnostics.
    Failed,
}

/// Renders quiz logs according to the report settings.
pub struct ReportGenerator {
    title: String,
    settings: ReportSettings,
    diagnostics: Arc<dyn Diagnostics>,
}

impl ReportGenerator {
    pub fn new(
        title: impl Into<String>,
        settings: ReportSettings,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            title: title.into(),
            settings,
            diagnostics,
        }
    }

    pub fn from_config(config: &AppConfig, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self::new(config.title.clone(), config.report.clone(), diagnostics)
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Write the report for `log` to the configured sink.
    ///
    /// Sink failures are handed to the diagnostics hook and reported as
    /// [`ReportOutcome::Failed`]; they never propagate.
    pub fn generate(&self, log: &QuizLog) -> ReportOutcome {
        match self.try_generate(log) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.diagnostics.on_error(&e);
                ReportOutcome::Failed
            }
        }
    }

    /// Like [`generate`](Self::generate), but returns the sink error.
    pub fn try_generate(&self, log: &QuizLog) -> Result<ReportOutcome, ReportError> {
        if !self.settings.enabled {
            self.diagnostics.on_disabled();
            return Ok(ReportOutcome::Disabled);
        }

        let mut sink = Sink::open(&self.settings.output)?;
        self.diagnostics.on_sink_resolved(&self.settings.output);
        self.write_report(log, &mut sink)?;
        sink.finish()?;

        Ok(ReportOutcome::Written)
    }

    /// Render the report and write it to `out`, ignoring the sink settings.
    pub fn write_report<W: Write + ?Sized>(
        &self,
        log: &QuizLog,
        out: &mut W,
    ) -> std::io::Result<()> {
        out.write_all(self.render(log).as_bytes())
    }

    /// Render the full report text.
    pub fn render(&self, log: &QuizLog) -> String {
        let mut text = self.render_header();

        for entry in log {
            let block = match self.settings.mode {
                ReportMode::Verbose => self.render_verbose(entry),
                _ => self.render_concise(entry),
            };
            text.push_str(&block);
        }

        text.push_str(&self.render_tally(log));
        text
    }

    /// Header line followed by a blank line.
    pub fn render_header(&self) -> String {
        format!("{} {}\n\n", self.labels().header, self.title)
    }

    /// Question, numbered options, answers and correctness, then a blank line.
    pub fn render_verbose(&self, entry: &Entry) -> String {
        let labels = self.labels();
        let mut block = String::new();

        block.push_str(&format!(
            "{} {}: {}\n",
            labels.question, entry.number, entry.question.text
        ));

        for (i, option) in entry.question.options.iter().enumerate() {
            block.push_str(&format!("{}) {}\n", i + 1, option));
        }

        block.push_str(&format!(
            "{} {}\n",
            labels.answers,
            join_answers(&entry.answers, " ")
        ));
        block.push_str(&format!(
            "{} {}\n",
            labels.correct,
            labels.flag(entry.successful)
        ));
        block.push('\n');

        block
    }

    /// `<number>(<+|->): <a,b,c>` on a single line.
    pub fn render_concise(&self, entry: &Entry) -> String {
        let sign = if entry.successful { '+' } else { '-' };
        format!(
            "{}({}): {}\n",
            entry.number,
            sign,
            join_answers(&entry.answers, ",")
        )
    }

    /// Total entry count and successful count, one per line.
    pub fn render_tally(&self, log: &QuizLog) -> String {
        let labels = self.labels();
        format!(
            "{} {}\n{} {}\n",
            labels.total,
            log.total(),
            labels.successful,
            log.successful()
        )
    }

    fn labels(&self) -> &'static Labels {
        Labels::for_locale(self.settings.locale)
    }
}

fn join_answers(answers: &[u32], separator: &str) -> String {
    answers
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
