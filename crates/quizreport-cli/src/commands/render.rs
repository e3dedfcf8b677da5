//! The `quizreport render` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use quizreport_core::config::{load_config_from, AppConfig, Locale, OutputMode, ReportMode};
use quizreport_core::parser;
use quizreport_report::{ReportGenerator, ReportOutcome, TracingDiagnostics};

/// Command-line settings that win over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub mode: Option<ReportMode>,
    pub output: Option<OutputMode>,
    pub path: Option<PathBuf>,
    pub locale: Option<Locale>,
    pub title: Option<String>,
    pub disable: bool,
}

impl Overrides {
    fn apply(self, config: &mut AppConfig) {
        if let Some(mode) = self.mode {
            config.report.mode = mode;
        }
        if let Some(path) = self.path {
            config.report.output.mode = OutputMode::File;
            config.report.output.path = Some(path);
        }
        if let Some(output) = self.output {
            config.report.output.mode = output;
        }
        if let Some(locale) = self.locale {
            config.report.locale = locale;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        if self.disable {
            config.report.enabled = false;
        }
    }
}

pub fn execute(log_path: PathBuf, config_path: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    overrides.apply(&mut config);

    let log = parser::load_quiz_log(&log_path)?;

    let generator = ReportGenerator::from_config(&config, Arc::new(TracingDiagnostics));
    match generator.generate(&log) {
        ReportOutcome::Written => {
            if let (OutputMode::File, Some(path)) =
                (config.report.output.mode, &config.report.output.path)
            {
                tracing::info!("report written to {}", path.display());
            }
        }
        ReportOutcome::Disabled | ReportOutcome::Failed => {}
    }

    Ok(())
}
