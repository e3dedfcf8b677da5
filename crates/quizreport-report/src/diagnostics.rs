//! Diagnostics hooks for report generation.

use quizreport_core::config::{OutputMode, OutputSettings};

use crate::error::ReportError;

/// Receives notable events from the report generator.
pub trait Diagnostics: Send + Sync {
    fn on_disabled(&self);
    fn on_sink_resolved(&self, output: &OutputSettings);
    fn on_error(&self, error: &ReportError);
}

/// Forwards events to `tracing`.
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn on_disabled(&self) {
        tracing::debug!("report output disabled, skipping report generation");
    }

    fn on_sink_resolved(&self, output: &OutputSettings) {
        match (output.mode, &output.path) {
            (OutputMode::File, Some(path)) => {
                tracing::trace!("report will be written to {}", path.display())
            }
            (mode, _) => tracing::trace!("report will be written to {mode}"),
        }
    }

    fn on_error(&self, error: &ReportError) {
        tracing::warn!("report generation failed: {error}");
    }
}

/// No-op diagnostics.
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn on_disabled(&self) {}
    fn on_sink_resolved(&self, _: &OutputSettings) {}
    fn on_error(&self, _: &ReportError) {}
}
