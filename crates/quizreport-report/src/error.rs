//! Report error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The configured report file could not be opened.
    #[error("report sink unavailable: {}: {source}", path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an already-open sink failed.
    #[error("failed to write report: {0}")]
    SinkWrite(#[from] io::Error),
}

impl ReportError {
    /// Returns `true` if the sink never opened, so nothing was written.
    pub fn is_sink_unavailable(&self) -> bool {
        matches!(self, ReportError::SinkUnavailable { .. })
    }
}
