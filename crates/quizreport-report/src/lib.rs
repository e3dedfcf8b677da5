//! quizreport-report — Plain-text quiz report rendering.
//!
//! Turns a completed quiz log into a verbose or concise report written to
//! stdout or a file.

pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod labels;
pub mod sink;

pub use diagnostics::{Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use error::ReportError;
pub use generator::{ReportGenerator, ReportOutcome};
