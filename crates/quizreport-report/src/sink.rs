//! Report output sinks.
//!
//! A [`Sink`] is opened right before the report body is written and dropped
//! right after. Dropping a file sink closes the file on every exit path;
//! [`Sink::finish`] flushes explicitly so write errors are not lost in `Drop`.

use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};

use quizreport_core::config::{OutputMode, OutputSettings};

use crate::error::ReportError;

/// An open report destination.
pub enum Sink {
    Console(StdoutLock<'static>),
    File(BufWriter<File>),
}

impl Sink {
    /// Open the sink described by `settings`.
    ///
    /// File sinks are created or truncated. A file sink without a path is
    /// treated as unavailable.
    pub fn open(settings: &OutputSettings) -> Result<Self, ReportError> {
        match settings.mode {
            OutputMode::Console => Ok(Sink::Console(io::stdout().lock())),
            OutputMode::File => {
                let path = settings.path.clone().unwrap_or_default();
                if path.as_os_str().is_empty() {
                    return Err(ReportError::SinkUnavailable {
                        path,
                        source: io::Error::new(
                            io::ErrorKind::InvalidInput,
                            "no report path configured",
                        ),
                    });
                }
                let file = File::create(&path)
                    .map_err(|source| ReportError::SinkUnavailable { path, source })?;
                Ok(Sink::File(BufWriter::new(file)))
            }
        }
    }

    /// Flush buffered output and release the sink.
    pub fn finish(mut self) -> Result<(), ReportError> {
        self.flush()?;
        Ok(())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Console(out) => out.write(buf),
            Sink::File(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Console(out) => out.flush(),
            Sink::File(out) => out.flush(),
        }
    }
}
