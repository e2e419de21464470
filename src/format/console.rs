//! Console output, one aligned line per checked tool

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::error;

use crate::check::{CheckOutcome, Layout};
use crate::config::ERROR_MARKER;
use crate::format::formatter::Formatter;

/// Writes one fixed-width line per outcome as soon as it is reported
pub struct ConsoleFormatter<W: Write + Send> {
    layout: Layout,
    writer: Mutex<W>,
}

impl<W: Write + Send> ConsoleFormatter<W> {
    pub fn with_writer(layout: Layout, writer: W) -> Self {
        Self {
            layout,
            writer: Mutex::new(writer),
        }
    }

    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", line) {
            error!("Failed to write console output: {}", e);
        }
    }
}

impl<W: Write + Send> Formatter for ConsoleFormatter<W> {
    fn web_error(&self, outcome: &CheckOutcome) {
        let columns = self.layout.columns(&outcome.name, ERROR_MARKER);
        self.write_line(&format!("{} Web Error.", columns));
    }

    fn no_match(&self, outcome: &CheckOutcome) {
        let columns = self.layout.columns(&outcome.name, ERROR_MARKER);
        self.write_line(&format!("{} No Match.", columns));
    }

    fn update(&self, outcome: &CheckOutcome, new_version: &str) {
        let columns = self.layout.columns(&outcome.name, &outcome.installed);
        self.write_line(&format!("{} Version {} available.", columns, new_version));
    }

    fn up_to_date(&self, outcome: &CheckOutcome) {
        self.write_line(&self.layout.columns(&outcome.name, &outcome.installed));
    }

    fn close(&self) -> std::io::Result<()> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}
