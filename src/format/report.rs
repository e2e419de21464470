//! HTML report listing tools that need attention

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::check::CheckOutcome;
use crate::format::formatter::Formatter;

const DOCUMENT_HEAD: &str = "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>Update Notifications</title>
</head>
<body>
<table>
<tr><th>Tool</th><th>Installed</th><th>Status</th></tr>
";

const DOCUMENT_TAIL: &str = "</table>
</body>
</html>
";

/// Collects one table row per tool that is not up to date
///
/// The report file is replaced on close, and only if at least one row was
/// collected; an all-up-to-date run leaves any previous report untouched.
pub struct ReportFormatter {
    path: PathBuf,
    rows: Mutex<Vec<String>>,
}

impl ReportFormatter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rows: Mutex::new(Vec::new()),
        }
    }

    fn push_row(&self, outcome: &CheckOutcome, class: &str, status: &str) {
        let row = format!(
            "<tr class=\"{}\"><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td></tr>\n",
            class,
            escape(&outcome.url),
            escape(&outcome.name),
            escape(&outcome.installed),
            escape(status)
        );
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(row);
    }
}

impl Formatter for ReportFormatter {
    fn web_error(&self, outcome: &CheckOutcome) {
        self.push_row(outcome, "error", "Web Error.");
    }

    fn no_match(&self, outcome: &CheckOutcome) {
        self.push_row(outcome, "error", "No Match.");
    }

    fn update(&self, outcome: &CheckOutcome, new_version: &str) {
        self.push_row(
            outcome,
            "update",
            &format!("Version {} available.", new_version),
        );
    }

    fn up_to_date(&self, _outcome: &CheckOutcome) {}

    fn close(&self) -> std::io::Result<()> {
        let rows = std::mem::take(&mut *self.rows.lock().unwrap_or_else(PoisonError::into_inner));
        if rows.is_empty() {
            return Ok(());
        }

        let mut document = String::from(DOCUMENT_HEAD);
        for row in &rows {
            document.push_str(row);
        }
        document.push_str(DOCUMENT_TAIL);

        std::fs::write(&self.path, document)?;
        info!("Wrote {} report rows to {}", rows.len(), self.path.display());
        Ok(())
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
