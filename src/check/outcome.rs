//! Result of checking one tool

/// Classification of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The download page could not be fetched
    WebError,
    /// The version pattern did not match the page
    NoMatch,
    /// The matched version differs from the installed one
    UpdateAvailable(String),
    /// The matched version equals the installed one
    UpToDate,
}

/// Outcome of checking one tool, consumed by every attached formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    pub url: String,
    pub installed: String,
    pub kind: OutcomeKind,
}

impl CheckOutcome {
    /// Matched version when it differs from the installed one
    pub fn new_version(&self) -> Option<&str> {
        match &self.kind {
            OutcomeKind::UpdateAvailable(version) => Some(version),
            _ => None,
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        self.kind == OutcomeKind::UpToDate
    }
}
