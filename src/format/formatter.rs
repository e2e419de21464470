//! Formatter trait for rendering check outcomes

use crate::check::{CheckOutcome, OutcomeKind};

/// Trait for sinks that render check outcomes
///
/// A formatter is shared by every concurrently running check, so each
/// implementation guards its own state and holds that guard for one call only.
pub trait Formatter: Send + Sync {
    /// The tool's download page could not be fetched
    fn web_error(&self, outcome: &CheckOutcome);

    /// The version pattern did not match the download page
    fn no_match(&self, outcome: &CheckOutcome);

    /// A version different from the installed one was found
    fn update(&self, outcome: &CheckOutcome, new_version: &str);

    /// The installed version is current
    fn up_to_date(&self, outcome: &CheckOutcome);

    /// Flushes accumulated output; called once after all checks finished
    fn close(&self) -> std::io::Result<()>;

    /// Dispatches `outcome` to the method matching its kind
    fn report(&self, outcome: &CheckOutcome) {
        match &outcome.kind {
            OutcomeKind::WebError => self.web_error(outcome),
            OutcomeKind::NoMatch => self.no_match(outcome),
            OutcomeKind::UpdateAvailable(version) => self.update(outcome, version),
            OutcomeKind::UpToDate => self.up_to_date(outcome),
        }
    }
}
