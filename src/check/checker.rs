//! Version check of a single tool

use std::sync::Arc;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::catalog::ToolDefinition;
use crate::check::outcome::{CheckOutcome, OutcomeKind};
use crate::fetch::{FetchRequest, Fetcher, fetch_or_report};
use crate::format::Formatter;

/// Checks one tool and pushes the outcome to its attached formatters
pub struct Checker {
    tool: ToolDefinition,
    installed: String,
    formatters: Vec<Arc<dyn Formatter>>,
}

impl Checker {
    pub fn new(tool: ToolDefinition, installed: impl Into<String>) -> Self {
        Self {
            tool,
            installed: installed.into(),
            formatters: Vec::new(),
        }
    }

    /// Attaches a formatter that receives the outcome of this check
    pub fn attach(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatters.push(formatter);
    }

    /// Fetches the tool's page, classifies the result and reports it
    pub async fn check(&self, fetcher: &dyn Fetcher) -> CheckOutcome {
        let request =
            FetchRequest::get(&self.tool.url).with_encoding(self.tool.encoding.clone());
        let content = fetch_or_report(fetcher, request).await;

        let kind = classify(content.as_deref(), &self.tool.pattern, &self.installed);
        match &kind {
            OutcomeKind::UpdateAvailable(version) => {
                info!("{} @ {} -> {}", self.tool.name, self.installed, version)
            }
            OutcomeKind::UpToDate => debug!("{} @ {}", self.tool.name, self.installed),
            OutcomeKind::NoMatch => {
                debug!("{}: no match for '{}'", self.tool.name, self.tool.pattern)
            }
            OutcomeKind::WebError => {
                debug!("{}: no response from {}", self.tool.name, self.tool.url)
            }
        }

        let outcome = CheckOutcome {
            name: self.tool.name.clone(),
            url: self.tool.url.clone(),
            installed: self.installed.clone(),
            kind,
        };
        for formatter in &self.formatters {
            formatter.report(&outcome);
        }
        outcome
    }
}

/// Classifies fetched page content against the installed version.
///
/// `None` content is a web error. Otherwise the first match of `pattern`
/// (the whole match) is compared to `installed` by plain string equality:
/// any difference is reported as an available update.
pub fn classify(content: Option<&str>, pattern: &str, installed: &str) -> OutcomeKind {
    let Some(content) = content else {
        return OutcomeKind::WebError;
    };

    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => {
            warn!("Invalid version pattern '{}': {}", pattern, e);
            return OutcomeKind::NoMatch;
        }
    };

    match regex.find(content) {
        None => OutcomeKind::NoMatch,
        Some(m) if m.as_str() != installed => {
            OutcomeKind::UpdateAvailable(m.as_str().to_string())
        }
        Some(_) => OutcomeKind::UpToDate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::fetch::fetcher::MockFetcher;
    use rstest::rstest;
    use std::sync::Mutex;

    /// Formatter recording every outcome it receives
    #[derive(Default)]
    struct RecordingFormatter {
        outcomes: Mutex<Vec<CheckOutcome>>,
    }

    impl Formatter for RecordingFormatter {
        fn web_error(&self, outcome: &CheckOutcome) {
            self.outcomes.lock().unwrap().push(outcome.clone());
        }

        fn no_match(&self, outcome: &CheckOutcome) {
            self.outcomes.lock().unwrap().push(outcome.clone());
        }

        fn update(&self, outcome: &CheckOutcome, _new_version: &str) {
            self.outcomes.lock().unwrap().push(outcome.clone());
        }

        fn up_to_date(&self, outcome: &CheckOutcome) {
            self.outcomes.lock().unwrap().push(outcome.clone());
        }

        fn close(&self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn tool(pattern: &str) -> ToolDefinition {
        ToolDefinition {
            name: "X".to_string(),
            url: "http://e/".to_string(),
            pattern: pattern.to_string(),
            encoding: None,
        }
    }

    #[rstest]
    #[case(None, "v1", "1.0", OutcomeKind::WebError)]
    #[case(Some("nothing here"), r"v([0-9.]+)", "1.0", OutcomeKind::NoMatch)]
    #[case(
        Some("current v1.1 release"),
        r"v([0-9.]+)",
        "1.0",
        OutcomeKind::UpdateAvailable("v1.1".to_string())
    )]
    #[case(Some("current v1.1 release"), r"v([0-9.]+)", "v1.1", OutcomeKind::UpToDate)]
    #[case(
        Some("v0.9 is out"),
        r"v([0-9.]+)",
        "v1.0",
        OutcomeKind::UpdateAvailable("v0.9".to_string())
    )]
    #[case(Some("v1.0 and v2.0"), r"v[0-9.]+", "v1.0", OutcomeKind::UpToDate)]
    #[case(Some("anything"), r"v([0-9", "1.0", OutcomeKind::NoMatch)]
    fn classify_returns_expected_kind(
        #[case] content: Option<&str>,
        #[case] pattern: &str,
        #[case] installed: &str,
        #[case] expected: OutcomeKind,
    ) {
        assert_eq!(classify(content, pattern, installed), expected);
    }

    #[tokio::test]
    async fn check_reports_update_to_every_formatter() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|request| request.url == "http://e/" && request.encoding.is_none())
            .times(1)
            .returning(|_| Ok("current v1.1 release".to_string()));

        let first = Arc::new(RecordingFormatter::default());
        let second = Arc::new(RecordingFormatter::default());
        let mut checker = Checker::new(tool(r"v([0-9.]+)"), "1.0");
        checker.attach(first.clone());
        checker.attach(second.clone());

        let outcome = checker.check(&fetcher).await;

        let expected = CheckOutcome {
            name: "X".to_string(),
            url: "http://e/".to_string(),
            installed: "1.0".to_string(),
            kind: OutcomeKind::UpdateAvailable("v1.1".to_string()),
        };
        assert_eq!(outcome, expected);
        assert_eq!(*first.outcomes.lock().unwrap(), vec![expected.clone()]);
        assert_eq!(*second.outcomes.lock().unwrap(), vec![expected]);
    }

    #[tokio::test]
    async fn check_passes_tool_encoding_to_fetcher() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|request| request.encoding.as_deref() == Some("windows-1252"))
            .times(1)
            .returning(|_| Ok("v2".to_string()));

        let mut definition = tool("v2");
        definition.encoding = Some("windows-1252".to_string());
        let outcome = Checker::new(definition, "v2").check(&fetcher).await;

        assert!(outcome.is_up_to_date());
    }

    #[tokio::test]
    async fn check_reports_web_error_when_fetch_fails() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Err(FetchError::Status(503)));

        let formatter = Arc::new(RecordingFormatter::default());
        let mut checker = Checker::new(tool("v1"), "1.0");
        checker.attach(formatter.clone());

        let outcome = checker.check(&fetcher).await;

        assert_eq!(outcome.kind, OutcomeKind::WebError);
        assert_eq!(outcome.new_version(), None);
        assert_eq!(formatter.outcomes.lock().unwrap().len(), 1);
    }
}
