//! Run orchestration
//!
//! Loads both documents, drops installed entries the catalog does not know,
//! checks the remaining tools concurrently and closes the formatters once
//! every check has finished.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error, warn};

use crate::catalog::types::{load_installed, parse_catalog};
use crate::catalog::{Catalog, InstalledVersions, ResourceType, ToolDefinition, create_source};
use crate::check::{CheckOutcome, Checker, Layout};
use crate::error::LoadError;
use crate::fetch::Fetcher;
use crate::format::{ConsoleFormatter, Formatter, ReportFormatter};

/// Settings of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Installed-versions document
    pub input: PathBuf,
    /// HTML report file
    pub output: PathBuf,
    /// How `tools` is interpreted
    pub resource: ResourceType,
    /// Path, URL or `ID:FILE` of the tools catalog
    pub tools: String,
}

/// One tool scheduled for checking
#[derive(Debug, Clone, PartialEq, Eq)]
struct ToolCheck {
    tool: ToolDefinition,
    installed: String,
}

/// Checks every installed tool known to the catalog
pub struct UpdateNotifier {
    checks: Vec<ToolCheck>,
    layout: Layout,
}

impl UpdateNotifier {
    /// Pairs installed versions with their catalog entries.
    ///
    /// Unknown tools are logged and skipped. The output layout is fixed
    /// here, before any check runs.
    pub fn new(catalog: &Catalog, installed: InstalledVersions) -> Self {
        let mut checks = Vec::with_capacity(installed.len());
        for (key, version) in installed {
            match catalog.get(&key) {
                Some(tool) => checks.push(ToolCheck {
                    tool: tool.clone(),
                    installed: version,
                }),
                None => warn!("Unknown tool '{}'.", key),
            }
        }

        let layout = Layout::compute(
            checks
                .iter()
                .map(|c| (c.tool.name.as_str(), c.installed.as_str())),
        );

        Self { checks, layout }
    }

    /// Column layout shared by all console lines of this run
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Names of the tools that will be checked, in key order
    pub fn tool_names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.tool.name.as_str()).collect()
    }

    /// Checks all tools concurrently, then closes each formatter once.
    ///
    /// Outcomes are returned in key order; formatters see them in completion order.
    pub async fn run(
        &self,
        fetcher: &dyn Fetcher,
        formatters: &[Arc<dyn Formatter>],
    ) -> Vec<CheckOutcome> {
        let checkers: Vec<Checker> = self
            .checks
            .iter()
            .map(|c| {
                let mut checker = Checker::new(c.tool.clone(), c.installed.clone());
                for formatter in formatters {
                    checker.attach(Arc::clone(formatter));
                }
                checker
            })
            .collect();
        debug!("Checking {} tools", checkers.len());

        let outcomes = join_all(checkers.iter().map(|checker| checker.check(fetcher))).await;

        for formatter in formatters {
            if let Err(e) = formatter.close() {
                error!("Failed to close formatter: {}", e);
            }
        }

        outcomes
    }
}

/// Loads both documents and checks every known tool.
///
/// Console lines go to `console`, the report to `options.output`.
/// Only document loading can fail; per-tool failures are part of the outcomes.
pub async fn run<W>(
    options: &RunOptions,
    fetcher: Arc<dyn Fetcher>,
    console: W,
) -> Result<Vec<CheckOutcome>, LoadError>
where
    W: Write + Send + 'static,
{
    // Read the tools and their installed version from the input file
    let installed = load_installed(&options.input)?;

    let source = create_source(options.resource, &options.tools, Arc::clone(&fetcher))?;
    let catalog = parse_catalog(&source.load().await?)?;
    debug!("Loaded {} catalog entries", catalog.len());

    let notifier = UpdateNotifier::new(&catalog, installed);
    let formatters: Vec<Arc<dyn Formatter>> = vec![
        Arc::new(ConsoleFormatter::with_writer(notifier.layout(), console)),
        Arc::new(ReportFormatter::new(&options.output)),
    ];

    Ok(notifier.run(fetcher.as_ref(), &formatters).await)
}
