use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use update_notifier::catalog::ResourceType;
use update_notifier::config;
use update_notifier::fetch::HttpFetcher;
use update_notifier::logging;
use update_notifier::notifier::{self, RunOptions};

#[derive(Parser)]
#[command(name = "update-notifier")]
#[command(
    version,
    about = "Checks download pages of installed tools and reports available updates"
)]
struct Cli {
    /// Path of the HTML report file
    #[arg(short, long, value_name = "PATH", default_value = config::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Path of the installed-versions file [default: ~/.updatenotifier.json]
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// How the tools list location is interpreted
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = ResourceType::Local)]
    resource: ResourceType,

    /// Tools list location: a path, a URL or ID:FILE of a gist
    /// [default: toolslist.json next to the executable]
    #[arg(short, long, value_name = "PATH|URL|ID:FILE")]
    tools: Option<String>,

    /// Write a log file
    #[arg(short, long)]
    log: bool,

    /// Path of the log file [default: updatenotifier.log next to the executable]
    #[arg(short = 'm', long = "logPath", value_name = "PATH")]
    log_path: Option<PathBuf>,

    /// Give up on a page after this many seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log
        .then(|| cli.log_path.clone().unwrap_or_else(config::default_log_path));
    let _guard = logging::init(log_file.as_deref())?;
    info!("update-notifier START");

    let options = RunOptions {
        input: cli.input.unwrap_or_else(config::default_input_path),
        output: cli.output,
        resource: cli.resource,
        tools: cli.tools.unwrap_or_else(|| {
            config::default_tools_path().to_string_lossy().into_owned()
        }),
    };
    let fetcher = Arc::new(HttpFetcher::new(cli.timeout.map(Duration::from_secs))?);

    let outcomes = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(notifier::run(&options, fetcher, std::io::stdout()))?;

    info!("update-notifier END ({} tools checked)", outcomes.len());
    Ok(())
}
