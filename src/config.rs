use std::path::{Path, PathBuf};

// =============================================================================
// HTTP request constants
// =============================================================================

/// User-Agent sent with every request; some download pages only serve
/// their version banner to browsers
pub const USER_AGENT: &str = "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 6.0)";

/// Accept-Language sent with every request
pub const ACCEPT_LANGUAGE: &str = "de";

/// Accept-Encoding sent with every request (gzip bodies are decoded in the fetcher)
pub const ACCEPT_ENCODING: &str = "gzip";

/// Host serving gist index pages and raw gist files
pub const GIST_BASE_URL: &str = "https://gist.github.com";

// =============================================================================
// Output constants
// =============================================================================

/// Marker printed in the version column when a tool could not be checked
pub const ERROR_MARKER: &str = "ERROR:";

/// Default report file name
pub const DEFAULT_OUTPUT_FILE: &str = "updatenotifications.html";

/// Default installed-versions file name (inside the home directory)
pub const DEFAULT_INPUT_FILE: &str = ".updatenotifier.json";

/// Default tools catalog file name (next to the executable)
pub const DEFAULT_TOOLS_FILE: &str = "toolslist.json";

/// Default log file name (next to the executable)
pub const DEFAULT_LOG_FILE: &str = "updatenotifier.log";

// =============================================================================
// Log rotation constants
// =============================================================================

/// Log file size cap in bytes before it is rotated
pub const LOG_MAX_BYTES: u64 = 65_000;

/// Number of rotated log files kept next to the active one
pub const LOG_BACKUP_COUNT: usize = 1;

/// Returns the default path of the installed-versions document
/// (`~/.updatenotifier.json`, or `./.updatenotifier.json` without a home directory).
pub fn default_input_path() -> PathBuf {
    input_path_with_home(dirs::home_dir())
}

/// Returns the default path of the tools catalog (next to the executable).
pub fn default_tools_path() -> PathBuf {
    exe_dir().join(DEFAULT_TOOLS_FILE)
}

/// Returns the default path of the log file (next to the executable).
pub fn default_log_path() -> PathBuf {
    exe_dir().join(DEFAULT_LOG_FILE)
}

fn exe_dir() -> PathBuf {
    exe_dir_from(std::env::current_exe().ok().as_deref())
}

fn input_path_with_home(home_dir: Option<PathBuf>) -> PathBuf {
    home_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_INPUT_FILE)
}

fn exe_dir_from(exe: Option<&Path>) -> PathBuf {
    exe.and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
