//! Input document fixtures

use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

use update_notifier::catalog::ResourceType;
use update_notifier::notifier::RunOptions;

/// Catalog entry as it appears in the tools list
pub fn tool_entry(name: &str, url: &str, regexp: &str) -> Value {
    json!({ "name": name, "url": url, "regexp": regexp })
}

/// Installed-versions file, catalog file and report path inside a temp dir
pub struct Documents {
    pub temp_dir: TempDir,
    pub input: PathBuf,
    pub tools: PathBuf,
    pub output: PathBuf,
}

impl Documents {
    /// Writes both documents as JSON
    pub fn new(catalog: &Value, installed: &Value) -> Self {
        Self::from_raw(&catalog.to_string(), &installed.to_string())
    }

    /// Writes both documents verbatim
    pub fn from_raw(catalog: &str, installed: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("updatenotifier.json");
        let tools = temp_dir.path().join("toolslist.json");
        let output = temp_dir.path().join("updatenotifications.html");
        std::fs::write(&input, installed).unwrap();
        std::fs::write(&tools, catalog).unwrap();

        Self {
            temp_dir,
            input,
            tools,
            output,
        }
    }

    /// Options reading the catalog from the local file
    pub fn local_options(&self) -> RunOptions {
        RunOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            resource: ResourceType::Local,
            tools: self.tools.to_string_lossy().into_owned(),
        }
    }

    pub fn report(&self) -> Option<String> {
        std::fs::read_to_string(&self.output).ok()
    }
}
