use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;

/// A trackable tool as described in the catalog
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ToolDefinition {
    /// Display name
    pub name: String,
    /// Download page scanned for the version string
    pub url: String,
    /// Regular expression whose match is the published version
    #[serde(rename = "regexp")]
    pub pattern: String,
    /// Charset label of the download page (UTF-8 when absent)
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Catalog key -> tool definition
pub type Catalog = BTreeMap<String, ToolDefinition>;

/// Catalog key -> installed version
pub type InstalledVersions = BTreeMap<String, String>;

/// Parses the tools catalog document
pub fn parse_catalog(content: &str) -> Result<Catalog, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Parse {
        document: "tools list",
        source,
    })
}

/// Parses the installed-versions document
pub fn parse_installed(content: &str) -> Result<InstalledVersions, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Parse {
        document: "input file",
        source,
    })
}

/// Reads and parses the installed-versions document at `path`
pub fn load_installed(path: &Path) -> Result<InstalledVersions, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_installed(&content)
}
