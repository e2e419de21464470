//! Catalog source abstraction

use std::path::PathBuf;
use std::sync::Arc;

use clap::ValueEnum;

use crate::catalog::sources::{GistSource, LocalSource, WebSource};
use crate::error::LoadError;
use crate::fetch::Fetcher;

/// Where the tools catalog is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResourceType {
    /// Local file path
    #[default]
    Local,
    /// Plain URL
    Web,
    /// `ID:FILE` of a file in a gist
    Gist,
}

/// Trait for producing the text of the tools catalog document
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the catalog document content
    async fn load(&self) -> Result<String, LoadError>;
}

/// Creates the catalog source for `resource`, interpreting `tools` accordingly
pub fn create_source(
    resource: ResourceType,
    tools: &str,
    fetcher: Arc<dyn Fetcher>,
) -> Result<Box<dyn CatalogSource>, LoadError> {
    let source: Box<dyn CatalogSource> = match resource {
        ResourceType::Local => Box::new(LocalSource::new(PathBuf::from(tools))),
        ResourceType::Web => Box::new(WebSource::new(tools, fetcher)),
        ResourceType::Gist => Box::new(GistSource::parse(tools, fetcher)?),
    };
    Ok(source)
}
