//! Catalog read from the local file system

use std::path::PathBuf;

use crate::catalog::source::CatalogSource;
use crate::error::LoadError;

pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl CatalogSource for LocalSource {
    async fn load(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.path.display().to_string(),
                source,
            })
    }
}
