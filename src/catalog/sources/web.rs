//! Catalog fetched from a plain URL

use std::sync::Arc;

use crate::catalog::source::CatalogSource;
use crate::error::LoadError;
use crate::fetch::{FetchRequest, Fetcher};

pub struct WebSource {
    url: String,
    fetcher: Arc<dyn Fetcher>,
}

impl WebSource {
    pub fn new(url: &str, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            url: url.to_string(),
            fetcher,
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for WebSource {
    async fn load(&self) -> Result<String, LoadError> {
        Ok(self.fetcher.fetch(FetchRequest::get(&self.url)).await?)
    }
}
