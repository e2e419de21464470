//! Catalog stored as a file inside a gist
//!
//! The raw file link contains a revision hash, so it is scraped from the
//! gist's index page before the file itself is fetched.

use std::sync::Arc;

use regex::Regex;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::catalog::source::CatalogSource;
use crate::config::GIST_BASE_URL;
use crate::error::LoadError;
use crate::fetch::{FetchRequest, Fetcher};

/// Gist-backed catalog source
///
/// Index page, raw link and file content are each fetched at most once
/// per instance.
pub struct GistSource {
    id: String,
    file_name: String,
    base_url: String,
    fetcher: Arc<dyn Fetcher>,
    index_content: OnceCell<String>,
    raw_url: OnceCell<String>,
    content: OnceCell<String>,
}

impl GistSource {
    /// Creates a source for `file_name` in gist `id` on gist.github.com
    pub fn new(id: &str, file_name: &str, fetcher: Arc<dyn Fetcher>) -> Self {
        Self::with_base_url(GIST_BASE_URL, id, file_name, fetcher)
    }

    /// Creates a source with a custom gist host
    pub fn with_base_url(
        base_url: &str,
        id: &str,
        file_name: &str,
        fetcher: Arc<dyn Fetcher>,
    ) -> Self {
        Self {
            id: id.to_string(),
            file_name: file_name.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher,
            index_content: OnceCell::new(),
            raw_url: OnceCell::new(),
            content: OnceCell::new(),
        }
    }

    /// Parses an `ID:FILE` resource string
    pub fn parse(resource: &str, fetcher: Arc<dyn Fetcher>) -> Result<Self, LoadError> {
        match resource.split_once(':') {
            Some((id, file_name)) if !id.is_empty() && !file_name.is_empty() => {
                Ok(Self::new(id, file_name, fetcher))
            }
            _ => Err(LoadError::InvalidGistResource(resource.to_string())),
        }
    }

    async fn index_content(&self) -> Result<&str, LoadError> {
        self.index_content
            .get_or_try_init(|| async {
                let url = format!("{}/{}", self.base_url, self.id);
                debug!("Fetching gist index {}", url);
                Ok::<_, LoadError>(self.fetcher.fetch(FetchRequest::get(url)).await?)
            })
            .await
            .map(String::as_str)
    }

    /// Returns the absolute link of the raw catalog file
    pub async fn raw_url(&self) -> Result<&str, LoadError> {
        self.raw_url
            .get_or_try_init(|| async {
                let content = self.index_content().await?;
                let link = find_raw_link(content, &self.id, &self.file_name).ok_or_else(|| {
                    LoadError::GistLinkNotFound {
                        id: self.id.clone(),
                        file_name: self.file_name.clone(),
                    }
                })?;
                Ok::<_, LoadError>(format!("{}{}", self.base_url, link))
            })
            .await
            .map(String::as_str)
    }
}

#[async_trait::async_trait]
impl CatalogSource for GistSource {
    async fn load(&self) -> Result<String, LoadError> {
        self.content
            .get_or_try_init(|| async {
                let url = self.raw_url().await?;
                Ok::<_, LoadError>(self.fetcher.fetch(FetchRequest::get(url)).await?)
            })
            .await
            .cloned()
    }
}

/// Finds the first `/raw/<id>/<hex hash>/<file_name>` path in an index page
fn find_raw_link<'a>(content: &'a str, id: &str, file_name: &str) -> Option<&'a str> {
    let pattern = format!(
        "/raw/{}/[0-9a-f]+/{}",
        regex::escape(id),
        regex::escape(file_name)
    );
    Regex::new(&pattern)
        .ok()?
        .find(content)
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::HttpFetcher;
    use crate::fetch::fetcher::MockFetcher;
    use mockito::Server;

    const INDEX_PAGE: &str = r#"<html><body>
        <a href="/raw/488675/0f3e9a/other.json">other</a>
        <a href="/raw/488675/4b1c8d2e/toolslist.json">raw</a>
        <a href="/raw/488675/ffff/toolslist.json">older</a>
    </body></html>"#;

    #[test]
    fn find_raw_link_returns_first_matching_path() {
        let link = find_raw_link(INDEX_PAGE, "488675", "toolslist.json");

        assert_eq!(link, Some("/raw/488675/4b1c8d2e/toolslist.json"));
    }

    #[test]
    fn find_raw_link_escapes_file_name() {
        let page = r#"<a href="/raw/1/ab/toolslistXjson">x</a>"#;

        assert_eq!(find_raw_link(page, "1", "toolslist.json"), None);
    }

    #[test]
    fn find_raw_link_requires_revision_hash() {
        let page = r#"<a href="/raw/1//toolslist.json">x</a>
            <a href="/raw/1/9c/toolslist.json">y</a>"#;

        assert_eq!(
            find_raw_link(page, "1", "toolslist.json"),
            Some("/raw/1/9c/toolslist.json")
        );
    }

    #[test]
    fn parse_splits_id_and_file_name() {
        let source = GistSource::parse("488675:toolslist.json", Arc::new(MockFetcher::new()))
            .unwrap();

        assert_eq!(source.id, "488675");
        assert_eq!(source.file_name, "toolslist.json");
        assert_eq!(source.base_url, GIST_BASE_URL);
    }

    #[test]
    fn parse_rejects_missing_file_name() {
        let result = GistSource::parse("488675:", Arc::new(MockFetcher::new()));

        assert!(matches!(
            result,
            Err(LoadError::InvalidGistResource(resource)) if resource == "488675:"
        ));
    }

    #[tokio::test]
    async fn load_resolves_raw_link_and_fetches_each_resource_once() {
        let mut server = Server::new_async().await;

        let index = server
            .mock("GET", "/488675")
            .with_status(200)
            .with_body(INDEX_PAGE)
            .expect(1)
            .create_async()
            .await;
        let raw = server
            .mock("GET", "/raw/488675/4b1c8d2e/toolslist.json")
            .with_status(200)
            .with_body(r#"{"x": {"name": "X", "url": "http://e/", "regexp": "v1"}}"#)
            .expect(1)
            .create_async()
            .await;

        let source = GistSource::with_base_url(
            &server.url(),
            "488675",
            "toolslist.json",
            Arc::new(HttpFetcher::new(None).unwrap()),
        );

        let link = source.raw_url().await.unwrap().to_string();
        let first = source.load().await.unwrap();
        let second = source.load().await.unwrap();

        index.assert_async().await;
        raw.assert_async().await;
        assert_eq!(
            link,
            format!("{}/raw/488675/4b1c8d2e/toolslist.json", server.url())
        );
        assert_eq!(first, second);
        assert!(first.contains(r#""regexp": "v1""#));
    }

    #[tokio::test]
    async fn load_fails_when_raw_link_is_missing() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|request| request.url == "https://gist.github.com/42")
            .times(1)
            .returning(|_| Ok("<html>no links here</html>".to_string()));

        let source = GistSource::new("42", "toolslist.json", Arc::new(fetcher));
        let result = source.load().await;

        assert!(matches!(
            result,
            Err(LoadError::GistLinkNotFound { id, file_name })
                if id == "42" && file_name == "toolslist.json"
        ));
    }
}
