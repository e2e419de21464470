//! Fetcher trait for retrieving page content

#[cfg(test)]
use mockall::automock;

use tracing::warn;

use crate::error::FetchError;

/// A single page request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    /// Form fields; when present the request is sent as a urlencoded POST
    pub form: Option<Vec<(String, String)>>,
    /// Charset label used to decode the body (UTF-8 when absent)
    pub encoding: Option<String>,
}

impl FetchRequest {
    /// Creates a GET request for `url`
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Turns the request into a POST carrying `form`
    pub fn with_form(mut self, form: Vec<(String, String)>) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_encoding(mut self, encoding: Option<String>) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Trait for fetching the text content of a page
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches and decodes the page described by `request`
    ///
    /// # Returns
    /// * `Ok(String)` - Decoded page content
    /// * `Err(FetchError)` - Network, HTTP status or decoding failure
    async fn fetch(&self, request: FetchRequest) -> Result<String, FetchError>;
}

/// Fetches a page, reporting any failure instead of returning it.
///
/// Failures are logged with their status code or reason and yield `None`.
pub async fn fetch_or_report(fetcher: &dyn Fetcher, request: FetchRequest) -> Option<String> {
    let url = request.url.clone();
    fetcher
        .fetch(request)
        .await
        .inspect_err(|e| warn!("Failed to fetch {}: {}", url, e))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_creates_request_without_form_and_encoding() {
        let request = FetchRequest::get("http://example.com/");

        assert_eq!(
            request,
            FetchRequest {
                url: "http://example.com/".to_string(),
                form: None,
                encoding: None,
            }
        );
    }

    #[test]
    fn builder_methods_set_form_and_encoding() {
        let request = FetchRequest::get("http://example.com/")
            .with_form(vec![("q".to_string(), "tool".to_string())])
            .with_encoding(Some("iso-8859-1".to_string()));

        assert_eq!(
            request.form,
            Some(vec![("q".to_string(), "tool".to_string())])
        );
        assert_eq!(request.encoding.as_deref(), Some("iso-8859-1"));
    }

    #[tokio::test]
    async fn fetch_or_report_returns_content_on_success() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|request| request.url == "http://example.com/")
            .times(1)
            .returning(|_| Ok("page".to_string()));

        let content = fetch_or_report(&fetcher, FetchRequest::get("http://example.com/")).await;

        assert_eq!(content, Some("page".to_string()));
    }

    #[tokio::test]
    async fn fetch_or_report_swallows_errors() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Err(FetchError::Status(500)));

        let content = fetch_or_report(&fetcher, FetchRequest::get("http://example.com/")).await;

        assert_eq!(content, None);
    }
}
