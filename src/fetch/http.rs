//! reqwest-backed page fetcher

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{
    ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue, LOCATION,
};
use tracing::debug;
use url::Url;

use crate::config;
use crate::error::FetchError;
use crate::fetch::decode::{decode_body, is_gzip};
use crate::fetch::fetcher::{FetchRequest, Fetcher};

/// Fetcher implementation issuing real HTTP requests
///
/// Automatic redirects are disabled: a 302 answer is followed exactly once,
/// any further redirect is reported as an HTTP error. Cookies set by any
/// response, the 302 included, are sent with later requests of the same
/// fetcher.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher; requests never time out unless `timeout` is set
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(config::ACCEPT_LANGUAGE),
        );
        headers.insert(
            ACCEPT_ENCODING,
            HeaderValue::from_static(config::ACCEPT_ENCODING),
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(config::USER_AGENT)
            .default_headers(headers)
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn send(
        &self,
        url: &Url,
        form: Option<&[(String, String)]>,
    ) -> Result<reqwest::Response, FetchError> {
        let request = match form {
            Some(fields) => self
                .client
                .post(url.as_str())
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encode_form(fields)),
            None => self.client.get(url.as_str()),
        };

        Ok(request.send().await?)
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: FetchRequest) -> Result<String, FetchError> {
        let url = Url::parse(&request.url).map_err(|source| FetchError::InvalidUrl {
            url: request.url.clone(),
            source,
        })?;

        let mut response = self.send(&url, request.form.as_deref()).await?;

        if response.status() == StatusCode::FOUND {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| FetchError::Redirect(url.to_string()))?;
            let target = resolve_redirect(&url, location)
                .map_err(|_| FetchError::Redirect(url.to_string()))?;
            debug!("Following redirect {} -> {}", url, target);

            // Like a browser, the redirected request is a plain GET
            response = self.send(&target, None).await?;
        }

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let gzipped = is_gzip(response.headers());
        let body = response.bytes().await?;

        decode_body(&body, gzipped, request.encoding.as_deref())
    }
}

/// Resolves a `Location` header value against the URL that produced it.
///
/// Handles absolute URLs, root-relative and relative paths, and removes
/// `.`/`..` segments the way a browser does.
pub fn resolve_redirect(base: &Url, location: &str) -> Result<Url, url::ParseError> {
    base.join(location.trim())
}

fn encode_form(fields: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}
