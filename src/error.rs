use thiserror::Error;

/// Failure to obtain the content of a single page.
///
/// Never fatal for a run: the affected tool is reported as a web error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Reason: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Error Code: {0}")]
    Status(u16),

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid redirect from {0}")]
    Redirect(String),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] std::io::Error),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

/// Failure to load the catalog or the installed-versions document.
///
/// Fatal: the run aborts before any tool is checked.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch tools list: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid gist resource '{0}', expected ID:FILE")]
    InvalidGistResource(String),

    #[error("No raw link for file '{file_name}' found in gist {id}")]
    GistLinkNotFound { id: String, file_name: String },
}
