//! Content fetching layer
//!
//! Downloads a page and returns its decoded text. Every request carries a
//! fixed browser-like header set; a single 302 redirect is followed, gzip
//! bodies are inflated and the bytes are decoded with the requested charset.
//!
//! # Modules
//!
//! - [`fetcher`]: `Fetcher` trait, request type and the non-failing `fetch_or_report`
//! - [`http`]: reqwest-backed `HttpFetcher`
//! - [`decode`]: gzip and charset decoding of response bodies

pub mod decode;
pub mod fetcher;
pub mod http;

pub use fetcher::{FetchRequest, Fetcher, fetch_or_report};
pub use http::HttpFetcher;
