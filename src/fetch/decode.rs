//! Response body decoding

use std::io::Read;

use encoding_rs::{Encoding, UTF_8};
use flate2::read::GzDecoder;
use reqwest::header::{CONTENT_ENCODING, HeaderMap};

use crate::error::FetchError;

/// Returns true if the response declares a gzip content-encoding
pub fn is_gzip(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| {
            let v = v.trim();
            v.eq_ignore_ascii_case("gzip") || v.eq_ignore_ascii_case("x-gzip")
        })
}

/// Inflates (when `gzipped`) and decodes a response body.
///
/// `encoding` is a WHATWG charset label; UTF-8 is used when absent.
/// Malformed byte sequences are replaced with U+FFFD.
pub fn decode_body(
    bytes: &[u8],
    gzipped: bool,
    encoding: Option<&str>,
) -> Result<String, FetchError> {
    let encoding = resolve_encoding(encoding)?;

    let text = if gzipped {
        let mut inflated = Vec::new();
        GzDecoder::new(bytes).read_to_end(&mut inflated)?;
        encoding.decode(&inflated).0.into_owned()
    } else {
        encoding.decode(bytes).0.into_owned()
    };

    Ok(text)
}

fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding, FetchError> {
    match label {
        None => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| FetchError::UnknownEncoding(label.to_string())),
    }
}
