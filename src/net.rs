//! Raw HTTP transport: one request in, body bytes out.

use crate::error::{Error, Result};

use bytes::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, instrument, warn, Span};
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Executes a single HTTP request and returns the full response body.
///
/// Only a `200 OK` counts as success. Any other status becomes
/// [`Error::Api`] carrying the status line and the request URL; the error
/// body is never parsed. The response is dropped on every return path, which
/// hands the connection back to the pool.
///
/// # Arguments
/// * `http` - The HTTP client to send with
/// * `method` - Request method
/// * `url` - Fully built request URL, query included
/// * `body` - Optional request body; `POST` marks it as form encoded
#[instrument(
    name = "giphy_request",
    skip_all,
    fields(
        http.method = %method,
        http.url = %redact(url),
        http.status_code = tracing::field::Empty,
    )
)]
pub async fn execute(
    http: &Client,
    method: Method,
    url: &str,
    body: Option<String>,
) -> Result<Bytes> {
    let mut request = http.request(method.clone(), url);

    if method == Method::POST {
        request = request.header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    }
    if let Some(body) = body {
        request = request.body(body);
    }

    let response = request.send().await.map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    Span::current().record("http.status_code", status.as_u16());

    if status != StatusCode::OK {
        warn!(%status, "giphy returned a non-200 status");
        return Err(Error::Api {
            status: status.to_string(),
            url: url.to_string(),
        });
    }

    let raw = response.bytes().await.map_err(|source| Error::Io {
        url: url.to_string(),
        source,
    })?;

    debug!(bytes = raw.len(), "read response body");
    Ok(raw)
}

/// Masks the `api_key` query value so the key never reaches the logs.
pub(crate) fn redact(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "REDACTED".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    if !pairs.is_empty() {
        parsed.query_pairs_mut().clear().extend_pairs(pairs);
    }
    parsed.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_masks_only_the_key() {
        let out = redact("https://api.giphy.com/v1/gifs/search?api_key=secret&q=cat");
        assert!(!out.contains("secret"));
        assert!(out.contains("api_key=REDACTED"));
        assert!(out.contains("q=cat"));
    }

    #[test]
    fn redact_passes_through_unparseable_input() {
        assert_eq!(redact("not a url"), "not a url");
    }

    #[test]
    fn redact_leaves_urls_without_query_alone() {
        assert_eq!(
            redact("https://api.giphy.com/v1/gifs/trending"),
            "https://api.giphy.com/v1/gifs/trending"
        );
    }
}
