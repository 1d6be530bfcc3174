//! Async client for the Giphy API.

use crate::error::{Error, Result};
use crate::net::execute;
use crate::options::{build_query, Options};
use crate::types::{Gif, Random, Search, Translate, Trending};

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use std::time::Duration;

/// Scheme used when no base URL is configured.
pub const DEFAULT_API_SCHEME: &str = "https";
/// Host used when no base URL is configured.
pub const DEFAULT_API_HOST: &str = "api.giphy.com";
/// API version used when no base URL is configured.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Timeout of the default HTTP client, in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Client for the Giphy GIF API.
///
/// Every call is a single GET request. Reconfigure with
/// [`with_http_client`](Client::with_http_client) and
/// [`with_base_url`](Client::with_base_url) before sharing the client; both
/// consume `self`, so a configured client cannot change under in-flight calls.
///
/// # Example
/// ```no_run
/// use giphy_api::{Client, Options};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("your_api_key");
///
///     let search = client.search("blep", Some(&Options::new().limit(3))).await?;
///     for gif in &search.data {
///         println!("{}", gif.url);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a new client for the given API key.
    ///
    /// Uses `https://api.giphy.com/v1` and an HTTP client with a 30 second
    /// timeout.
    ///
    /// # Panics
    /// Panics if the TLS backend cannot be initialized, like
    /// `reqwest::Client::new`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: default_http_client().expect("failed to build client"),
            api_key: api_key.into(),
            base_url: format!(
                "{}://{}/{}",
                DEFAULT_API_SCHEME, DEFAULT_API_HOST, DEFAULT_API_VERSION
            ),
        }
    }

    /// Replaces the HTTP client used to send requests.
    ///
    /// Timeouts, proxies and TLS settings all come from this client.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the scheme, domain and API version of every request URL.
    ///
    /// `domain` may carry a port, e.g. `127.0.0.1:8080`.
    pub fn with_base_url(mut self, scheme: &str, domain: &str, version: &str) -> Self {
        self.base_url = format!("{}://{}/{}", scheme, domain, version);
        self
    }

    /// Gets the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gets the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Fetches a single GIF by its id.
    pub async fn gif(&self, id: &str, options: Option<&Options>) -> Result<Gif> {
        let query = build_query(&self.api_key, options);
        self.get(&["gifs", id], query).await
    }

    /// Fetches a random GIF, optionally limited to the given tags.
    ///
    /// Tags are sent comma separated; an empty slice sends no `tag` at all.
    pub async fn random<S: AsRef<str>>(
        &self,
        tags: &[S],
        options: Option<&Options>,
    ) -> Result<Random> {
        let mut query = build_query(&self.api_key, options);
        if !tags.is_empty() {
            let joined: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();
            query.push(("tag", joined.join(",")));
        }

        self.get(&["gifs", "random"], query).await
    }

    /// Searches for GIFs matching `q`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] without sending anything if `q` is empty.
    pub async fn search(&self, q: &str, options: Option<&Options>) -> Result<Search> {
        if q.is_empty() {
            return Err(Error::InvalidArgument("no query specified".to_string()));
        }

        let mut query = build_query(&self.api_key, options);
        query.push(("q", q.to_string()));

        self.get(&["gifs", "search"], query).await
    }

    /// Translates a word or phrase into a single GIF.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] without sending anything if `s` is empty.
    pub async fn translate(&self, s: &str, options: Option<&Options>) -> Result<Translate> {
        if s.is_empty() {
            return Err(Error::InvalidArgument("no query specified".to_string()));
        }

        let mut query = build_query(&self.api_key, options);
        query.push(("s", s.to_string()));

        self.get(&["gifs", "translate"], query).await
    }

    /// Fetches the currently trending GIFs.
    pub async fn trending(&self, options: Option<&Options>) -> Result<Trending> {
        let query = build_query(&self.api_key, options);
        self.get(&["gifs", "trending"], query).await
    }

    /// Builds the full request URL for `segments` below the base URL.
    fn request_url(&self, segments: &[&str], query: &[(&'static str, String)]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Sends a GET and decodes the JSON body into `T`.
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Vec<(&'static str, String)>,
    ) -> Result<T> {
        let url = self.request_url(segments, &query)?;
        debug!(path = %url.path(), "calling giphy endpoint");

        let data = execute(&self.http, Method::GET, url.as_str(), None).await?;

        serde_json::from_slice(&data).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn default_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT))
        .build()
}
