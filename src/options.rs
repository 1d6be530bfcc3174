//! Per-call query options and the shared query builder.

use serde::{Deserialize, Serialize};

/// Optional query refinements accepted by every endpoint.
///
/// Zero numbers and empty strings are treated as "not set" and are left out
/// of the request entirely.
///
/// # Example
/// ```
/// use giphy_api::Options;
///
/// let options = Options::new().limit(3).rating("g");
/// assert_eq!(options.limit, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Maximum number of results.
    pub limit: u32,
    /// Index of the first result.
    pub offset: u32,
    /// Content rating filter, e.g. `g` or `pg-13`.
    pub rating: String,
    /// Two letter language code.
    pub lang: String,
}

impl Options {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the result offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the rating filter.
    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    /// Sets the language.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

/// Builds the query parameters shared by all endpoints.
///
/// `api_key` is always present; the rest follow the omission rules of
/// [`Options`].
pub(crate) fn build_query(api_key: &str, options: Option<&Options>) -> Vec<(&'static str, String)> {
    let mut query = vec![("api_key", api_key.to_string())];

    if let Some(opts) = options {
        if opts.limit > 0 {
            query.push(("limit", opts.limit.to_string()));
        }
        if opts.offset > 0 {
            query.push(("offset", opts.offset.to_string()));
        }
        if !opts.rating.is_empty() {
            query.push(("rating", opts.rating.clone()));
        }
        if !opts.lang.is_empty() {
            query.push(("lang", opts.lang.clone()));
        }
    }

    query
}
