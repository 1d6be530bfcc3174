//! Response types for the Giphy endpoints.
//!
//! Every struct decodes leniently: missing fields fall back to their default
//! and keys this crate does not model are kept in `unknown`, so a value can be
//! serialized back out without losing anything.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Response of the GIF-by-id endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gif {
    /// The requested GIF.
    #[serde(deserialize_with = "object_or_empty")]
    pub data: GifObject,
    /// Response metadata.
    #[serde(deserialize_with = "null_to_default")]
    pub meta: Meta,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, Value>,
}

/// Response of the random endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Random {
    /// A random GIF. Defaulted when nothing matched the tags.
    #[serde(deserialize_with = "object_or_empty")]
    pub data: GifObject,
    /// Response metadata.
    #[serde(deserialize_with = "null_to_default")]
    pub meta: Meta,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, Value>,
}

/// Response of the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Search {
    /// Matching GIFs.
    #[serde(deserialize_with = "null_to_default")]
    pub data: Vec<GifObject>,
    /// Paging info.
    #[serde(deserialize_with = "null_to_default")]
    pub pagination: Pagination,
    /// Response metadata.
    #[serde(deserialize_with = "null_to_default")]
    pub meta: Meta,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, Value>,
}

/// Response of the translate endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Translate {
    /// The GIF the phrase translated to.
    #[serde(deserialize_with = "object_or_empty")]
    pub data: GifObject,
    /// Response metadata.
    #[serde(deserialize_with = "null_to_default")]
    pub meta: Meta,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, Value>,
}

/// Response of the trending endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trending {
    /// Currently trending GIFs.
    #[serde(deserialize_with = "null_to_default")]
    pub data: Vec<GifObject>,
    /// Paging info.
    #[serde(deserialize_with = "null_to_default")]
    pub pagination: Pagination,
    /// Response metadata.
    #[serde(deserialize_with = "null_to_default")]
    pub meta: Meta,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, Value>,
}

/// A single GIF as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GifObject {
    /// Object type, normally `gif`.
    #[serde(rename = "type", deserialize_with = "null_to_default")]
    pub kind: String,
    /// Unique id.
    #[serde(deserialize_with = "null_to_default")]
    pub id: String,
    /// URL slug.
    #[serde(deserialize_with = "null_to_default")]
    pub slug: String,
    /// Page URL on giphy.com.
    #[serde(deserialize_with = "null_to_default")]
    pub url: String,
    /// Short link.
    #[serde(deserialize_with = "null_to_default")]
    pub bitly_url: String,
    /// Embed URL.
    #[serde(deserialize_with = "null_to_default")]
    pub embed_url: String,
    /// Uploader name.
    #[serde(deserialize_with = "null_to_default")]
    pub username: String,
    /// Original source page.
    #[serde(deserialize_with = "null_to_default")]
    pub source: String,
    /// Content rating.
    #[serde(deserialize_with = "null_to_default")]
    pub rating: String,
    /// Title.
    #[serde(deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(deserialize_with = "null_to_default")]
    pub import_datetime: String,
    #[serde(deserialize_with = "null_to_default")]
    pub trending_datetime: String,
    /// Available renditions.
    #[serde(deserialize_with = "null_to_default")]
    pub images: Images,
    /// Uploader profile, absent for anonymous uploads.
    pub user: Option<User>,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, Value>,
}

/// The renditions of a GIF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub original: Option<Image>,
    pub original_still: Option<Image>,
    pub downsized: Option<Image>,
    pub downsized_large: Option<Image>,
    pub downsized_still: Option<Image>,
    pub fixed_height: Option<Image>,
    pub fixed_height_small: Option<Image>,
    pub fixed_height_still: Option<Image>,
    pub fixed_width: Option<Image>,
    pub fixed_width_small: Option<Image>,
    pub fixed_width_still: Option<Image>,
    pub preview_gif: Option<Image>,

    /// Other renditions
    #[serde(flatten)]
    pub unknown: HashMap<String, Value>,
}

/// One rendition. The API sends every number as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub size: Option<String>,
    pub mp4: Option<String>,
    pub webp: Option<String>,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, Value>,
}

/// Public profile of an uploader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_to_default")]
    pub username: String,
    #[serde(deserialize_with = "null_to_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub avatar_url: String,
    #[serde(deserialize_with = "null_to_default")]
    pub profile_url: String,
    #[serde(deserialize_with = "null_to_default")]
    pub is_verified: bool,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, Value>,
}

/// Paging info of list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total number of results available.
    #[serde(deserialize_with = "null_to_default")]
    pub total_count: u64,
    /// Number of results in this response.
    #[serde(deserialize_with = "null_to_default")]
    pub count: u64,
    /// Offset of the first result.
    #[serde(deserialize_with = "null_to_default")]
    pub offset: u64,
}

/// Status block attached to every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// HTTP status code echoed by the API.
    #[serde(deserialize_with = "null_to_default")]
    pub status: u16,
    /// Status message.
    #[serde(deserialize_with = "null_to_default")]
    pub msg: String,
    /// Request id.
    #[serde(deserialize_with = "null_to_default")]
    pub response_id: String,
}

/// Giphy sends `null` for fields it has no value for; treat that like a
/// missing field.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Giphy answers single-object endpoints with `"data": []` when nothing
/// matched; that and `null` decode to an empty [`GifObject`].
fn object_or_empty<'de, D>(deserializer: D) -> Result<GifObject, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(GifObject::default()),
        Value::Array(list) if list.is_empty() => Ok(GifObject::default()),
        value @ Value::Object(_) => GifObject::deserialize(value).map_err(D::Error::custom),
        _ => Err(D::Error::custom("expected a gif object or an empty list")),
    }
}
