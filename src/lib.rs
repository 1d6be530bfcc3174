//! Async Rust client for the Giphy GIF API.
//!
//! Covers the GIF endpoints: lookup by id, random, search, translate and
//! trending. Each call sends one GET request and decodes the JSON answer into
//! a typed response. There are no retries; errors go straight back to the
//! caller.
//!
//! # Example
//! ```no_run
//! use giphy_api::{Client, Options};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(std::env::var("GIPHY_API_KEY")?);
//!
//!     let gif = client.gif("srmSEu2ZtOq64", None).await?;
//!     println!("{}", gif.data.title);
//!
//!     let trending = client.trending(Some(&Options::new().limit(3))).await?;
//!     println!("{} trending gifs", trending.data.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod net;
pub mod options;
pub mod types;

// Re-exports for convenience
pub use client::{Client, DEFAULT_API_HOST, DEFAULT_API_SCHEME, DEFAULT_API_VERSION};
pub use error::{Error, Result};
pub use options::Options;
pub use types::{Gif, GifObject, Image, Images, Meta, Pagination, Random, Search, Translate, Trending, User};
