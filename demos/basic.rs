//! Example: call every endpoint and dump the responses.
//!
//! Run with `GIPHY_API_KEY=... cargo run --example basic`.

use giphy_api::{Client, Options};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn dump<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::new(std::env::var("GIPHY_API_KEY")?);
    let options = Options::new().limit(3);

    let gif_id = "srmSEu2ZtOq64";
    match client.gif(gif_id, None).await {
        Ok(gif) => println!("got gif response:\n{}", dump(&gif)),
        Err(e) => eprintln!("error getting gif '{}' by ID: {}", gif_id, e),
    }

    let search_query = "blep";
    match client.search(search_query, Some(&options)).await {
        Ok(search) => println!("got search response:\n{}", dump(&search)),
        Err(e) => eprintln!("error searching for '{}' gifs: {}", search_query, e),
    }

    match client.trending(Some(&options)).await {
        Ok(trending) => println!("got trending response:\n{}", dump(&trending)),
        Err(e) => eprintln!("error getting trending gifs: {}", e),
    }

    match client.random(&["dog"], Some(&options)).await {
        Ok(random) => println!("got random response:\n{}", dump(&random)),
        Err(e) => eprintln!("error getting random gifs: {}", e),
    }

    match client.translate("perro", Some(&options)).await {
        Ok(translate) => println!("got translate response:\n{}", dump(&translate)),
        Err(e) => eprintln!("error getting translate gifs: {}", e),
    }

    Ok(())
}
