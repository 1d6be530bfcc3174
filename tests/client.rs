//! Integration tests for the Giphy client.
//!
//! These tests use wiremock to stand in for the Giphy API and check the
//! requests the client sends and how it handles the answers.

use giphy_api::{Client, Error, Options};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{any, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

/// Builds a client that talks to the mock server.
fn client_for(server: &MockServer) -> Client {
    Client::new(API_KEY).with_base_url("http", &server.address().to_string(), "v1")
}

fn list_body() -> serde_json::Value {
    json!({
        "data": [{ "type": "gif", "id": "a" }, { "type": "gif", "id": "b" }],
        "pagination": { "total_count": 2, "count": 2, "offset": 0 },
        "meta": { "status": 200, "msg": "OK", "response_id": "r" }
    })
}

#[tokio::test]
async fn test_gif_by_id_decodes_nested_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/abc"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"id":"abc"}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let gif = client_for(&server).gif("abc", None).await.unwrap();
    assert_eq!(gif.data.id, "abc");
}

#[tokio::test]
async fn test_search_sends_query_and_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("q", "funny cat"))
        .and(query_param("limit", "3"))
        .and(query_param("offset", "6"))
        .and(query_param("rating", "g"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
        .expect(1)
        .mount(&server)
        .await;

    let options = Options::new().limit(3).offset(6).rating("g").lang("en");
    let search = client_for(&server)
        .search("funny cat", Some(&options))
        .await
        .unwrap();

    assert_eq!(search.data.len(), 2);
    assert_eq!(search.pagination.total_count, 2);
    assert_eq!(search.meta.msg, "OK");
}

#[tokio::test]
async fn test_zero_options_are_not_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .and(query_param("api_key", API_KEY))
        .and(query_param_is_missing("limit"))
        .and(query_param_is_missing("offset"))
        .and(query_param_is_missing("rating"))
        .and(query_param_is_missing("lang"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
        .expect(1)
        .mount(&server)
        .await;

    let trending = client_for(&server)
        .trending(Some(&Options::default()))
        .await
        .unwrap();
    assert_eq!(trending.data[0].id, "a");
}

#[tokio::test]
async fn test_empty_search_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).search("", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid argument: no query specified");
}

#[tokio::test]
async fn test_empty_translate_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).translate("", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[tokio::test]
async fn test_translate_sends_s() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/translate"))
        .and(query_param("s", "perro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "dog1", "title": "dog" },
            "meta": { "status": 200 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let translate = client_for(&server).translate("perro", None).await.unwrap();
    assert_eq!(translate.data.id, "dog1");
    assert_eq!(translate.data.title, "dog");
}

#[tokio::test]
async fn test_random_joins_tags() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/random"))
        .and(query_param("tag", "dog,puppy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "r1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let random = client_for(&server)
        .random(&["dog", "puppy"], None)
        .await
        .unwrap();
    assert_eq!(random.data.id, "r1");
}

#[tokio::test]
async fn test_random_without_tags_sends_no_tag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/random"))
        .and(query_param_is_missing("tag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let tags: Vec<String> = Vec::new();
    let random = client_for(&server).random(tags.as_slice(), None).await.unwrap();
    assert!(random.data.id.is_empty());
}

fn assert_api_error(err: Error, endpoint: &str) {
    match err {
        Error::Api { status, url } => {
            assert!(status.contains("404"), "unexpected status {status}");
            assert!(url.contains(endpoint), "unexpected url {url}");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_200_is_an_api_error_for_every_endpoint() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "meta": { "status": 404, "msg": "Not Found" }
        })))
        .expect(5)
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert_api_error(client.gif("nope", None).await.unwrap_err(), "/v1/gifs/nope");
    assert_api_error(
        client.random(&["dog"], None).await.unwrap_err(),
        "/v1/gifs/random",
    );
    assert_api_error(
        client.search("cat", None).await.unwrap_err(),
        "/v1/gifs/search",
    );
    assert_api_error(
        client.translate("cat", None).await.unwrap_err(),
        "/v1/gifs/translate",
    );
    assert_api_error(client.trending(None).await.unwrap_err(), "/v1/gifs/trending");
}

#[tokio::test]
async fn test_malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).trending(None).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_base_url_change_moves_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/gifs/trending"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        Client::new(API_KEY).with_base_url("http", &server.address().to_string(), "v2");
    assert_eq!(client.base_url(), format!("http://{}/v2", server.address()));

    client
        .trending(Some(&Options::new().limit(1)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // Bind and release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);

    let client = Client::new(API_KEY).with_base_url("http", &address, "v1");
    let err = client.trending(None).await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_custom_http_client_timeout_applies() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = client_for(&server).with_http_client(http);

    let err = client.trending(None).await.unwrap_err();
    match err {
        Error::Transport { source, .. } => assert!(source.is_timeout()),
        other => panic!("expected a transport error, got {other:?}"),
    }
}
