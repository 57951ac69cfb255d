//! Integration tests for response classification.
//!
//! Every call must end in exactly one outcome: a decoded value, a decode
//! error, an API error or a transport error.

use std::time::Duration;

use heroku_api::{ApiError, ApiToken, BaseUrl, ClientConfig, HttpError, RestClient};
use serde::Deserialize;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Account {
    email: String,
    verified: bool,
}

fn create_client(base_url: &str) -> RestClient {
    let config = ClientConfig::builder()
        .bearer_token(ApiToken::new("oauth-token").unwrap())
        .base_url(BaseUrl::new(base_url).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

// ============================================================================
// Successful Responses
// ============================================================================

#[tokio::test]
async fn test_success_body_decodes_with_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Request-Id", "req-abc")
                .insert_header("RateLimit-Remaining", "4321")
                .set_body_json(json!({"email": "me@example.com", "verified": true})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let account = assert_ok!(client.get::<Account>("/account").await);

    assert_eq!(
        *account,
        Account {
            email: "me@example.com".to_string(),
            verified: true,
        }
    );
    assert_eq!(account.request_id(), Some("req-abc"));
    assert_eq!(account.rate_limit_remaining(), Some(4321));
    assert!(account.cursor().is_terminal());
}

#[tokio::test]
async fn test_success_with_wrong_shape_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "me@example.com", "verified": "yes"})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let error = assert_err!(client.get::<Account>("/account").await);

    match error {
        HttpError::Decode(e) => {
            assert_eq!(e.status, 200);
            assert_eq!(e.path, "verified");
            assert!(e.body.contains("yes"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_content_decodes_into_unit() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/apps/example/collaborators/friend@example.com"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    assert_ok!(
        client
            .delete::<()>("/apps/example/collaborators/friend@example.com")
            .await
    );
}

// ============================================================================
// API Errors
// ============================================================================

#[tokio::test]
async fn test_unprocessable_entity_decodes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apps"))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("Request-Id", "req-422")
                .set_body_json(json!({
                    "id": "invalid_params",
                    "message": "Name is already taken",
                    "url": "https://devcenter.heroku.com/articles/platform-api-reference#clients"
                })),
        )
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let error = assert_err!(client.post::<serde_json::Value, Account>("/apps", None).await);

    assert!(error.is_api_error());
    assert_eq!(error.status(), Some(422));
    let api = error.as_api_error().unwrap();
    assert_eq!(api.id, "invalid_params");
    assert_eq!(api.message, "Name is already taken");
    assert_eq!(api.request_id.as_deref(), Some("req-422"));
    assert!(api.url.is_some());
}

#[tokio::test]
async fn test_server_error_with_unparseable_body_is_synthesized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let error = assert_err!(client.get::<Account>("/account").await);

    let api = error.as_api_error().unwrap();
    assert_eq!(api.id, ApiError::UNEXPECTED_RESPONSE_ID);
    assert_eq!(api.status, 500);
    assert_eq!(api.message, "<html>Internal Server Error</html>");
}

#[tokio::test]
async fn test_rate_limited_response_is_returned_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("RateLimit-Remaining", "0")
                .set_body_json(json!({"id": "rate_limit", "message": "Your account reached the API rate limit"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let error = assert_err!(client.get::<Account>("/account").await);
    assert_eq!(error.as_api_error().map(|e| e.id.as_str()), Some("rate_limit"));
}

// ============================================================================
// Transport Errors
// ============================================================================

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = create_client("http://127.0.0.1:1");
    let error = assert_err!(client.get::<Account>("/account").await);

    assert!(error.is_transport_error());
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({"email": "me@example.com", "verified": true})),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .anonymous()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let error = assert_err!(client.get::<Account>("/account").await);
    match error {
        HttpError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_remains_usable_after_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"id": "not_found", "message": "Not found"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "me@example.com", "verified": false})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    assert_err!(client.get::<Account>("/missing").await);
    let account = assert_ok!(client.get::<Account>("/account").await);
    assert!(!account.verified);
}
