#![allow(clippy::unwrap_used)]
// Integration tests for the bearer-auth refresh flow using wiremock.
//
// These pin the request-authenticator contract: zero refresh calls
// while the token is valid, exactly one refresh + one retry on 401,
// fatal refresh rejection, and wholesale bundle replacement.

use serde_json::json;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gridflow_api::{ApiClient, ApiConfig, AuthConfig, AuthError, AuthToken, Error, TokenStore};

// ── Helpers ─────────────────────────────────────────────────────────

fn stored_token() -> AuthToken {
    AuthToken {
        access_token: "A1".into(),
        refresh_token: "R1".into(),
        id_token: None,
        token_type: Some("Bearer".into()),
        expires_in: Some(86400),
        scope: None,
    }
}

/// Build an `ApiClient` pointed at the mock server, with a token file
/// containing `A1`/`R1` unless `logged_in` is false.
fn setup(server: &MockServer, dir: &TempDir, logged_in: bool) -> ApiClient {
    let token_path = dir.path().join("token.json");
    if logged_in {
        TokenStore::new(&token_path).save(&stored_token()).unwrap();
    }

    let base = Url::parse(&server.uri()).unwrap();
    let auth = AuthConfig::new(base.clone(), "test-client", "https://api.test")
        .with_token_path(token_path);
    ApiClient::new(&ApiConfig::new(base), auth).unwrap()
}

fn node_body() -> serde_json::Value {
    json!({ "nodes": [{ "id": "DEU", "node_type": "admin_0" }] })
}

// ── Refresh-flow contract ───────────────────────────────────────────

#[tokio::test]
async fn valid_token_makes_no_refresh_call() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = setup(&server, &dir, true);

    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let node = client.get_node("DEU", None).await.unwrap();
    assert_eq!(node.id, "DEU");
}

#[tokio::test]
async fn expired_token_refreshes_once_and_retries_with_new_bearer() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = setup(&server, &dir, true);

    // Old token is rejected exactly once.
    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    // The retried request must carry the refreshed token.
    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=R1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A2",
            "refresh_token": "R2",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let node = client.get_node("DEU", None).await.unwrap();
    assert_eq!(node.id, "DEU");

    // The in-memory bundle was replaced wholesale.
    let current = client.auth().current_token().await.unwrap();
    assert_eq!(current.access_token, "A2");
    assert_eq!(current.refresh_token, "R2");

    // And re-persisted, so a restart keeps the rotated refresh token.
    let on_disk = TokenStore::new(dir.path().join("token.json")).load().unwrap();
    assert_eq!(on_disk.access_token, "A2");
    assert_eq!(on_disk.refresh_token, "R2");
}

#[tokio::test]
async fn refresh_rejection_is_fatal_with_no_second_attempt() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = setup(&server, &dir, true);

    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "refresh token expired",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_node("DEU", None).await.unwrap_err();
    match err {
        Error::Auth(AuthError::RefreshToken { description }) => {
            assert!(description.contains("refresh token expired"));
        }
        other => panic!("expected RefreshToken error, got: {other:?}"),
    }
}

#[tokio::test]
async fn second_401_after_refresh_is_returned_as_is() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = setup(&server, &dir, true);

    // Both the original and the retried request get 401.
    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    // Exactly one refresh regardless.
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A2",
            "refresh_token": "R2",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_node("DEU", None).await.unwrap_err();
    assert!(
        matches!(err, Error::Api { status: 401, .. }),
        "expected the second 401 surfaced as-is, got: {err:?}"
    );
}

#[tokio::test]
async fn missing_token_file_fails_before_any_request() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = setup(&server, &dir, false);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.get_node("DEU", None).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Auth(AuthError::CredentialsNotFound { .. })
    ));
    assert!(err.needs_login());
}

#[tokio::test]
async fn concurrent_requests_share_a_single_refresh() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = std::sync::Arc::new(setup(&server, &dir, true));

    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_body()))
        .expect(2)
        .mount(&server)
        .await;

    // The mutex around the bundle means the second 401 observes the
    // already-rotated token and skips its own provider round trip.
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A2",
            "refresh_token": "R2",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (a, b) = tokio::join!(client.get_node("DEU", None), client.get_node("DEU", None));
    assert_eq!(a.unwrap().id, "DEU");
    assert_eq!(b.unwrap().id, "DEU");
}
