#![allow(clippy::unwrap_used)]
// Integration tests for the device-authorization login flow.

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gridflow_api::{AuthError, DeviceFlow, Error, TokenStore};

fn flow(server: &MockServer, dir: &tempfile::TempDir) -> DeviceFlow {
    let issuer = Url::parse(&server.uri()).unwrap();
    let config = gridflow_api::AuthConfig::new(issuer, "test-client", "https://api.test")
        .with_token_path(dir.path().join("token.json"))
        .with_device_flow_max_wait(Duration::from_secs(30));
    DeviceFlow::new(config).unwrap()
}

fn device_code_body() -> serde_json::Value {
    json!({
        "device_code": "DC-1",
        "user_code": "WXYZ-1234",
        "verification_uri_complete": "https://auth.test/activate?user_code=WXYZ-1234",
        "interval": 0,
    })
}

async fn mount_device_code(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/device/code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(device_code_body()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn pending_polls_then_success_persists_token() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let flow = flow(&server, &dir);

    mount_device_code(&server).await;

    // Two pending polls, then the user approves.
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("device_code=DC-1"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "error": "authorization_pending" })),
        )
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A1",
            "refresh_token": "R1",
            "id_token": "ID1",
            "expires_in": 86400,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let grant = flow.start().await.unwrap();
    assert_eq!(grant.user_code, "WXYZ-1234");

    let token = flow.poll(&grant).await.unwrap();
    assert_eq!(token.access_token, "A1");

    // The bundle landed in the token store.
    let on_disk = TokenStore::new(dir.path().join("token.json")).load().unwrap();
    assert_eq!(on_disk, token);
}

#[tokio::test]
async fn slow_down_backs_off_and_still_completes() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let flow = flow(&server, &dir);

    mount_device_code(&server).await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "error": "slow_down" })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A1",
            "refresh_token": "R1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let grant = flow.start().await.unwrap();

    // Completes after one real 5s slow-down backoff.
    let token = flow.poll(&grant).await.unwrap();
    assert_eq!(token.access_token, "A1");
}

#[tokio::test]
async fn provider_error_aborts_the_flow() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let flow = flow(&server, &dir);

    mount_device_code(&server).await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "access_denied",
            "error_description": "the user denied the request",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let grant = flow.start().await.unwrap();
    let err = flow.poll(&grant).await.unwrap_err();
    match err {
        Error::Auth(AuthError::DeviceFlow { description }) => {
            assert!(description.contains("denied"));
        }
        other => panic!("expected DeviceFlow error, got: {other:?}"),
    }
}

#[tokio::test]
async fn polling_is_bounded_by_max_wait() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let issuer = Url::parse(&server.uri()).unwrap();
    let config = gridflow_api::AuthConfig::new(issuer, "test-client", "https://api.test")
        .with_token_path(dir.path().join("token.json"))
        .with_device_flow_max_wait(Duration::ZERO);
    let flow = DeviceFlow::new(config).unwrap();

    mount_device_code(&server).await;

    // The bound is checked before the first poll, so the token
    // endpoint is never hit.
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let grant = flow.start().await.unwrap();
    let err = flow.poll(&grant).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Auth(AuthError::DeviceFlowTimeout { .. })
    ));
}

#[tokio::test]
async fn device_code_request_failure_is_fatal() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let flow = flow(&server, &dir);

    Mock::given(method("POST"))
        .and(path("/oauth/device/code"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = flow.start().await.unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::DeviceFlow { .. })));
}
