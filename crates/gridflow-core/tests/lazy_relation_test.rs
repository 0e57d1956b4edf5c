#![allow(clippy::unwrap_used)]
// Integration tests for lazy relationship loading through the live
// HTTP path (wiremock): one fetch on first access, zero after.

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gridflow_api::{ApiClient, ApiConfig, AuthConfig, AuthToken, ModelFilter, TokenStore};
use gridflow_core::{Model, Node, Run};

async fn setup() -> (MockServer, TempDir, Arc<ApiClient>) {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let token_path = dir.path().join("token.json");
    TokenStore::new(&token_path)
        .save(&AuthToken {
            access_token: "A1".into(),
            refresh_token: "R1".into(),
            id_token: None,
            token_type: None,
            expires_in: None,
            scope: None,
        })
        .unwrap();

    let base = Url::parse(&server.uri()).unwrap();
    let auth = AuthConfig::new(base.clone(), "test-client", "https://api.test")
        .with_token_path(token_path);
    let client = Arc::new(ApiClient::new(&ApiConfig::new(base), auth).unwrap());
    (server, dir, client)
}

#[tokio::test]
async fn node_children_load_once_then_come_from_cache() {
    let (server, _dir, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .and(query_param("includes", "children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nodes": [{
                "id": "DEU",
                "children": [{ "id": "DEU-BW" }, { "id": "DEU-BY" }],
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let node = Node::new(
        Arc::clone(&api),
        serde_json::from_value(json!({ "id": "DEU" })).unwrap(),
    );

    let first: Vec<String> = node
        .children()
        .await
        .unwrap()
        .iter()
        .map(|n| n.id().to_owned())
        .collect();
    assert_eq!(first, vec!["DEU-BW", "DEU-BY"]);

    // Second access must not hit the network (mock expects exactly 1).
    let second: Vec<String> = node
        .children()
        .await
        .unwrap()
        .iter()
        .map(|n| n.id().to_owned())
        .collect();
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_relationship_is_cached_too() {
    let (server, _dir, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/nodes/SGP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nodes": [{ "id": "SGP", "children": [] }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let node = Node::new(
        Arc::clone(&api),
        serde_json::from_value(json!({ "id": "SGP" })).unwrap(),
    );

    assert!(node.children().await.unwrap().is_empty());
    assert!(node.children().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_first_access_leaves_relation_retryable() {
    let (server, _dir, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .respond_with(ResponseTemplate::new(500).set_body_string("transient"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/nodes/DEU"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nodes": [{ "id": "DEU", "children": [{ "id": "DEU-BW" }] }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let node = Node::new(
        Arc::clone(&api),
        serde_json::from_value(json!({ "id": "DEU" })).unwrap(),
    );

    assert!(node.children().await.is_err());
    // The slot stayed unset, so this access retries and succeeds.
    assert_eq!(node.children().await.unwrap().len(), 1);
}

#[tokio::test]
async fn single_valued_relation_loads_and_caches() {
    let (server, _dir, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/runs/alice:global-power:net-zero:baseline"))
        .and(query_param("includes", "model_scenario"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slug": "baseline",
            "model_slug": "global-power",
            "model_scenario_slug": "net-zero",
            "owner": "alice",
            "model_scenario": {
                "slug": "net-zero",
                "model_slug": "global-power",
                "owner": "alice",
                "name": "Net Zero",
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let run = Run::new(
        Arc::clone(&api),
        serde_json::from_value(json!({
            "slug": "baseline",
            "model_slug": "global-power",
            "model_scenario_slug": "net-zero",
            "owner": "alice",
        }))
        .unwrap(),
    );

    let scenario = run.model_scenario().await.unwrap();
    assert_eq!(scenario.slug(), "net-zero");
    assert_eq!(scenario.id(), "alice:global-power:net-zero");

    // Cached: no further call recorded by the mock.
    assert_eq!(run.model_scenario().await.unwrap().slug(), "net-zero");
}

#[tokio::test]
async fn hydration_preserves_entry_count_and_ids() {
    let (server, _dir, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                { "slug": "alpha", "owner": "alice" },
                { "slug": "beta", "owner": "alice" },
                { "slug": "gamma", "owner": "bob" },
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let models = Model::search(&api, &ModelFilter::default()).await.unwrap();
    assert_eq!(models.len(), 3);

    let slugs: Vec<&str> = models.iter().map(Model::slug).collect();
    assert_eq!(slugs, vec!["alpha", "beta", "gamma"]);
    assert_eq!(models[2].owner(), "bob");
}
