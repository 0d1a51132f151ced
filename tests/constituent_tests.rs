//! Integration tests for the constituent façade.

use std::collections::HashMap;

use serde_json::json;
use sky_api::{AccessToken, BaseUrl, HttpError, SkyApi, SubscriptionKey};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> SkyApi {
    let config = SkyApi::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .subscription_key(SubscriptionKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(&server.uri()).unwrap())
        .build()
        .unwrap();
    SkyApi::new(config).unwrap()
}

#[tokio::test]
async fn test_get_constituent_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/constituent/v1/constituents/7"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("bb-api-subscription-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "7",
            "type": "Individual",
            "first": "Jeff",
            "last": "Pipas"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let constituent = api_for(&server).constituent().get(7).await.unwrap().unwrap();

    assert_eq!(constituent["last"], "Pipas");
}

#[tokio::test]
async fn test_get_constituent_with_string_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/constituent/v1/constituents/280"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "280"})))
        .expect(1)
        .mount(&server)
        .await;

    let constituent = api_for(&server).constituent().get("280").await.unwrap();

    assert_eq!(constituent, Some(json!({"id": "280"})));
}

#[tokio::test]
async fn test_get_missing_constituent_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/constituent/v1/constituents/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!([{
            "message": "The requested resource could not be found.",
            "error_name": "ResourceNotFound"
        }])))
        .mount(&server)
        .await;

    let result = api_for(&server).constituent().get(999).await;

    match result {
        Err(HttpError::Api(e)) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.body.as_json().unwrap()[0]["error_name"], "ResourceNotFound");
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_list_constituents_passes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/constituent/v1/constituents"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 12,
            "value": [{"id": "5"}, {"id": "6"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = HashMap::from([
        ("limit".to_string(), "2".to_string()),
        ("offset".to_string(), "4".to_string()),
    ]);
    let page = api_for(&server)
        .constituent()
        .list(Some(query))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(page["count"], 12);
    assert_eq!(page["value"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_constituent() {
    let body = json!({"type": "Individual", "first": "Jeff", "last": "Pipas"});
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/constituent/v1/constituents"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "281"})))
        .expect(1)
        .mount(&server)
        .await;

    let created = api_for(&server).constituent().create(body).await.unwrap();

    assert_eq!(created, Some(json!({"id": "281"})));
}

#[tokio::test]
async fn test_create_constituent_rejected_is_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/constituent/v1/constituents"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!([{
            "message": "Last name is required.",
            "error_name": "InvalidRequest"
        }])))
        .mount(&server)
        .await;

    let result = api_for(&server)
        .constituent()
        .create(json!({"type": "Individual"}))
        .await;

    assert!(matches!(result, Err(HttpError::Validation(e)) if e.code == 400));
}

#[tokio::test]
async fn test_update_constituent_uses_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/constituent/v1/constituents/7"))
        .and(body_json(json!({"nickname": "JP"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server)
        .constituent()
        .update(7, json!({"nickname": "JP"}))
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn test_delete_constituent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/constituent/v1/constituents/7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server).constituent().delete(7).await.unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn test_facade_and_generic_verbs_share_the_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gift/v1/gifts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/constituent/v1/constituents/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "7"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);

    assert_eq!(
        api.get("gift/v1/gifts", None).await.unwrap(),
        Some(json!({"count": 0}))
    );
    assert_eq!(
        api.constituent().get(7).await.unwrap(),
        Some(json!({"id": "7"}))
    );
}

#[tokio::test]
async fn test_disabled_facade_returns_none() {
    let server = MockServer::start().await;
    let config = SkyApi::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(&server.uri()).unwrap())
        .enabled(false)
        .build()
        .unwrap();
    let api = SkyApi::new(config).unwrap();

    assert_eq!(api.constituent().get(7).await.unwrap(), None);
    assert_eq!(api.constituent().delete(7).await.unwrap(), None);
    assert!(server.received_requests().await.unwrap().is_empty());
}
