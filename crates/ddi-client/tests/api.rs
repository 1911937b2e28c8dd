//! Client tests against a mocked CSP endpoint.

use ddi_client::{DdiClient, DdiError};
use ddi_core::CreateRecordRequest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DdiClient {
    DdiClient::builder("1234567").base_url(server.uri()).build()
}

#[tokio::test]
async fn view_list_sends_filter_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/ddi/v1/dns/view"))
        .and(query_param("_filter", "name==\"test\""))
        .and(query_param("_inherit", "full"))
        .and(header("Authorization", "Token 1234567"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "view-id", "name": "test"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let views = client_for(&server).views().by_name("test").await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, "view-id");
    assert_eq!(views[0].name, "test");
}

#[tokio::test]
async fn zone_list_filters_by_fqdn() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/ddi/v1/dns/auth_zone"))
        .and(query_param("_filter", "fqdn==\"example.com\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": "zone-id", "fqdn": "example.com", "view": "view-id"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let zones = client_for(&server)
        .zones()
        .by_fqdn("example.com")
        .await
        .unwrap();
    assert_eq!(zones[0].id, "zone-id");
    assert_eq!(zones[0].view, "view-id");
}

#[tokio::test]
async fn record_create_posts_body_and_returns_id() {
    let server = MockServer::start().await;

    let request = CreateRecordRequest::txt(
        "_acme-challenge.example.com",
        "dummy-validation",
        "zone-id",
        300,
    );

    Mock::given(method("POST"))
        .and(path("/api/ddi/v1/dns/record"))
        .and(header("Authorization", "Token 1234567"))
        .and(body_json(json!({
            "name": "_acme-challenge.example.com",
            "type": "TXT",
            "rdata": {"text": "dummy-validation"},
            "name_in_zone": "_acme-challenge",
            "zone": "zone-id",
            "ttl": 300
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"id": "txt-id"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = client_for(&server).records().create(&request).await.unwrap();
    assert_eq!(record.id, "txt-id");
}

#[tokio::test]
async fn record_delete_targets_the_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/ddi/v1/dns/record/txt-id"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).records().delete("txt-id").await.unwrap();
}

#[tokio::test]
async fn unauthorized_maps_to_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "invalid token"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).views().by_name("test").await.unwrap_err();
    assert!(matches!(err, DdiError::Unauthorized));
}

#[tokio::test]
async fn not_found_carries_the_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": [{"message": "record not found"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).records().delete("gone").await.unwrap_err();
    match err {
        DdiError::NotFound { resource } => assert_eq!(resource, "record not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_and_server_errors_map_by_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.views().by_name("test").await.unwrap_err();
    assert!(matches!(err, DdiError::RateLimited { .. }));

    let err = client.views().by_name("test").await.unwrap_err();
    match err {
        DdiError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}
