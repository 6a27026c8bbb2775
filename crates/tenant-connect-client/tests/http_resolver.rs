//! End-to-end resolution over HTTP against a mock deployment API.

use serde_json::json;
use tenant_connect_client::{
    ClientConfig, ClientError, HttpRequester, TenantInfoResolver, CONNECTION_INFO_PATH,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver_for(base_url: &str) -> TenantInfoResolver<HttpRequester> {
    let config = ClientConfig::new(base_url, "api-token").with_paas_token("paas-token");
    TenantInfoResolver::new(HttpRequester::new(config).unwrap())
}

#[tokio::test]
async fn fetches_tenant_info_with_paas_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONNECTION_INFO_PATH))
        .and(header("Authorization", "Api-Token paas-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TenantUUID": "abc123",
            "TenantToken": "tenant-token",
            "CommunicationEndpoints": [
                "https://x.example.com/e/abc123",
                "https://y.example.com/e/def456"
            ],
            "FormerEndpoints": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tenant = resolver_for(&server.uri()).fetch().await.unwrap();

    assert_eq!(tenant.id(), "abc123");
    assert_eq!(tenant.token(), "tenant-token");
    assert_eq!(
        tenant.communication_endpoint(),
        "https://x.example.com/e/abc123/communication"
    );
}

#[tokio::test]
async fn base_url_with_trailing_slash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONNECTION_INFO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TenantUUID": "zzz",
            "TenantToken": "t",
            "CommunicationEndpoints": ["https://y.example.com"]
        })))
        .mount(&server)
        .await;

    let tenant = resolver_for(&format!("{}/", server.uri()))
        .fetch()
        .await
        .unwrap();
    assert_eq!(
        tenant.communication_endpoint(),
        "https://y.example.com/communication"
    );
}

#[tokio::test]
async fn empty_endpoints_resolve_without_communication_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONNECTION_INFO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TenantUUID": "zzz",
            "TenantToken": "t",
            "CommunicationEndpoints": []
        })))
        .mount(&server)
        .await;

    let tenant = resolver_for(&server.uri()).fetch().await.unwrap();
    assert!(tenant.endpoints().is_empty());
    assert_eq!(tenant.communication_endpoint(), "");
}

#[tokio::test]
async fn forbidden_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONNECTION_INFO_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "Token is missing required scope"
            }
        })))
        .mount(&server)
        .await;

    let err = resolver_for(&server.uri()).fetch().await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Token is missing required scope");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONNECTION_INFO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"TenantUUID\": "))
        .mount(&server)
        .await;

    let err = resolver_for(&server.uri()).fetch().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Bind and release a port so nothing is listening on it.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let err = resolver_for(&format!("http://{addr}"))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.is_retriable());
}
