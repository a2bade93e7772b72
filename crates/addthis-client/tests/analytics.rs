//! Request dispatch tests against a mock AddThis server.

use serde_json::json;
use wiremock::matchers::{basic_auth, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use addthis_client::{blocking, AddthisClient, ClientError, ClientOptions, QueryParams};

const USERID: &str = "test_userid";
const PASSWORD: &str = "test_password";

// ============================================================================
// Helpers
// ============================================================================

fn options(server: &MockServer) -> ClientOptions {
    ClientOptions::with_base_url(format!("{}/analytics/1.0/pub/", server.uri()))
}

fn client(server: &MockServer, pubid: Option<&str>) -> AddthisClient {
    AddthisClient::with_options(USERID, PASSWORD, pubid.map(str::to_string), options(server))
        .expect("client should build")
}

// ============================================================================
// Successful requests
// ============================================================================

#[tokio::test]
async fn get_with_basic_auth_to_metric_dimension_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/1.0/pub/shares/day.json"))
        .and(basic_auth(USERID, PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server, None)
        .metric("shares")
        .dimension("day")
        .send()
        .await
        .unwrap();

    assert_eq!(result, json!({"result": 42}));
}

#[tokio::test]
async fn any_segment_names_are_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/1.0/pub/clickbacks/continent.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"continent": "EU"}])))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server, None)
        .segment("clickbacks")
        .segment("continent")
        .send()
        .await
        .unwrap();

    assert_eq!(result, json!([{"continent": "EU"}]));
}

#[tokio::test]
async fn default_pubid_is_sent_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/1.0/pub/shares/day.json"))
        .and(query_param("pubid", "ra-default"))
        .and(query_param("period", "week"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, Some("ra-default"))
        .metric("shares")
        .dimension("day")
        .param("period", "week")
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn explicit_pubid_overrides_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/1.0/pub/shares/day.json"))
        .and(query_param("pubid", "ra-explicit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = QueryParams::new();
    params.insert("pubid".to_string(), "ra-explicit".to_string());

    client(&server, Some("ra-default"))
        .request("shares", "day", params)
        .await
        .unwrap();
}

#[tokio::test]
async fn no_pubid_without_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/1.0/pub/shares/day.json"))
        .and(query_param_is_missing("pubid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, None)
        .request("shares", "day", QueryParams::new())
        .await
        .unwrap();
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn non_200_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/1.0/pub/shares/day.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 30,
                "message": "invalid parameter",
                "attachment": {"reason": ""}
            }
        })))
        .mount(&server)
        .await;

    let err = client(&server, None)
        .metric("shares")
        .dimension("day")
        .param("test_key", "test_value")
        .send()
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status,
            code,
            message,
            attachment,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, 30);
            assert_eq!(message, "invalid parameter");
            assert_eq!(attachment, json!({"reason": ""}));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn authentication_failure_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": 80,
                "message": "authentication failed",
                "attachment": {"nonce": null, "realm": "AddThis", "opaque": null}
            }
        })))
        .mount(&server)
        .await;

    let err = client(&server, None)
        .metric("shares")
        .dimension("day")
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.code(), Some(80));
    assert_eq!(err.message(), Some("authentication failed"));
    assert_eq!(
        err.attachment(),
        Some(&json!({"nonce": null, "realm": "AddThis", "opaque": null}))
    );
}

#[tokio::test]
async fn wrong_segment_count_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server, None);

    let err = client.segment("one_param").send().await.unwrap_err();
    assert!(matches!(err, ClientError::Validation { expected: 2, actual: 1 }));
    assert!(err.to_string().contains("got 1"));

    let err = client
        .segment("shares")
        .segment("day")
        .segment("extra")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation { expected: 2, actual: 3 }));
    assert!(err.to_string().contains("got 3"));
}

#[tokio::test]
async fn non_json_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server, None)
        .metric("shares")
        .dimension("day")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Serialization(_)));
}

#[tokio::test]
async fn unreachable_host_is_http_error() {
    let options = ClientOptions::with_base_url("http://127.0.0.1:1/analytics/1.0/pub/").timeout(5);
    let client = AddthisClient::with_options(USERID, PASSWORD, None, options).unwrap();

    let err = client
        .metric("shares")
        .dimension("day")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
    assert!(!err.is_api());
}

// ============================================================================
// Blocking client
// ============================================================================

#[tokio::test]
async fn blocking_client_sends_same_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/1.0/pub/shares/day.json"))
        .and(basic_auth(USERID, PASSWORD))
        .and(query_param("pubid", "ra-default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let options = options(&server);
    let result = tokio::task::spawn_blocking(move || {
        let client =
            blocking::AddthisClient::with_options(USERID, PASSWORD, Some("ra-default".into()), options)?;
        client.metric("shares").dimension("day").send()
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(result, json!({"result": 42}));
}

#[tokio::test]
async fn blocking_client_maps_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 30, "message": "invalid parameter", "attachment": null}
        })))
        .mount(&server)
        .await;

    let options = options(&server);
    let err = tokio::task::spawn_blocking(move || {
        let client = blocking::AddthisClient::with_options(USERID, PASSWORD, None, options)?;
        client.segment("shares").segment("day").send()
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.code(), Some(30));
    assert_eq!(err.attachment(), Some(&serde_json::Value::Null));
}
