mod common;

use northwindDemo::api::{ApiClient, DemoApi, RequestError};
use serde_json::{json, Value};

async fn client() -> ApiClient {
    ApiClient::new(&common::spawn_server().await).unwrap()
}

#[tokio::test]
async fn method_is_case_insensitive() {
    let c = client().await;
    for m in ["get", "GET", "Get"] {
        let v = c.request(m, "/api/echo", None).await.unwrap();
        assert_eq!(v["verb"], "GET", "{}", m);
    }
    let v = c.request("delete", "/api/echo", None).await.unwrap();
    assert_eq!(v["verb"], "DELETE");
}

#[tokio::test]
async fn unknown_or_empty_method_falls_back_to_get() {
    let c = client().await;
    for m in ["patch", "", "OPTIONS"] {
        let v = c.request(m, "/api/echo", None).await.unwrap();
        assert_eq!(v["verb"], "GET", "{:?}", m);
    }
}

#[tokio::test]
async fn post_sends_json_body() {
    let c = client().await;
    let body = json!({"productName": "Demo Product", "unitPrice": 15.99});
    let v = c.request("POST", "/api/echo", Some(&body)).await.unwrap();
    assert_eq!(v["verb"], "POST");
    assert_eq!(v["contentType"], "application/json");
    let sent: Value = serde_json::from_str(v["body"].as_str().unwrap()).unwrap();
    assert_eq!(sent, body);
}

#[tokio::test]
async fn delete_never_sends_a_body() {
    let c = client().await;
    let v = c.request("DELETE", "/api/echo", Some(&json!({"x": 1}))).await.unwrap();
    assert_eq!(v["body"], "");
}

#[tokio::test]
async fn query_string_reaches_the_server() {
    let c = client().await;
    let v = c.request("GET", "/api/echo?page=1&pageSize=10", None).await.unwrap();
    assert_eq!(v["query"], "page=1&pageSize=10");
}

#[tokio::test]
async fn non_2xx_is_a_status_error() {
    let c = client().await;
    let err = c.request("GET", "/api/missing", None).await.unwrap_err();
    assert_eq!(err, RequestError::Status { status: 404 });
    assert_eq!(err.message(), "Request failed with status code 404");

    let err = c.request("GET", "/api/boom", None).await.unwrap_err();
    assert_eq!(err, RequestError::Status { status: 500 });
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let c = client().await;
    let err = c.request("GET", "/api/broken", None).await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)), "{:?}", err);
}

#[tokio::test]
async fn empty_body_is_null() {
    let c = client().await;
    assert_eq!(c.request("PUT", "/api/empty", None).await.unwrap(), Value::Null);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let c = ApiClient::new(&common::dead_url().await).unwrap();
    let err = c.request("GET", "/api/echo", None).await.unwrap_err();
    assert!(matches!(err, RequestError::Transport(_)), "{:?}", err);
    assert!(!err.message().is_empty());
}
