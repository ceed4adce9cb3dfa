#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::extract::RawQuery;
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{Json, Router};
use northwindDemo::{DemoApi, RequestError};
use serde_json::{json, Value};
use tokio::sync::oneshot;

async fn echo(method: Method, headers: HeaderMap, RawQuery(query): RawQuery, body: String) -> Json<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    Json(json!({
        "verb": method.as_str(),
        "query": query,
        "contentType": content_type,
        "body": body,
    }))
}

async fn broken() -> impl IntoResponse {
    ([("content-type", "application/json")], "{not json")
}

/// Bind a mock backend on an ephemeral port and return its base URL.
pub async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/echo", any(echo))
        .route("/api/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route("/api/boom", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/api/broken", get(broken))
        .route("/api/empty", any(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/api/basicqueries/where",
            get(|| async {
                Json(json!({
                    "method": "Where()",
                    "data": [{"productId": 1, "productName": "Chai", "unitPrice": 18}]
                }))
            }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Test double whose calls each wait on a gate the test opens by hand.
///
/// Calls take gates in the order they are made.
pub struct Gated {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<Value, RequestError>>>>,
}

impl Gated {
    /// A double with `n` gates and the senders that open them.
    pub fn new(n: usize) -> (Self, Vec<oneshot::Sender<Result<Value, RequestError>>>) {
        let mut gates = VecDeque::new();
        let mut senders = Vec::new();
        for _ in 0..n {
            let (tx, rx) = oneshot::channel();
            gates.push_back(rx);
            senders.push(tx);
        }
        (Gated { gates: Mutex::new(gates) }, senders)
    }
}

#[async_trait]
impl DemoApi for Gated {
    async fn request(&self, _: &str, _: &str, _: Option<&Value>) -> Result<Value, RequestError> {
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(RequestError::Transport("gate dropped".into()))),
            None => Err(RequestError::Transport("no gate left".into())),
        }
    }
}

/// Test double answering from a fixed endpoint table; unknown endpoints 404.
pub struct Scripted(pub Vec<(&'static str, Value)>);

#[async_trait]
impl DemoApi for Scripted {
    async fn request(&self, _: &str, endpoint: &str, _: Option<&Value>) -> Result<Value, RequestError> {
        self.0
            .iter()
            .find(|(e, _)| *e == endpoint)
            .map(|(_, v)| Ok(v.clone()))
            .unwrap_or(Err(RequestError::Status { status: 404 }))
    }
}
