mod common;

use std::sync::Arc;

use northwindDemo::api::{ApiClient, RequestError};
use northwindDemo::catalog;
use northwindDemo::envelope::RunResult;
use northwindDemo::runner::{DemoRunner, RunPhase};
use serde_json::json;
use tokio::sync::mpsc;

#[tokio::test]
async fn failure_is_stored_not_raised() {
    let base = common::dead_url().await;
    let api = Arc::new(ApiClient::new(&base).unwrap());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let page = catalog::by_path("/basic-queries").unwrap();
    let mut runner = DemoRunner::new(page, 1, api, tx);

    let demo = page.demo("Count").unwrap();
    runner.run(demo);
    assert!(runner.is_loading("Count"));

    runner.settle(rx.recv().await.unwrap());
    assert!(!runner.is_loading("Count"));
    assert!(matches!(runner.result("Count"), Some(RunResult::Error(msg)) if !msg.is_empty()));
    assert_eq!(runner.phase("Count"), RunPhase::Failed);
}

#[tokio::test]
async fn where_demo_against_mock_backend() {
    let base = common::spawn_server().await;
    let api = Arc::new(ApiClient::new(&base).unwrap());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let page = catalog::by_path("/basic-queries").unwrap();
    let mut runner = DemoRunner::new(page, 1, api, tx);

    assert!(runner.run_by_name("Where (LINQ Filter)"));
    runner.settle(rx.recv().await.unwrap());
    assert_eq!(
        runner.result("Where (LINQ Filter)"),
        Some(&RunResult::Response(json!({
            "method": "Where()",
            "data": [{"productId": 1, "productName": "Chai", "unitPrice": 18}]
        })))
    );
}

#[tokio::test]
async fn distinct_demos_settle_independently() {
    let (api, mut gates) = common::Gated::new(2);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let page = catalog::by_path("/tracking").unwrap();
    let mut runner = DemoRunner::new(page, 1, Arc::new(api), tx);

    let a = &page.demos[0];
    let b = &page.demos[1];
    runner.run(a);
    runner.run(b);
    assert_eq!(runner.in_flight(), 2);

    // Let both tasks take their gates.
    tokio::task::yield_now().await;

    let gate_b = gates.pop().unwrap();
    gate_b.send(Ok(json!({"data": []}))).unwrap();
    runner.settle(rx.recv().await.unwrap());

    assert!(runner.is_loading(a.name));
    assert!(!runner.is_loading(b.name));
    assert!(runner.result(a.name).is_none());

    let gate_a = gates.pop().unwrap();
    gate_a.send(Err(RequestError::Status { status: 500 })).unwrap();
    runner.settle(rx.recv().await.unwrap());
    assert_eq!(runner.phase(a.name), RunPhase::Failed);
    assert_eq!(runner.phase(b.name), RunPhase::Succeeded);
}

// Re-running a demo in flight is not de-duplicated: both requests complete
// and the completion applied last owns the result, even if it was started
// first. Loading also clears on the first completion.
#[tokio::test]
async fn same_demo_twice_last_completion_wins() {
    let (api, mut gates) = common::Gated::new(2);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let page = catalog::by_path("/tracking").unwrap();
    let mut runner = DemoRunner::new(page, 1, Arc::new(api), tx);
    let demo = &page.demos[0];

    runner.run(demo);
    runner.run(demo);
    tokio::task::yield_now().await;

    let second = gates.pop().unwrap();
    let first = gates.pop().unwrap();

    second.send(Ok(json!({"run": 2}))).unwrap();
    runner.settle(rx.recv().await.unwrap());
    assert!(!runner.is_loading(demo.name));
    assert_eq!(runner.result(demo.name), Some(&RunResult::Response(json!({"run": 2}))));

    first.send(Ok(json!({"run": 1}))).unwrap();
    runner.settle(rx.recv().await.unwrap());
    assert_eq!(runner.result(demo.name), Some(&RunResult::Response(json!({"run": 1}))));
}

#[tokio::test]
async fn rerun_keeps_old_result_while_loading() {
    let api = common::Scripted(vec![("/api/tracking/tracked", json!({"n": 1}))]);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let page = catalog::by_path("/tracking").unwrap();
    let mut runner = DemoRunner::new(page, 1, Arc::new(api), tx);
    let demo = page.demos.iter().find(|d| d.endpoint == "/api/tracking/tracked").unwrap();

    runner.run(demo);
    runner.settle(rx.recv().await.unwrap());
    runner.run(demo);
    assert!(runner.is_loading(demo.name));
    assert!(runner.result(demo.name).is_some());
    runner.settle(rx.recv().await.unwrap());
    assert_eq!(runner.phase(demo.name), RunPhase::Succeeded);

    // Anything not in the table 404s.
    let other = &page.demos[1];
    runner.run(other);
    runner.settle(rx.recv().await.unwrap());
    assert_eq!(
        runner.result(other.name),
        Some(&RunResult::Error("Request failed with status code 404".into()))
    );
}
