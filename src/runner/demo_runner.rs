//! Per-page run state and the spawn/settle cycle of a single demo run.
//!
//! A run flips `loading` on synchronously, spawns the request on the current
//! tokio runtime and reports back through an unbounded channel. The owner
//! (the event loop, or a test) feeds each [`Completion`] back into
//! [`DemoRunner::settle`]. Completions carry the mount id of the runner that
//! spawned them so a page that was navigated away from never gets written
//! to again.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::DemoApi;
use crate::catalog::{Catalog, EndpointDemo};
use crate::envelope::RunResult;

/// Identifies one mounting of a page. Bumped on every navigation.
pub type MountId = u64;

/// Loading flag and last outcome of one demo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoState {
    pub loading: bool,
    pub result: Option<RunResult>,
    /// Wall-clock time the last completion was applied.
    pub finished_at: Option<DateTime<Local>>,
}

impl DemoState {
    pub fn phase(&self) -> RunPhase {
        match (&self.result, self.loading) {
            (_, true) => RunPhase::Running,
            (None, false) => RunPhase::Idle,
            (Some(r), false) if r.is_error() => RunPhase::Failed,
            (Some(_), false) => RunPhase::Succeeded,
        }
    }
}

/// Where a demo sits in its `Idle -> Running -> Succeeded/Failed` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Message sent from a finished run back to the loop that owns the runner.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub mount: MountId,
    pub name: &'static str,
    pub result: RunResult,
}

/// Run state for every demo of one mounted catalog.
pub struct DemoRunner {
    catalog: &'static Catalog,
    mount: MountId,
    states: HashMap<&'static str, DemoState>,
    api: Arc<dyn DemoApi>,
    tx: UnboundedSender<Completion>,
}

impl DemoRunner {
    pub fn new(
        catalog: &'static Catalog,
        mount: MountId,
        api: Arc<dyn DemoApi>,
        tx: UnboundedSender<Completion>,
    ) -> Self {
        DemoRunner {
            catalog,
            mount,
            states: HashMap::new(),
            api,
            tx,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn mount(&self) -> MountId {
        self.mount
    }

    /// Start `demo`. Must be called from within a tokio runtime.
    ///
    /// Runs of the same demo are neither de-duplicated nor cancelled: if one
    /// is already in flight both complete, and whichever completion is
    /// settled last owns the stored result.
    pub fn run(&mut self, demo: &'static EndpointDemo) -> JoinHandle<()> {
        self.states.entry(demo.name).or_default().loading = true;

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let mount = self.mount;
        tokio::spawn(async move {
            let result = run_once(api.as_ref(), demo).await;
            let completion = Completion {
                mount,
                name: demo.name,
                result,
            };
            if tx.send(completion).is_err() {
                debug!(demo = demo.name, "completion dropped, receiver gone");
            }
        })
    }

    /// Start the demo called `name`. Returns `false` if the catalog has none.
    pub fn run_by_name(&mut self, name: &str) -> bool {
        match self.catalog.demo(name) {
            Some(demo) => {
                self.run(demo);
                true
            }
            None => false,
        }
    }

    /// Start every demo of the catalog at once.
    pub fn run_all(&mut self) -> Vec<JoinHandle<()>> {
        let catalog = self.catalog;
        catalog.demos.iter().map(|d| self.run(d)).collect()
    }

    /// Apply a finished run. Returns `false` and leaves state untouched when
    /// the completion belongs to a different mount.
    pub fn settle(&mut self, completion: Completion) -> bool {
        if completion.mount != self.mount {
            debug!(
                demo = completion.name,
                stale = completion.mount,
                current = self.mount,
                "discarding completion for unmounted page"
            );
            return false;
        }
        let state = self.states.entry(completion.name).or_default();
        state.result = Some(completion.result);
        state.loading = false;
        state.finished_at = Some(Local::now());
        true
    }

    pub fn state(&self, name: &str) -> Option<&DemoState> {
        self.states.get(name)
    }

    pub fn is_loading(&self, name: &str) -> bool {
        self.states.get(name).map(|s| s.loading).unwrap_or(false)
    }

    pub fn result(&self, name: &str) -> Option<&RunResult> {
        self.states.get(name).and_then(|s| s.result.as_ref())
    }

    pub fn phase(&self, name: &str) -> RunPhase {
        self.states
            .get(name)
            .map(DemoState::phase)
            .unwrap_or(RunPhase::Idle)
    }

    /// Number of demos currently showing a loading state.
    pub fn in_flight(&self) -> usize {
        self.states.values().filter(|s| s.loading).count()
    }
}

/// Perform one request for `demo` and fold any failure into a result.
///
/// Shared by the interactive runner and the headless `run` command.
pub async fn run_once(api: &dyn DemoApi, demo: &EndpointDemo) -> RunResult {
    info!(
        demo = demo.name,
        method = %demo.method,
        endpoint = demo.endpoint,
        "running demo"
    );
    let outcome = api
        .request(demo.method.as_str(), demo.endpoint, demo.body.as_ref())
        .await;
    match &outcome {
        Ok(_) => debug!(demo = demo.name, "demo succeeded"),
        Err(e) => warn!(demo = demo.name, error = %e, "demo failed"),
    }
    RunResult::from(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestError;
    use crate::catalog;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tokio::sync::mpsc;

    struct Echo;

    #[async_trait]
    impl DemoApi for Echo {
        async fn request(
            &self,
            method: &str,
            endpoint: &str,
            _body: Option<&Value>,
        ) -> Result<Value, RequestError> {
            Ok(json!({ "method": method, "data": [{ "endpoint": endpoint }] }))
        }
    }

    fn basic() -> &'static Catalog {
        catalog::by_path("/basic-queries").unwrap()
    }

    #[test]
    fn phase_follows_state() {
        let mut s = DemoState::default();
        assert_eq!(s.phase(), RunPhase::Idle);
        s.loading = true;
        assert_eq!(s.phase(), RunPhase::Running);
        s.loading = false;
        s.result = Some(RunResult::Error("x".into()));
        assert_eq!(s.phase(), RunPhase::Failed);
        s.result = Some(RunResult::Response(json!({})));
        assert_eq!(s.phase(), RunPhase::Succeeded);
    }

    #[tokio::test]
    async fn run_sets_loading_before_the_request_finishes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut runner = DemoRunner::new(basic(), 1, Arc::new(Echo), tx);
        let demo = &basic().demos[0];

        runner.run(demo);
        assert!(runner.is_loading(demo.name));
        assert_eq!(runner.phase(demo.name), RunPhase::Running);

        let c = rx.recv().await.unwrap();
        assert!(runner.settle(c));
        assert!(!runner.is_loading(demo.name));
        assert_eq!(runner.phase(demo.name), RunPhase::Succeeded);
        assert!(runner.state(demo.name).unwrap().finished_at.is_some());
    }

    #[test]
    fn stale_mount_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut runner = DemoRunner::new(basic(), 2, Arc::new(Echo), tx);
        let applied = runner.settle(Completion {
            mount: 1,
            name: "Where()",
            result: RunResult::Response(json!({})),
        });
        assert!(!applied);
        assert!(runner.state("Where()").is_none());
    }

    #[test]
    fn unknown_demo_name_is_not_run() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut runner = DemoRunner::new(basic(), 1, Arc::new(Echo), tx);
        assert!(!runner.run_by_name("Nope()"));
        assert_eq!(runner.in_flight(), 0);
    }

    #[tokio::test]
    async fn run_all_reports_every_demo() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut runner = DemoRunner::new(basic(), 1, Arc::new(Echo), tx);
        let n = runner.run_all().len();
        assert_eq!(n, basic().demos.len());
        assert_eq!(runner.in_flight(), n);

        for _ in 0..n {
            let c = rx.recv().await.unwrap();
            runner.settle(c);
        }
        assert_eq!(runner.in_flight(), 0);
    }
}
