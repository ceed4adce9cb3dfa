pub mod demo_runner;
pub mod event_loop_main;
pub mod handlers;
pub mod headless;
pub mod terminal;

pub use demo_runner::{Completion, DemoRunner, DemoState, MountId, RunPhase};
pub use event_loop_main::run_app;
