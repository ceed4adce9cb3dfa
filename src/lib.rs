pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod envelope;
pub mod errors;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::api::{ApiClient, DemoApi, RequestError};
pub use crate::app::{App, Focus, Mode};
pub use crate::catalog::{Catalog, EndpointDemo};
pub use crate::envelope::{Payload, RunResult};
