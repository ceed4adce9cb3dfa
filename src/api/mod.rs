//! Outbound HTTP to the demo backend.

mod client;
mod error;
mod method;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::RequestError;
pub use method::HttpMethod;

use async_trait::async_trait;
use serde_json::Value;

/// One-shot request seam used by the demo runner.
///
/// `method` is matched case-insensitively and anything other than POST, PUT
/// or DELETE is sent as GET. The parsed JSON body is returned unvalidated.
#[async_trait]
pub trait DemoApi: Send + Sync {
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, RequestError>;
}
