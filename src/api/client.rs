use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use super::{DemoApi, HttpMethod, RequestError};

/// Default backend address, the port the Northwind API listens on in dev.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5009";

/// Thin reqwest wrapper that turns `(method, endpoint, body)` into one call.
///
/// No retries, no caching and no timeout beyond reqwest's defaults. Cloning
/// is cheap: the inner `reqwest::Client` is reference counted.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        let base = Url::parse(base_url)
            .map_err(|e| RequestError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(ApiClient {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Join a catalog endpoint (path plus optional literal query string)
    /// onto the base URL.
    pub fn resolve(&self, endpoint: &str) -> Result<Url, RequestError> {
        self.base
            .join(endpoint)
            .map_err(|e| RequestError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }
}

#[async_trait]
impl DemoApi for ApiClient {
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, RequestError> {
        let verb = HttpMethod::from_loose(method);
        let url = self.resolve(endpoint)?;
        debug!(%verb, %url, has_body = body.is_some(), "sending demo request");

        let mut req = self.http.request(verb.into(), url);
        if verb.carries_body() {
            if let Some(b) = body {
                req = req.json(b);
            }
        }

        let resp = req.send().await?.error_for_status()?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        debug!(status = status.as_u16(), len = bytes.len(), "demo response received");

        // 204s and bodiless 200s come back as JSON null rather than a parse
        // failure.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
