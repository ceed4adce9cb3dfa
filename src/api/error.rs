use thiserror::Error;

/// Failure of a single demo request.
///
/// Every variant collapses to its message once it reaches the demo runner, so
/// the distinction between a refused connection and a 500 only survives in
/// the text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The endpoint could not be joined onto the configured base URL.
    #[error("invalid request url `{0}`")]
    InvalidUrl(String),

    /// Connection refused, DNS failure, timeout and friends.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// The body was not valid JSON.
    #[error("invalid JSON in response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Message stored in the `{error: ...}` result of a failed run.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return RequestError::Status {
                status: status.as_u16(),
            };
        }
        if e.is_decode() {
            return RequestError::Decode(e.to_string());
        }
        // reqwest's top-level message is terse ("error sending request for
        // url ..."); append the innermost cause so "connection refused" shows.
        let mut msg = e.to_string();
        let mut source = std::error::Error::source(&e);
        let mut innermost = None;
        while let Some(s) = source {
            innermost = Some(s.to_string());
            source = s.source();
        }
        if let Some(inner) = innermost {
            if !msg.contains(&inner) {
                msg = format!("{}: {}", msg, inner);
            }
        }
        RequestError::Transport(msg)
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Decode(e.to_string())
    }
}
