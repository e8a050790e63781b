//! One-shot word submission.
//!
//! [`Submitter`] is the seam the send-button handler calls through; the
//! production implementation posts JSON with `reqwest`.

use std::future::Future;

use serde_json::Value;

use super::dto::SubmitPayload;
use crate::error::ClientError;

/// Issues the one-shot request/response call.
pub trait Submitter {
    /// Starts a submission and returns a future resolving to the parsed
    /// response body.
    ///
    /// The returned future owns everything it needs so it can be spawned.
    fn submit(
        &self,
        payload: SubmitPayload,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send + 'static;
}

/// [`Submitter`] posting to an HTTP endpoint.
///
/// The HTTP status is not checked: only transport failures and bodies that
/// are not JSON take the error path.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    url: String,
}

impl HttpSubmitter {
    /// Creates a submitter posting to `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Target endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Submitter for HttpSubmitter {
    fn submit(
        &self,
        payload: SubmitPayload,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send + 'static {
        // `json` sets `Content-Type: application/json`.
        let request = self.client.post(&self.url).json(&payload);
        async move {
            let response = request.send().await?;
            tracing::debug!(status = %response.status(), "send endpoint responded");
            let body = response.json::<Value>().await?;
            Ok(body)
        }
    }
}
