use std::time::Duration;

use binwise::ClassificationResult;
use serde::Serialize;

use super::{BackendError, BackendMode, BackendResult, ModelBackend};

/// Upper bound for one remote classification round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for an external model service speaking the same classify wire
/// format. Errors propagate to the caller, which decides whether to fall
/// back to the local mock.
#[derive(Debug, Clone)]
pub struct RemoteModel {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Clone, Serialize)]
struct ClassifyRequest<'a> {
    image: &'a str,
}

impl RemoteModel {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn call_remote(&self, image: &str) -> BackendResult<ClassificationResult> {
        let url = format!("{}/classify", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&ClassifyRequest { image })
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BackendError::Status { status, body });
        }

        Ok(response.json::<ClassificationResult>().await?)
    }
}

#[async_trait::async_trait]
impl ModelBackend for RemoteModel {
    fn mode(&self) -> BackendMode {
        BackendMode::Remote
    }

    fn remote_url(&self) -> Option<&str> {
        Some(&self.base_url)
    }

    async fn classify(&self, image: &str) -> BackendResult<ClassificationResult> {
        self.call_remote(image).await
    }
}
